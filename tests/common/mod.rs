use async_trait::async_trait;
use cardsave_direct::application::processor::{PaymentProcessor, ProcessorConfig};
use cardsave_direct::domain::card::{RawPaymentInput, Sensitive};
use cardsave_direct::domain::endpoint::GatewayEndpointList;
use cardsave_direct::domain::merchant::{HashMethod, MerchantCredentials, TransactionPolicy};
use cardsave_direct::domain::order::{BillingAddress, OrderSnapshot};
use cardsave_direct::domain::outcome::RawGatewayResponse;
use cardsave_direct::domain::ports::GatewayTransport;
use cardsave_direct::domain::request::TransactionRequest;
use cardsave_direct::error::{PaymentError, Result};
use cardsave_direct::infrastructure::in_memory::{
    InMemoryAuditStore, RecordingOrderFinalizer, RecordingStatusLog, StaticCurrencySettings,
};
use rust_decimal::Decimal;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Step = std::result::Result<RawGatewayResponse, String>;

/// Gateway double that plays back a queue of scripted steps per endpoint,
/// records every call, and captures the last request it saw.
#[derive(Clone, Default)]
pub struct FakeTransport {
    steps: Arc<Mutex<HashMap<String, VecDeque<Step>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    last_request: Arc<Mutex<Option<TransactionRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, base_url: &str, response: RawGatewayResponse) {
        self.enqueue(base_url, Ok(response));
    }

    pub fn fail(&self, base_url: &str, message: &str) {
        self.enqueue(base_url, Err(message.to_string()));
    }

    fn enqueue(&self, base_url: &str, step: Step) {
        self.steps
            .lock()
            .unwrap()
            .entry(base_url.to_string())
            .or_default()
            .push_back(step);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<TransactionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl GatewayTransport for FakeTransport {
    async fn post(
        &self,
        base_url: &str,
        request: &TransactionRequest,
    ) -> Result<RawGatewayResponse> {
        self.calls.lock().unwrap().push(base_url.to_string());
        *self.last_request.lock().unwrap() = Some(request.clone());

        let step = self
            .steps
            .lock()
            .unwrap()
            .get_mut(base_url)
            .and_then(VecDeque::pop_front);
        match step {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(PaymentError::Transport(message)),
            None => Err(PaymentError::Transport("connection refused".to_string())),
        }
    }
}

pub fn approved_response() -> RawGatewayResponse {
    RawGatewayResponse {
        status_code: 0,
        message: "AuthCode: 12345".into(),
        auth_code: Some("12345".into()),
        address_numeric_check: Some("PASSED".into()),
        postcode_check: Some("PASSED".into()),
        cv2_check: Some("PASSED".into()),
        card_issuer: Some("HSBC".into()),
        card_type: Some("Visa Credit".into()),
        ..RawGatewayResponse::default()
    }
}

pub fn declined_response(reason: &str) -> RawGatewayResponse {
    RawGatewayResponse {
        status_code: 5,
        message: reason.into(),
        ..RawGatewayResponse::default()
    }
}

pub fn valid_card() -> RawPaymentInput {
    RawPaymentInput {
        card_holder: "A Cardholder".into(),
        card_number: Sensitive::new("4111111111111111".into()),
        start_month: None,
        start_year: None,
        expiry_month: "08".into(),
        expiry_year: "2028".into(),
        cv2: Sensitive::new("123".into()),
        issue_number: None,
    }
}

pub fn merchant() -> MerchantCredentials {
    MerchantCredentials {
        merchant_id: "MID-0001".into(),
        password: Sensitive::new("secret".into()),
        hash_method: HashMethod::Sha1,
        shared_key: Sensitive::new("key".into()),
    }
}

pub fn order_gbp(id: u64, total: Decimal) -> OrderSnapshot {
    OrderSnapshot {
        id,
        total,
        billing: BillingAddress {
            street: "1 High Street".into(),
            company: "".into(),
            city: "London".into(),
            region: None,
            postcode: "N1 1AA".into(),
            country_numeric: Some(826),
        },
        email: "customer@example.com".into(),
        phone: "0200000000".into(),
        client_ip: "203.0.113.7".into(),
        user_agent: "Mozilla/5.0".into(),
    }
}

pub fn single_endpoint() -> GatewayEndpointList {
    let mut list = GatewayEndpointList::new();
    list.add("https://gw-a.example", 100, 2);
    list
}

pub fn three_endpoints() -> GatewayEndpointList {
    let mut list = GatewayEndpointList::new();
    list.add("https://gw-a.example", 100, 2);
    list.add("https://gw-b.example", 200, 2);
    list.add("https://gw-c.example", 300, 2);
    list
}

pub const PAID_STATUS: u32 = 5;

/// A processor wired to fakes, with handles kept for assertions.
pub struct Harness {
    pub transport: FakeTransport,
    pub audit: InMemoryAuditStore,
    pub finalizer: RecordingOrderFinalizer,
    pub status_log: RecordingStatusLog,
    pub processor: PaymentProcessor,
}

pub fn harness(endpoints: GatewayEndpointList, currency: Option<u16>) -> Harness {
    let transport = FakeTransport::new();
    let audit = InMemoryAuditStore::new();
    let finalizer = RecordingOrderFinalizer::new();
    let status_log = RecordingStatusLog::new();

    let processor = PaymentProcessor::new(
        Box::new(transport.clone()),
        Box::new(audit.clone()),
        Box::new(finalizer.clone()),
        Box::new(status_log.clone()),
        Box::new(StaticCurrencySettings::new(currency)),
        ProcessorConfig::new(endpoints, PAID_STATUS).with_attempt_timeout(Duration::from_secs(1)),
    );

    Harness {
        transport,
        audit,
        finalizer,
        status_log,
        processor,
    }
}

pub fn gbp_harness(endpoints: GatewayEndpointList) -> Harness {
    harness(endpoints, Some(826))
}

pub fn policy() -> TransactionPolicy {
    TransactionPolicy::default()
}
