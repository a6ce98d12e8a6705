use crate::domain::audit::AttemptLogRecord;
use crate::domain::card::{ValidatedPaymentInput, mask_card_number};
use crate::domain::order::OrderSnapshot;
use crate::domain::outcome::RawGatewayResponse;
use crate::domain::ports::AuditStoreBox;
use crate::error::Result;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::debug;

/// Builds the stored snapshot of the checkout input.
///
/// The CV2 and issue number never enter the snapshot and the card number
/// keeps only its last four digits. An absent input (e.g. the attempt
/// failed before validation) produces an empty structure.
pub fn redact_input_snapshot(input: Option<&ValidatedPaymentInput>) -> Value {
    let Some(input) = input else { return json!({}) };

    let mut snapshot = serde_json::Map::new();
    snapshot.insert("card_holder".into(), json!(input.card_holder()));
    snapshot.insert(
        "card_number".into(),
        json!(mask_card_number(input.card_number().expose())),
    );
    if let Some(month) = input.start_month() {
        snapshot.insert("start_month".into(), json!(month));
    }
    if let Some(year) = input.start_year() {
        snapshot.insert("start_year".into(), json!(year));
    }
    snapshot.insert("expiry_month".into(), json!(input.expiry_month()));
    snapshot.insert("expiry_year".into(), json!(input.expiry_year()));
    Value::Object(snapshot)
}

fn response_snapshot(response: Option<&RawGatewayResponse>) -> Value {
    response
        .and_then(|r| serde_json::to_value(r).ok())
        .unwrap_or_else(|| json!({}))
}

/// Writes one redacted, fully formed record per gateway attempt.
pub struct AttemptLogger {
    store: AuditStoreBox,
}

impl AttemptLogger {
    pub fn new(store: AuditStoreBox) -> Self {
        Self { store }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn log(
        &self,
        order: &OrderSnapshot,
        summary: &str,
        success: bool,
        input: Option<&ValidatedPaymentInput>,
        response: Option<&RawGatewayResponse>,
        gateway_message: Option<&str>,
        cv2_check: Option<&str>,
        extra: Option<&str>,
        address_check: Option<&str>,
    ) -> Result<()> {
        let record = AttemptLogRecord {
            at: Utc::now(),
            order_id: order.id,
            summary: summary.to_string(),
            success,
            request_snapshot: redact_input_snapshot(input),
            response_snapshot: response_snapshot(response),
            gateway_message: gateway_message.map(str::to_string),
            cv2_check: cv2_check.map(str::to_string),
            extra: extra.map(str::to_string),
            address_check: address_check.map(str::to_string),
        };

        debug!(order_id = order.id, success, "appending payment attempt record");
        self.store.append(record).await
    }
}
