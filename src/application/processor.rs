use crate::application::audit::AttemptLogger;
use crate::application::builder;
use crate::application::interpreter::interpret;
use crate::application::submitter::{DEFAULT_ATTEMPT_TIMEOUT, TransactionSubmitter};
use crate::application::validate::validate;
use crate::domain::card::RawPaymentInput;
use crate::domain::endpoint::GatewayEndpointList;
use crate::domain::merchant::{MerchantCredentials, TransactionPolicy};
use crate::domain::order::OrderSnapshot;
use crate::domain::outcome::SuccessDetails;
use crate::domain::ports::{
    AuditStoreBox, CurrencySettingsBox, GatewayTransportBox, OrderFinalizerBox, OrderStatusLogBox,
};
use crate::error::{ClassifiedFailure, Result};
use std::time::Duration;
use tracing::{info, warn};

/// Shop-side processing settings, shared read-only across submissions.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub endpoints: GatewayEndpointList,
    /// Order status assigned after a successful payment.
    pub paid_status: u32,
    pub attempt_timeout: Duration,
}

impl ProcessorConfig {
    pub fn new(endpoints: GatewayEndpointList, paid_status: u32) -> Self {
        Self {
            endpoints,
            paid_status,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }
}

/// The card transaction engine.
///
/// Takes raw checkout input, validates it, builds and submits a gateway
/// request with failover, interprets the coded reply, and drives the order
/// forward or raises a classified failure. Every attempt, successful or
/// not, leaves exactly one redacted audit record.
pub struct PaymentProcessor {
    submitter: TransactionSubmitter,
    logger: AttemptLogger,
    finalizer: OrderFinalizerBox,
    status_log: OrderStatusLogBox,
    currency: CurrencySettingsBox,
    config: ProcessorConfig,
}

impl PaymentProcessor {
    pub fn new(
        transport: GatewayTransportBox,
        audit: AuditStoreBox,
        finalizer: OrderFinalizerBox,
        status_log: OrderStatusLogBox,
        currency: CurrencySettingsBox,
        config: ProcessorConfig,
    ) -> Self {
        Self {
            submitter: TransactionSubmitter::new(transport, config.attempt_timeout),
            logger: AttemptLogger::new(audit),
            finalizer,
            status_log,
            currency,
            config,
        }
    }

    /// Processes one payment synchronously within the calling request.
    ///
    /// `back_office` selects how much detail the failure message may carry:
    /// operators see the underlying cause, customers only a generic
    /// decline.
    pub async fn process_payment(
        &self,
        input: &RawPaymentInput,
        merchant: &MerchantCredentials,
        policy: &TransactionPolicy,
        order: &OrderSnapshot,
        back_office: bool,
    ) -> std::result::Result<SuccessDetails, ClassifiedFailure> {
        match self.attempt(input, merchant, policy, order).await {
            Ok(details) => Ok(details),
            Err(error) => {
                if let Err(log_error) = self
                    .logger
                    .log(
                        order,
                        &error.to_string(),
                        false,
                        None,
                        None,
                        None,
                        None,
                        None,
                        None,
                    )
                    .await
                {
                    warn!(
                        order_id = order.id,
                        error = %log_error,
                        "failed to append payment attempt record"
                    );
                }
                warn!(order_id = order.id, error = %error, "payment failed");
                Err(ClassifiedFailure::new(error, back_office))
            }
        }
    }

    async fn attempt(
        &self,
        input: &RawPaymentInput,
        merchant: &MerchantCredentials,
        policy: &TransactionPolicy,
        order: &OrderSnapshot,
    ) -> Result<SuccessDetails> {
        let validated = validate(input)?;

        let request = builder::build(
            &validated,
            merchant,
            policy,
            order,
            self.currency.as_ref(),
            self.config.endpoints.clone(),
        )
        .await?;

        let response = self.submitter.submit(&request).await?;
        let details = interpret(&response).into_result()?;

        self.logger
            .log(
                order,
                "Successful payment",
                true,
                Some(&validated),
                Some(&response),
                Some(&response.message),
                Some(&details.cv2_check),
                None,
                Some(&details.address_check),
            )
            .await?;

        self.status_log
            .record_transition(self.config.paid_status, order)
            .await?;
        self.finalizer.mark_paid(order).await?;

        info!(
            order_id = order.id,
            auth_code = %details.auth_code,
            "payment approved"
        );
        Ok(details)
    }
}
