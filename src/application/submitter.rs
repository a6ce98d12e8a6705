use crate::domain::outcome::RawGatewayResponse;
use crate::domain::ports::GatewayTransportBox;
use crate::domain::request::TransactionRequest;
use crate::error::{PaymentError, Result};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Delivers a built request to the gateway, walking the endpoint list in
/// priority order with a retry budget per endpoint.
///
/// From the caller's perspective the whole submission is one attempt:
/// retries and failover are invisible except through latency and the final
/// result. Endpoints are tried strictly one at a time — racing the same
/// order against multiple gateways risks a double charge.
pub struct TransactionSubmitter {
    transport: GatewayTransportBox,
    attempt_timeout: Duration,
}

impl TransactionSubmitter {
    pub fn new(transport: GatewayTransportBox, attempt_timeout: Duration) -> Self {
        Self {
            transport,
            attempt_timeout,
        }
    }

    /// Returns the first decoded response, approved or not. Retries apply
    /// only to transport-level non-responses; a decoded decline propagates
    /// immediately so the charge is never re-attempted. When every
    /// endpoint exhausts its budget the submission is a communication
    /// failure.
    pub async fn submit(&self, request: &TransactionRequest) -> Result<RawGatewayResponse> {
        let endpoints = request.endpoints.ordered();
        if endpoints.is_empty() {
            return Err(PaymentError::Configuration(
                "no gateway endpoints configured".to_string(),
            ));
        }

        for endpoint in &endpoints {
            let attempts = endpoint.retries.max(1);
            for attempt in 1..=attempts {
                match timeout(
                    self.attempt_timeout,
                    self.transport.post(&endpoint.base_url, request),
                )
                .await
                {
                    Ok(Ok(response)) => {
                        debug!(
                            endpoint = %endpoint.base_url,
                            attempt,
                            status_code = response.status_code,
                            "gateway responded"
                        );
                        return Ok(response);
                    }
                    Ok(Err(error)) => {
                        warn!(
                            endpoint = %endpoint.base_url,
                            attempt,
                            attempts,
                            error = %error,
                            "gateway attempt failed"
                        );
                    }
                    Err(_) => {
                        warn!(
                            endpoint = %endpoint.base_url,
                            attempt,
                            attempts,
                            timeout_ms = self.attempt_timeout.as_millis() as u64,
                            "gateway attempt timed out"
                        );
                    }
                }
            }
        }

        Err(PaymentError::Communication)
    }
}
