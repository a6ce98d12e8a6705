use crate::domain::outcome::RawGatewayResponse;
use crate::domain::ports::GatewayTransport;
use crate::domain::request::TransactionRequest;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::time::Duration;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .pool_max_idle_per_host(10)
        .connect_timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build reqwest client")
});

/// Gateway transport speaking JSON over HTTPS.
///
/// The gateway's proprietary wire encoding lives outside this crate; this
/// adapter posts the typed request as JSON and decodes a JSON reply, the
/// same contract the test doubles implement. Per-attempt timeouts are the
/// submitter's job; the shared client only bounds connection setup.
#[derive(Debug, Clone, Default)]
pub struct HttpGatewayTransport;

impl HttpGatewayTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GatewayTransport for HttpGatewayTransport {
    async fn post(
        &self,
        base_url: &str,
        request: &TransactionRequest,
    ) -> Result<RawGatewayResponse> {
        let response = CLIENT
            .post(base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        response
            .json::<RawGatewayResponse>()
            .await
            .map_err(|e| PaymentError::Transport(format!("undecodable gateway reply: {e}")))
    }
}
