use crate::domain::audit::AttemptLogRecord;
use crate::domain::order::OrderSnapshot;
use crate::domain::outcome::RawGatewayResponse;
use crate::domain::request::TransactionRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Transport able to deliver an encoded transaction request to a gateway
/// base address and decode the reply.
///
/// An `Err` means a transport-level non-response for that single attempt.
/// Any decoded gateway reply, approved or not, is `Ok` — the submitter
/// relies on this to never retry a decoded decline.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn post(
        &self,
        base_url: &str,
        request: &TransactionRequest,
    ) -> Result<RawGatewayResponse>;
}

#[async_trait]
pub trait CurrencySettings: Send + Sync {
    /// ISO 4217 numeric code of the shop currency, if configured.
    async fn current(&self) -> Result<Option<u16>>;
}

#[async_trait]
pub trait OrderFinalizer: Send + Sync {
    async fn mark_paid(&self, order: &OrderSnapshot) -> Result<()>;
}

#[async_trait]
pub trait OrderStatusLog: Send + Sync {
    async fn record_transition(&self, status_id: u32, order: &OrderSnapshot) -> Result<()>;
}

/// Append-only audit sink. Each call persists one fully formed record.
#[async_trait]
pub trait AuditStore: Send + Sync {
    async fn append(&self, record: AttemptLogRecord) -> Result<()>;
}

pub type GatewayTransportBox = Box<dyn GatewayTransport>;
pub type CurrencySettingsBox = Box<dyn CurrencySettings>;
pub type OrderFinalizerBox = Box<dyn OrderFinalizer>;
pub type OrderStatusLogBox = Box<dyn OrderStatusLog>;
pub type AuditStoreBox = Box<dyn AuditStore>;
