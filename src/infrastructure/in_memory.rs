use crate::domain::audit::AttemptLogRecord;
use crate::domain::order::OrderSnapshot;
use crate::domain::ports::{AuditStore, CurrencySettings, OrderFinalizer, OrderStatusLog};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory audit store.
///
/// Useful for tests and for back-office surfaces that display recent
/// attempts without a durable sink configured. `Clone` shares the record
/// buffer.
#[derive(Default, Clone)]
pub struct InMemoryAuditStore {
    records: Arc<RwLock<Vec<AttemptLogRecord>>>,
}

impl InMemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<AttemptLogRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn append(&self, record: AttemptLogRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(())
    }
}

/// Currency settings resolved from static configuration rather than a
/// shop database.
#[derive(Debug, Clone, Default)]
pub struct StaticCurrencySettings {
    code: Option<u16>,
}

impl StaticCurrencySettings {
    pub fn new(code: Option<u16>) -> Self {
        Self { code }
    }
}

#[async_trait]
impl CurrencySettings for StaticCurrencySettings {
    async fn current(&self) -> Result<Option<u16>> {
        Ok(self.code)
    }
}

/// Order finalizer that records which orders were marked paid.
#[derive(Default, Clone)]
pub struct RecordingOrderFinalizer {
    paid: Arc<RwLock<Vec<u64>>>,
}

impl RecordingOrderFinalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn paid_orders(&self) -> Vec<u64> {
        self.paid.read().await.clone()
    }
}

#[async_trait]
impl OrderFinalizer for RecordingOrderFinalizer {
    async fn mark_paid(&self, order: &OrderSnapshot) -> Result<()> {
        let mut paid = self.paid.write().await;
        paid.push(order.id);
        Ok(())
    }
}

/// Status log that records requested transitions as `(status_id, order_id)`
/// pairs.
#[derive(Default, Clone)]
pub struct RecordingStatusLog {
    transitions: Arc<RwLock<Vec<(u32, u64)>>>,
}

impl RecordingStatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn transitions(&self) -> Vec<(u32, u64)> {
        self.transitions.read().await.clone()
    }
}

#[async_trait]
impl OrderStatusLog for RecordingStatusLog {
    async fn record_transition(&self, status_id: u32, order: &OrderSnapshot) -> Result<()> {
        let mut transitions = self.transitions.write().await;
        transitions.push((status_id, order.id));
        Ok(())
    }
}
