use crate::domain::audit::AttemptLogRecord;
use crate::domain::ports::AuditStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Durable append-only audit store: one JSON record per line.
///
/// The record is serialized in full before the file lock is taken and
/// written with a single call, so concurrent writers never interleave
/// partial records. `Clone` shares the underlying file handle.
#[derive(Clone)]
pub struct JsonlAuditStore {
    file: Arc<Mutex<File>>,
}

impl JsonlAuditStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }
}

#[async_trait]
impl AuditStore for JsonlAuditStore {
    async fn append(&self, record: AttemptLogRecord) -> Result<()> {
        let mut line = serde_json::to_vec(&record).map_err(|e| {
            PaymentError::Audit(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        line.push(b'\n');

        let mut file = self.file.lock().await;
        file.write_all(&line)?;
        file.flush()?;
        Ok(())
    }
}
