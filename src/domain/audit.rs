use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One durable record of a gateway attempt, success or failure.
///
/// Snapshots stored here have already been redacted: the CV2 and issue
/// number are absent and the card number keeps only its last four digits.
/// Records are append-only and fully formed before they reach a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptLogRecord {
    pub at: DateTime<Utc>,
    pub order_id: u64,
    pub summary: String,
    pub success: bool,
    pub request_snapshot: serde_json::Value,
    pub response_snapshot: serde_json::Value,
    #[serde(default)]
    pub gateway_message: Option<String>,
    #[serde(default)]
    pub cv2_check: Option<String>,
    #[serde(default)]
    pub extra: Option<String>,
    #[serde(default)]
    pub address_check: Option<String>,
}
