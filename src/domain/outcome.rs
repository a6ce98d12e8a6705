use crate::error::RejectedPayment;
use serde::{Deserialize, Serialize};

/// A gateway reply after wire decoding, independent of the gateway's
/// proprietary encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGatewayResponse {
    pub status_code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub auth_code: Option<String>,
    #[serde(default)]
    pub address_numeric_check: Option<String>,
    #[serde(default)]
    pub postcode_check: Option<String>,
    #[serde(default)]
    pub cv2_check: Option<String>,
    #[serde(default)]
    pub card_issuer: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
}

/// Result fields of an approved transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDetails {
    pub auth_code: String,
    /// Numeric address (AVS) check result reported by the issuer.
    pub address_check: String,
    pub postcode_check: String,
    pub cv2_check: String,
    pub card_issuer: String,
    pub card_type: String,
}

/// The interpreted result of one submission. Exactly one variant per
/// attempt, never partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionOutcome {
    Success(SuccessDetails),
    Declined { reason: String },
    Referred,
    SecureAuthRequired,
    Duplicate { reason: String },
    GatewayError { detail: String },
    UnknownCode { code: i32 },
}

impl TransactionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransactionOutcome::Success(_))
    }

    /// Splits the outcome into an approved payment or its classified
    /// rejection.
    pub fn into_result(self) -> std::result::Result<SuccessDetails, RejectedPayment> {
        match self {
            TransactionOutcome::Success(details) => Ok(details),
            TransactionOutcome::Declined { reason } => Err(RejectedPayment::Declined(reason)),
            TransactionOutcome::Referred => Err(RejectedPayment::Referred),
            TransactionOutcome::SecureAuthRequired => Err(RejectedPayment::SecureAuthRequired),
            TransactionOutcome::Duplicate { reason } => Err(RejectedPayment::Duplicate(reason)),
            TransactionOutcome::GatewayError { detail } => Err(RejectedPayment::Gateway(detail)),
            TransactionOutcome::UnknownCode { code } => Err(RejectedPayment::UnknownCode(code)),
        }
    }
}
