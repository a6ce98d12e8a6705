use crate::domain::card::Sensitive;
use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};

/// Gateway account password length cap, enforced when configuration is
/// loaded rather than per transaction.
pub const MAX_PASSWORD_LEN: usize = 15;

/// Hashing scheme agreed with the gateway for transaction signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashMethod {
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "HMACMD5")]
    HmacMd5,
    #[serde(rename = "MD5")]
    Md5,
    #[serde(rename = "HMACSHA1")]
    HmacSha1,
}

impl HashMethod {
    pub const ALL: [HashMethod; 4] = [
        HashMethod::Sha1,
        HashMethod::HmacMd5,
        HashMethod::Md5,
        HashMethod::HmacSha1,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HashMethod::Sha1 => "SHA1",
            HashMethod::HmacMd5 => "HMACMD5",
            HashMethod::Md5 => "MD5",
            HashMethod::HmacSha1 => "HMACSHA1",
        }
    }
}

/// Merchant account details, immutable for the lifetime of a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantCredentials {
    pub merchant_id: String,
    pub password: Sensitive<String>,
    pub hash_method: HashMethod,
    pub shared_key: Sensitive<String>,
}

impl MerchantCredentials {
    /// Configuration-time checks, mirroring what the admin form enforces
    /// on save.
    pub fn validate(&self) -> Result<()> {
        if self.merchant_id.trim().is_empty() {
            return Err(PaymentError::Configuration(
                "merchant id must not be empty".to_string(),
            ));
        }
        if self.password.expose().len() > MAX_PASSWORD_LEN {
            return Err(PaymentError::Configuration(format!(
                "password must be {MAX_PASSWORD_LEN} characters or shorter"
            )));
        }
        Ok(())
    }
}

/// The kind of card transaction requested from the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "PREAUTH")]
    PreAuth,
    #[serde(rename = "SALE")]
    Sale,
}

impl TransactionKind {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionKind::PreAuth => "PREAUTH",
            TransactionKind::Sale => "SALE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::PreAuth => "Pre-authorization",
            TransactionKind::Sale => "Purchase",
        }
    }
}

/// Per-merchant transaction policy, configured once and reused for every
/// submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionPolicy {
    pub kind: TransactionKind,
    /// Window, in gateway time units, within which an identical
    /// resubmission is reported as a duplicate instead of charged again.
    pub duplicate_delay: u32,
    pub echo_card_type: bool,
    pub echo_amount_received: bool,
    pub echo_avs_check_result: bool,
    pub echo_cv2_check_result: bool,
    /// Carried on every request for forward compatibility; 3-D Secure
    /// flows are not implemented and status code 3 is a hard failure.
    pub three_d_secure_override: bool,
}

impl Default for TransactionPolicy {
    fn default() -> Self {
        Self {
            kind: TransactionKind::Sale,
            duplicate_delay: 1,
            echo_card_type: true,
            echo_amount_received: true,
            echo_avs_check_result: true,
            echo_cv2_check_result: true,
            three_d_secure_override: true,
        }
    }
}
