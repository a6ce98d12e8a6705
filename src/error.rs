use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// A single invalid checkout field and its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A gateway outcome other than an approved payment.
///
/// Each variant corresponds to one decoded gateway status code, so callers
/// can react to the kind of rejection without parsing message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectedPayment {
    #[error("credit card requires 3D secure but it has not been implemented")]
    SecureAuthRequired,
    #[error("transaction referred")]
    Referred,
    #[error("credit card payment declined: {0}")]
    Declined(String),
    #[error("duplicate transaction: {0}")]
    Duplicate(String),
    #[error("gateway error: {0}")]
    Gateway(String),
    #[error("unknown gateway response code: {0}")]
    UnknownCode(i32),
}

#[derive(Error, Debug)]
pub enum PaymentError {
    /// One or more malformed or missing checkout fields. No gateway contact
    /// was attempted.
    #[error("invalid payment details: {}", join_messages(.0))]
    Validation(Vec<FieldError>),

    /// Missing currency/country reference data or bad merchant settings.
    /// Operational, not user-recoverable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A single attempt against one endpoint produced no decodable response.
    #[error("gateway transport error: {0}")]
    Transport(String),

    /// Every endpoint exhausted its retry budget without a decodable response.
    #[error("unable to communicate with payment gateway")]
    Communication,

    /// The gateway answered, but not with an approval.
    #[error("{0}")]
    Rejected(#[from] RejectedPayment),

    #[error("audit store error: {0}")]
    Audit(#[from] std::io::Error),
}

/// The failure returned by `PaymentProcessor::process_payment`.
///
/// `user_message` is what the calling surface may display. Back-office
/// callers get the underlying detail; customer-facing callers get a generic
/// decline so internal diagnostics never leak into checkout. Validation
/// failures keep their field-level messages in both contexts.
#[derive(Error, Debug)]
#[error("{user_message}")]
pub struct ClassifiedFailure {
    pub error: PaymentError,
    pub user_message: String,
}

impl ClassifiedFailure {
    pub(crate) fn new(error: PaymentError, back_office: bool) -> Self {
        let user_message = match (&error, back_office) {
            (PaymentError::Validation(_), _) => error.to_string(),
            (_, true) => format!("Error: {error}"),
            (_, false) => "Payment declined".to_string(),
        };
        Self {
            error,
            user_message,
        }
    }

    /// Field-level messages, present only for validation failures.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match &self.error {
            PaymentError::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}
