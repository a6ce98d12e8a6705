use serde::{Deserialize, Serialize};
use std::fmt;

/// Wrapper that keeps a sensitive value out of `Debug` output.
///
/// The wrapped value still serializes as-is: the gateway needs the real
/// card data on the wire. Anything destined for storage goes through the
/// attempt-log redaction instead of serializing this directly.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*** redacted ***")
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// Masks a card number down to a suffix-only reveal: `...` plus the last
/// four digits.
pub fn mask_card_number(digits: &str) -> String {
    let skip = digits.chars().count().saturating_sub(4);
    let tail: String = digits.chars().skip(skip).collect();
    format!("...{tail}")
}

/// Checkout fields exactly as posted: untrusted strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPaymentInput {
    pub card_holder: String,
    pub card_number: Sensitive<String>,
    #[serde(default)]
    pub start_month: Option<String>,
    #[serde(default)]
    pub start_year: Option<String>,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cv2: Sensitive<String>,
    #[serde(default)]
    pub issue_number: Option<Sensitive<String>>,
}

/// Checkout input that has passed field validation.
///
/// Fields are trimmed, and every numeric field is guaranteed to contain
/// only ASCII digits. Constructed exclusively by the validator.
#[derive(Debug, Clone)]
pub struct ValidatedPaymentInput {
    card_holder: String,
    card_number: Sensitive<String>,
    start_month: Option<String>,
    start_year: Option<String>,
    expiry_month: String,
    expiry_year: String,
    cv2: Sensitive<String>,
    issue_number: Option<Sensitive<String>>,
}

impl ValidatedPaymentInput {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_checked(
        card_holder: String,
        card_number: String,
        start_month: Option<String>,
        start_year: Option<String>,
        expiry_month: String,
        expiry_year: String,
        cv2: String,
        issue_number: Option<String>,
    ) -> Self {
        Self {
            card_holder,
            card_number: Sensitive::new(card_number),
            start_month,
            start_year,
            expiry_month,
            expiry_year,
            cv2: Sensitive::new(cv2),
            issue_number: issue_number.map(Sensitive::new),
        }
    }

    pub fn card_holder(&self) -> &str {
        &self.card_holder
    }

    pub fn card_number(&self) -> &Sensitive<String> {
        &self.card_number
    }

    pub fn start_month(&self) -> Option<&str> {
        self.start_month.as_deref()
    }

    pub fn start_year(&self) -> Option<&str> {
        self.start_year.as_deref()
    }

    pub fn expiry_month(&self) -> &str {
        &self.expiry_month
    }

    pub fn expiry_year(&self) -> &str {
        &self.expiry_year
    }

    pub fn cv2(&self) -> &Sensitive<String> {
        &self.cv2
    }

    pub fn issue_number(&self) -> Option<&Sensitive<String>> {
        self.issue_number.as_ref()
    }

    /// Card number with all but the last four digits masked.
    pub fn masked_card_number(&self) -> String {
        mask_card_number(self.card_number.expose())
    }
}

/// A month/year pair exactly as entered at checkout, transmitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDate {
    pub month: String,
    pub year: String,
}
