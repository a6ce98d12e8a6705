use crate::domain::card::{RawPaymentInput, ValidatedPaymentInput};
use crate::error::{FieldError, PaymentError, Result};

fn digits_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

/// Trims an optional form field, treating an empty post as absent.
fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Checks every checkout field independently and reports all violations at
/// once, so the form can flag each offending field in a single pass.
pub fn validate(input: &RawPaymentInput) -> Result<ValidatedPaymentInput> {
    let mut errors = Vec::new();

    let card_holder = input.card_holder.trim();
    if card_holder.is_empty() {
        errors.push(FieldError::new(
            "card_holder",
            "Please enter the name as it appears on the card",
        ));
    }

    let card_number = input.card_number.expose().trim();
    if card_number.is_empty() {
        errors.push(FieldError::new(
            "card_number",
            "Please enter a credit card number",
        ));
    } else if !digits_only(card_number) {
        errors.push(FieldError::new(
            "card_number",
            "Credit card number can only contain digits",
        ));
    }

    // The digits rule alone accepts an empty CV2; required-ness is a
    // separate rule. Start and issue fields have no required rule at all.
    let cv2 = input.cv2.expose().trim();
    if cv2.is_empty() {
        errors.push(FieldError::new(
            "cv2",
            "Please enter the card's security code",
        ));
    }
    if !digits_only(cv2) {
        errors.push(FieldError::new(
            "cv2",
            "Card security code must contain only digits",
        ));
    }

    let start_month = optional(input.start_month.as_deref());
    if let Some(value) = start_month
        && !digits_only(value)
    {
        errors.push(FieldError::new(
            "start_month",
            "Credit card start month can contain only digits",
        ));
    }

    let start_year = optional(input.start_year.as_deref());
    if let Some(value) = start_year
        && !digits_only(value)
    {
        errors.push(FieldError::new(
            "start_year",
            "Credit card start year can contain only digits",
        ));
    }

    let expiry_month = input.expiry_month.trim();
    if expiry_month.is_empty() {
        errors.push(FieldError::new(
            "expiry_month",
            "Please specify a card expiration month",
        ));
    } else if !digits_only(expiry_month) {
        errors.push(FieldError::new(
            "expiry_month",
            "Credit card expiration month can contain only digits",
        ));
    }

    let expiry_year = input.expiry_year.trim();
    if expiry_year.is_empty() {
        errors.push(FieldError::new(
            "expiry_year",
            "Please specify a card expiration year",
        ));
    } else if !digits_only(expiry_year) {
        errors.push(FieldError::new(
            "expiry_year",
            "Credit card expiration year can contain only digits",
        ));
    }

    let issue_number = optional(input.issue_number.as_ref().map(|v| v.expose().as_str()));
    if let Some(value) = issue_number
        && !digits_only(value)
    {
        errors.push(FieldError::new(
            "issue_number",
            "Issue number must contain only digits",
        ));
    }

    if !errors.is_empty() {
        return Err(PaymentError::Validation(errors));
    }

    Ok(ValidatedPaymentInput::from_checked(
        card_holder.to_string(),
        card_number.to_string(),
        start_month.map(str::to_string),
        start_year.map(str::to_string),
        expiry_month.to_string(),
        expiry_year.to_string(),
        cv2.to_string(),
        issue_number.map(str::to_string),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Sensitive;

    fn valid_input() -> RawPaymentInput {
        RawPaymentInput {
            card_holder: "A Cardholder".into(),
            card_number: Sensitive::new("4111111111111111".into()),
            start_month: None,
            start_year: None,
            expiry_month: "08".into(),
            expiry_year: "2028".into(),
            cv2: Sensitive::new("123".into()),
            issue_number: None,
        }
    }

    fn failed_fields(result: Result<ValidatedPaymentInput>) -> Vec<&'static str> {
        match result {
            Err(PaymentError::Validation(errors)) => errors.iter().map(|e| e.field).collect(),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let validated = validate(&valid_input()).unwrap();
        assert_eq!(validated.card_holder(), "A Cardholder");
        assert_eq!(validated.expiry_month(), "08");
        assert_eq!(validated.cv2().expose(), "123");
        assert!(validated.start_month().is_none());
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut input = valid_input();
        input.card_holder = "  A Cardholder  ".into();
        input.card_number = Sensitive::new(" 4111111111111111 ".into());
        input.expiry_year = " 2028 ".into();

        let validated = validate(&input).unwrap();
        assert_eq!(validated.card_holder(), "A Cardholder");
        assert_eq!(validated.card_number().expose(), "4111111111111111");
        assert_eq!(validated.expiry_year(), "2028");
    }

    #[test]
    fn test_non_digit_card_number_names_field() {
        let mut input = valid_input();
        input.card_number = Sensitive::new("4111 1111 1111 1111".into());
        assert_eq!(failed_fields(validate(&input)), ["card_number"]);
    }

    #[test]
    fn test_missing_card_holder() {
        let mut input = valid_input();
        input.card_holder = "   ".into();
        assert_eq!(failed_fields(validate(&input)), ["card_holder"]);
    }

    #[test]
    fn test_empty_cv2_is_required() {
        let mut input = valid_input();
        input.cv2 = Sensitive::new("".into());
        assert_eq!(failed_fields(validate(&input)), ["cv2"]);
    }

    #[test]
    fn test_non_digit_cv2() {
        let mut input = valid_input();
        input.cv2 = Sensitive::new("12a".into());
        assert_eq!(failed_fields(validate(&input)), ["cv2"]);
    }

    #[test]
    fn test_non_digit_expiry_fields() {
        let mut input = valid_input();
        input.expiry_month = "1x".into();
        input.expiry_year = "20x8".into();
        assert_eq!(
            failed_fields(validate(&input)),
            ["expiry_month", "expiry_year"]
        );
    }

    #[test]
    fn test_missing_expiry_fields() {
        let mut input = valid_input();
        input.expiry_month = "".into();
        input.expiry_year = "".into();
        assert_eq!(
            failed_fields(validate(&input)),
            ["expiry_month", "expiry_year"]
        );
    }

    #[test]
    fn test_start_fields_are_optional() {
        let mut input = valid_input();
        input.start_month = Some("".into());
        input.start_year = None;
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_start_fields_must_be_digits_when_present() {
        let mut input = valid_input();
        input.start_month = Some("jan".into());
        input.start_year = Some("2023".into());
        assert_eq!(failed_fields(validate(&input)), ["start_month"]);
    }

    #[test]
    fn test_issue_number_optional_but_digits_only() {
        let mut input = valid_input();
        input.issue_number = Some(Sensitive::new("2".into()));
        assert!(validate(&input).is_ok());

        input.issue_number = Some(Sensitive::new("two".into()));
        assert_eq!(failed_fields(validate(&input)), ["issue_number"]);
    }

    #[test]
    fn test_all_violations_collected() {
        let input = RawPaymentInput {
            card_holder: "".into(),
            card_number: Sensitive::new("not-a-pan".into()),
            start_month: None,
            start_year: None,
            expiry_month: "".into(),
            expiry_year: "".into(),
            cv2: Sensitive::new("".into()),
            issue_number: None,
        };
        let fields = failed_fields(validate(&input));
        assert_eq!(
            fields,
            [
                "card_holder",
                "card_number",
                "cv2",
                "expiry_month",
                "expiry_year"
            ]
        );
    }
}
