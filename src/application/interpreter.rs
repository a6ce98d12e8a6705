use crate::domain::outcome::{RawGatewayResponse, SuccessDetails, TransactionOutcome};

/// Maps a decoded gateway reply onto exactly one transaction outcome.
///
/// Pure and total: every status code lands on a variant, unrecognized
/// codes included. No retry decisions are made here.
pub fn interpret(response: &RawGatewayResponse) -> TransactionOutcome {
    match response.status_code {
        0 => TransactionOutcome::Success(SuccessDetails {
            auth_code: response.auth_code.clone().unwrap_or_default(),
            address_check: response.address_numeric_check.clone().unwrap_or_default(),
            postcode_check: response.postcode_check.clone().unwrap_or_default(),
            cv2_check: response.cv2_check.clone().unwrap_or_default(),
            card_issuer: response.card_issuer.clone().unwrap_or_default(),
            card_type: response.card_type.clone().unwrap_or_default(),
        }),
        3 => TransactionOutcome::SecureAuthRequired,
        4 => TransactionOutcome::Referred,
        5 => TransactionOutcome::Declined {
            reason: response.message.clone(),
        },
        20 => TransactionOutcome::Duplicate {
            reason: response.message.clone(),
        },
        30 => {
            let mut detail = response.message.clone();
            for error in &response.error_messages {
                detail.push(' ');
                detail.push_str(error);
            }
            TransactionOutcome::GatewayError { detail }
        }
        code => TransactionOutcome::UnknownCode { code },
    }
}
