use crate::domain::card::{CardDate, ValidatedPaymentInput};
use crate::domain::endpoint::GatewayEndpointList;
use crate::domain::merchant::{MerchantCredentials, TransactionPolicy};
use crate::domain::order::OrderSnapshot;
use crate::domain::ports::CurrencySettings;
use crate::domain::request::{
    AddressDetails, CardDetails, CustomerDetails, ThreeDSecureBrowserDetails, TransactionRequest,
};
use crate::error::{PaymentError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub const ORDER_DESCRIPTION: &str = "Web Order";
pub const ACCEPT_HEADERS: &str = "*/*";
/// 3-D Secure device category for a desktop browser.
pub const DEVICE_CATEGORY_COMPUTER: u8 = 0;

/// Converts a major-unit decimal total to integer minor units.
///
/// Policy: multiply by 100, then round half away from zero.
pub fn to_minor_units(total: Decimal) -> Result<i64> {
    (total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| PaymentError::Configuration(format!("order total {total} is out of range")))
}

/// Assembles the full transaction request from validated input, merchant
/// settings, and the order snapshot.
///
/// Construction never fails on well-formed input; card dates are composed
/// from already-validated digit strings without re-checking them. The only
/// failure modes are missing reference data — an unresolvable currency or
/// billing country — which are configuration problems, not user mistakes.
pub async fn build(
    input: &ValidatedPaymentInput,
    merchant: &MerchantCredentials,
    policy: &TransactionPolicy,
    order: &OrderSnapshot,
    currency: &dyn CurrencySettings,
    endpoints: GatewayEndpointList,
) -> Result<TransactionRequest> {
    let currency_code = currency.current().await?.ok_or_else(|| {
        PaymentError::Configuration("shop currency has no ISO 4217 numeric code".to_string())
    })?;

    let country_code = order.billing.country_numeric.ok_or_else(|| {
        PaymentError::Configuration(format!(
            "billing country for order {} has no ISO numeric code",
            order.id
        ))
    })?;

    let amount = to_minor_units(order.total)?;

    let expiry_date = CardDate {
        month: input.expiry_month().to_string(),
        year: input.expiry_year().to_string(),
    };
    let start_date = match (input.start_month(), input.start_year()) {
        (Some(month), Some(year)) => Some(CardDate {
            month: month.to_string(),
            year: year.to_string(),
        }),
        _ => None,
    };

    Ok(TransactionRequest {
        merchant: merchant.clone(),
        policy: policy.clone(),
        amount,
        currency_code,
        order_id: order.id,
        order_description: ORDER_DESCRIPTION.to_string(),
        card: CardDetails {
            card_holder: input.card_holder().to_string(),
            card_number: input.card_number().clone(),
            expiry_date,
            start_date,
            issue_number: input.issue_number().cloned(),
            cv2: input.cv2().clone(),
        },
        billing_address: AddressDetails {
            street: order.billing.street.clone(),
            company: order.billing.company.clone(),
            city: order.billing.city.clone(),
            // Not every country has regions; an absent one travels as an
            // empty code.
            region_code: order.billing.region.clone().unwrap_or_default(),
            postcode: order.billing.postcode.clone(),
            country_code,
        },
        customer: CustomerDetails {
            email: order.email.clone(),
            phone: order.phone.clone(),
            client_ip: order.client_ip.clone(),
        },
        browser: ThreeDSecureBrowserDetails {
            device_category: DEVICE_CATEGORY_COMPUTER,
            accept_headers: ACCEPT_HEADERS.to_string(),
            user_agent: order.user_agent.clone(),
        },
        endpoints,
    })
}
