use crate::domain::card::{CardDate, Sensitive};
use crate::domain::endpoint::GatewayEndpointList;
use crate::domain::merchant::{MerchantCredentials, TransactionPolicy};
use serde::Serialize;

/// Card fields as they travel to the gateway.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_holder: String,
    pub card_number: Sensitive<String>,
    pub expiry_date: CardDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<CardDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<Sensitive<String>>,
    pub cv2: Sensitive<String>,
}

/// Billing address with resolved reference codes. A missing region is
/// transmitted as an empty code, never treated as an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    pub street: String,
    pub company: String,
    pub city: String,
    pub region_code: String,
    pub postcode: String,
    /// ISO 3166-1 numeric code.
    pub country_code: u16,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub email: String,
    pub phone: String,
    pub client_ip: String,
}

/// Browser identity attached for the gateway's 3-D Secure sub-structure.
/// Populated on every request even though challenge flows are not
/// implemented.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecureBrowserDetails {
    /// 0 = computer.
    pub device_category: u8,
    pub accept_headers: String,
    pub user_agent: String,
}

/// A fully-typed gateway transaction request.
///
/// Built once per submission attempt and never mutated afterwards. The
/// endpoint list rides along for the submitter but stays off the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub merchant: MerchantCredentials,
    pub policy: TransactionPolicy,
    /// Amount in minor currency units.
    pub amount: i64,
    /// ISO 4217 numeric code.
    pub currency_code: u16,
    pub order_id: u64,
    pub order_description: String,
    pub card: CardDetails,
    pub billing_address: AddressDetails,
    pub customer: CustomerDetails,
    pub browser: ThreeDSecureBrowserDetails,
    #[serde(skip)]
    pub endpoints: GatewayEndpointList,
}
