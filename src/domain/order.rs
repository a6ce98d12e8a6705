use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Billing address fields as stored against the order.
///
/// `region` and `country_numeric` come from reference data the host shop
/// maintains; not every country has regions, and a missing numeric country
/// code is a configuration problem rather than a customer mistake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingAddress {
    pub street: String,
    #[serde(default)]
    pub company: String,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    pub postcode: String,
    /// ISO 3166-1 numeric code of the billing country.
    #[serde(default)]
    pub country_numeric: Option<u16>,
}

/// Read-only snapshot of the order being paid for, captured at checkout
/// together with the requesting client's address and browser identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub id: u64,
    /// Order total in major currency units.
    pub total: Decimal,
    pub billing: BillingAddress,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub client_ip: String,
    #[serde(default)]
    pub user_agent: String,
}
