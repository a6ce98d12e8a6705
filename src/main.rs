use cardsave_direct::application::processor::{PaymentProcessor, ProcessorConfig};
use cardsave_direct::domain::card::RawPaymentInput;
use cardsave_direct::domain::endpoint::GatewayEndpointList;
use cardsave_direct::domain::merchant::{MerchantCredentials, TransactionPolicy};
use cardsave_direct::domain::order::OrderSnapshot;
use cardsave_direct::domain::ports::AuditStoreBox;
use cardsave_direct::infrastructure::http_gateway::HttpGatewayTransport;
use cardsave_direct::infrastructure::in_memory::{
    InMemoryAuditStore, RecordingOrderFinalizer, RecordingStatusLog, StaticCurrencySettings,
};
use cardsave_direct::infrastructure::jsonl_audit::JsonlAuditStore;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Back-office terminal for running a single card transaction.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Merchant configuration JSON file
    config: PathBuf,

    /// Payment JSON file: checkout card fields plus the order snapshot
    payment: PathBuf,

    /// Append audit records to this JSON-lines file instead of keeping
    /// them in memory
    #[arg(long)]
    audit_log: Option<PathBuf>,
}

#[derive(Deserialize)]
struct MerchantConfig {
    credentials: MerchantCredentials,
    #[serde(default)]
    policy: TransactionPolicy,
    #[serde(default = "GatewayEndpointList::cardsave_production")]
    endpoints: GatewayEndpointList,
    /// Order status assigned after a successful payment.
    paid_status: u32,
    /// ISO 4217 numeric code of the shop currency.
    currency_code: u16,
}

#[derive(Deserialize)]
struct PaymentForm {
    card: RawPaymentInput,
    order: OrderSnapshot,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config: MerchantConfig =
        serde_json::from_reader(File::open(&cli.config).into_diagnostic()?).into_diagnostic()?;
    config.credentials.validate().into_diagnostic()?;

    let form: PaymentForm =
        serde_json::from_reader(File::open(&cli.payment).into_diagnostic()?).into_diagnostic()?;

    let audit: AuditStoreBox = match &cli.audit_log {
        Some(path) => Box::new(JsonlAuditStore::open(path).into_diagnostic()?),
        None => Box::new(InMemoryAuditStore::new()),
    };

    let processor = PaymentProcessor::new(
        Box::new(HttpGatewayTransport::new()),
        audit,
        Box::new(RecordingOrderFinalizer::new()),
        Box::new(RecordingStatusLog::new()),
        Box::new(StaticCurrencySettings::new(Some(config.currency_code))),
        ProcessorConfig::new(config.endpoints, config.paid_status),
    );

    let receipt = processor
        .process_payment(
            &form.card,
            &config.credentials,
            &config.policy,
            &form.order,
            true,
        )
        .await
        .into_diagnostic()?;

    println!(
        "Payment approved: auth code {}, {} ({})",
        receipt.auth_code, receipt.card_type, receipt.card_issuer
    );
    println!(
        "Checks: address {}, postcode {}, CV2 {}",
        receipt.address_check, receipt.postcode_check, receipt.cv2_check
    );

    Ok(())
}
