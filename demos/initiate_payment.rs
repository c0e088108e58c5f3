use anyhow::Context;
use chapa_rust::{
    apis::payments::PaymentRequestBuilder, checkout::random_reference, ChapaClient,
    GatewayResponse,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    api_key: String,
    base_url: Option<String>,
    callback_url: String,
}

impl Config {
    /// Reads `config.{toml,json,yaml}` if present, overridden by `CHAPA_*` environment variables.
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CHAPA"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup Chapa client
    let mut builder = ChapaClient::builder(config.api_key);
    if let Some(base_url) = config.base_url {
        builder = builder.with_base_url(base_url.parse()?);
    }
    let chapa = builder.build()?;

    // Initialize a new payment
    let tx_ref = random_reference(20);
    let request = PaymentRequestBuilder::default()
        .amount(10.0)
        .currency("ETB")
        .first_name("Some")
        .last_name("One")
        .email("some.one@email.com")
        .callback_url(config.callback_url)
        .tx_ref(tx_ref.as_str())
        .customization(
            [
                ("title".to_string(), serde_json::json!("Rust SDK")),
                (
                    "description".to_string(),
                    serde_json::json!("Paying with the Rust SDK"),
                ),
            ]
            .into_iter()
            .collect(),
        )
        .build()?;

    let res = chapa.payments.initiate(&request).await?.ensure_success()?;

    tracing::info!("Created new payment: {}", tx_ref);
    tracing::info!("Checkout Link: {}", res.data.checkout_url);

    // Until the customer pays, Chapa reports the transaction as not found
    let res = chapa.payments.verify(&tx_ref).await?;
    if res.is_success() {
        tracing::info!("{:#?}", res.data);
    } else {
        tracing::info!("Payment {} not completed yet: {}", tx_ref, res.message);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
