use anyhow::Context;
use chapa_rust::{
    checkout::{CheckoutForm, CheckoutService, InMemoryStore},
    ChapaClient,
};
use std::sync::Arc;

#[derive(serde::Deserialize, Debug)]
struct Config {
    api_key: String,
    base_url: Option<String>,
    callback_url: String,
}

impl Config {
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

    let mut builder = ChapaClient::builder(config.api_key);
    if let Some(base_url) = config.base_url {
        builder = builder.with_base_url(base_url.parse()?);
    }
    let service = CheckoutService::new(
        builder.build()?,
        Arc::new(InMemoryStore::with_sample_data()),
        config.callback_url,
    );

    let transaction = service
        .checkout(
            1032,
            &CheckoutForm {
                amount: 12.30,
                currency: "ETB".to_string(),
            },
        )
        .await?;
    tracing::info!("Checked out: {:#?}", transaction);

    for transaction in service.list_transactions().await.transactions {
        tracing::info!(
            "Transaction {}: {} {} ({:?})",
            transaction.trans_id,
            transaction.amount,
            transaction.currency,
            transaction.status
        );
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
