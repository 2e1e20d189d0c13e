use std::error::Error;

use llm_service::telemetry;
use tracing::Level;
use tracing_subscriber::{Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Optional .env; real environment variables win.
    dotenvy::dotenv().ok();

    let filter = telemetry::env_filter("info", Level::INFO);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    !telemetry::is_assistant_event(meta)
                })),
        )
        .with(telemetry::layer())
        .try_init()?;

    api::start().await?;

    Ok(())
}
