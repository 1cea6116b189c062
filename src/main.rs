use anyhow::{Context, Result};
use polyglot_client::{load_config, ClientConfig, EventClient};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;

const DEMO_CHANNEL: &str = "room:general";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polyglot_client=info,polyglot_demo=info".into()),
        )
        .init();

    // Optional TOML file, then POLYGLOT_* overrides
    let config = match std::env::var("POLYGLOT_CONFIG") {
        Ok(path) => load_config(&path)?,
        Err(_) => ClientConfig::default(),
    }
    .apply_env_overrides()?;

    let client = EventClient::new(config);

    info!(
        base_url = %client.config().base_url,
        app_id = %client.config().app_id,
        "Configuration loaded"
    );

    client
        .publish_or_log(DEMO_CHANNEL, "message", json!({"text": "Hello from Rust!"}))
        .await
        .context("Failed to reach the engine")?;
    client
        .publish_or_log(DEMO_CHANNEL, "message", json!({"text": "This is a test message"}))
        .await
        .context("Failed to reach the engine")?;

    tokio::time::sleep(Duration::from_secs(1)).await;

    let history = client
        .history_or_empty(DEMO_CHANNEL)
        .await
        .context("Failed to reach the engine")?;

    println!("Event history:");
    for event in &history {
        println!(
            "- {}: {}",
            event.event_type().unwrap_or("<untyped>"),
            event.data().unwrap_or(&Value::Null)
        );
    }

    Ok(())
}
