use graph_beta_models::app_config::AppConfig;
use graph_beta_models::payload_loader::load_payloads_from;
use graph_beta_models::serialization::json::serialize_json;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let payloads = load_payloads_from(config.payloads().directory(), config.payloads().extension())?;

    for payload in &payloads {
        match serialize_json(&payload.configuration, config.serialization()) {
            Ok(json) => println!("{}", json),
            Err(err) => warn!("⚠️ Failed to write '{}': {}", payload.file_name(), err),
        }
    }

    info!("🔥 Normalized {} payloads", payloads.len());
    Ok(())
}
