//! Verdict engine entrypoint: reads one JSON request from stdin
//! (`{"op": "...", "payload": {...}}`), dispatches it, and prints the JSON
//! response to stdout. Logs go to stderr so the response stream stays clean.

use std::io::Read;
use tracing::info;
use verdict_engine::{EngineConfig, EngineService, StructuredLogger};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("VERDICT_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = EngineConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(config_path = ?config_path, "verdict engine starting");

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request: serde_json::Value = serde_json::from_str(&input)?;

    let op = request
        .get("op")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let payload = request
        .get("payload")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));

    let service = EngineService::new(config);
    let response = service.dispatch(&op, payload);
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
