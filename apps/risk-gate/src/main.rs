//! Risk Gate Binary
//!
//! Validates a batch of orders and prints the decisions as JSON.
//!
//! # Usage
//!
//! ```bash
//! risk-gate request.json
//! cat request.json | risk-gate
//! ```
//!
//! # Environment Variables
//!
//! - `RISK_GATE_CONFIG`: Path to the YAML config (default: `config.yaml` if present)
//! - `RUST_LOG`: Log level override

use std::io::Read;

use anyhow::Context;
use risk_gate::application::dto::BatchValidationRequestDto;
use risk_gate::application::use_cases::BatchValidateUseCase;
use risk_gate::config::load_config_or_default;
use risk_gate::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("RISK_GATE_CONFIG").ok();
    let config = load_config_or_default(config_path.as_deref())
        .context("Failed to load risk gate configuration")?;

    init_tracing(&config.observability.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    tracing::info!(
        risk_threshold = config.gate.risk_threshold,
        num_parallel_runs = config.annealing.num_parallel_runs,
        num_iterations = config.annealing.num_iterations,
        "Starting risk gate"
    );

    let request = read_request(std::env::args().nth(1).as_deref())?;
    let use_case = BatchValidateUseCase::from_config(&config)?;
    let response = use_case.execute_request(&request)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Read the batch request from a file, or stdin when no path is given.
fn read_request(path: Option<&str>) -> anyhow::Result<BatchValidationRequestDto> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file '{path}'"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    serde_json::from_str(&contents).context("Failed to parse batch request JSON")
}
