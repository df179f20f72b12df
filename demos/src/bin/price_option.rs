//! Prices a European option, prints its Greeks and recovers its volatility.
//!
//! This example shows how to:
//! 1. Build a validated `OptionContract`
//! 2. Compute price and Greeks, serialized as JSON
//! 3. Sweep a Greek across underlying prices
//! 4. Solve implied volatility and inspect the solver steps
//!
//! Solver steps are logged at TRACE level:
//! `RUST_LOG=option_pricer_rs=trace cargo run --bin price_option`

use option_pricer_rs::prelude::*;
use option_pricer_rs::pricing::{DEFAULT_SWEEP_POINTS, sensitivity_sweep};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Valuation {
    option_type: OptionType,
    volatility: f64,
    greeks: Greeks,
}

fn value(contract: &OptionContract) -> Valuation {
    Valuation {
        option_type: contract.option_type(),
        volatility: contract.volatility(),
        greeks: contract.greeks(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting option pricing example");

    let call = OptionContract::new(0.046, 100.0, 100.0, 1.0, 0.2, OptionType::Call)?;
    let put = OptionContract::new(0.046, 100.0, 100.0, 1.0, 0.2, OptionType::Put)?;

    for contract in [&call, &put] {
        println!("{}", serde_json::to_string_pretty(&value(contract))?);
    }

    let gammas = sensitivity_sweep(&call, SensitivityMeasure::Gamma, DEFAULT_SWEEP_POINTS);
    if let Some(peak) = gammas
        .iter()
        .max_by(|a, b| a.value.total_cmp(&b.value))
    {
        info!("Gamma peaks at {:.4} for S = {:.2}", peak.value, peak.spot);
    }

    let observed = 12.0;
    match call.implied_volatility(observed) {
        Ok(solution) => info!(
            "Implied volatility for {:.2}: {:.2}% ({} iterations)",
            observed,
            solution.iv_percent(),
            solution.iterations
        ),
        Err(e) => warn!("Implied volatility failed: {}", e),
    }

    // Deep out of the money, hours to expiry: the solver reports why it stopped.
    let wing = OptionContract::new(0.046, 40.0, 100.0, 0.001, 0.2, OptionType::Call)?;
    if let Err(e) = wing.implied_volatility(0.5) {
        warn!(
            "Expected failure: {} (best estimate {:?})",
            e,
            e.last_estimate()
        );
    }

    info!("Example completed successfully");
    Ok(())
}
