//! Computes an at-the-money implied volatility from a call/put quote pair and
//! ranks it against a volatility history.
//!
//! Solver settings can be supplied as a JSON file, e.g.
//! `{"tolerance": 1e-7, "max_iterations": 50}`:
//! `cargo run --bin atm_iv_rank -- solver.json`

use option_pricer_rs::pricing::{
    QuotedOption, SolverConfig, atm_volatility, iv_rank, nearest_expiry, nearest_strike,
    year_fraction,
};
use std::fs;
use tracing::info;

fn load_config() -> Result<SolverConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            let config: SolverConfig = serde_json::from_str(&raw)?;
            info!("Loaded solver config from {}: {:?}", path, config);
            Ok(config)
        }
        None => Ok(SolverConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = load_config()?;

    let spot = 187.4;
    let rate = 0.0474;
    let listed_days = [-2.0, 10.0, 31.0, 45.0, 73.0];
    let days = nearest_expiry(&listed_days, 30.0).ok_or("no open expiries listed")?;
    info!("Nearest open expiry to 30 days is {} days", days);
    let time = year_fraction(days);
    let strikes = [175.0, 180.0, 185.0, 190.0, 195.0];

    let strike = nearest_strike(spot, &strikes).ok_or("no strikes quoted")?;
    info!("Nearest strike to {} is {}", spot, strike);

    let atm = atm_volatility(
        spot,
        time,
        rate,
        QuotedOption {
            strike,
            market_price: 9.10,
        },
        QuotedOption {
            strike,
            market_price: 5.95,
        },
        &config,
    )?;
    info!(
        "Call IV {:.2}%, put IV {:.2}%, average {:.2}%",
        atm.call_iv * 100.0,
        atm.put_iv * 100.0,
        atm.average() * 100.0
    );

    let history = [0.31, 0.28, 0.35, 0.42, 0.39, 0.33, 0.30];
    let rank = iv_rank(atm.average(), &history)?;
    info!("IV rank: {:.1}%", rank);

    Ok(())
}
