#[cfg(test)]
mod tests {
    use option_pricer_rs::pricing::{
        DEFAULT_SWEEP_POINTS, NonConvergence, OptionContract, OptionType, PricingError,
        SensitivityMeasure, SolverConfig, iv_rank, sensitivity_sweep, solve_iv_bisection,
    };

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn test_round_trip_grid() {
        for option_type in [OptionType::Call, OptionType::Put] {
            for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
                for time in [0.25, 1.0, 2.0] {
                    for sigma in [0.15, 0.3, 0.6] {
                        let contract =
                            OptionContract::new(0.05, 100.0, strike, time, sigma, option_type)
                                .unwrap();
                        let market_price = contract.price();

                        let solution = contract
                            .with_volatility(0.5)
                            .unwrap()
                            .implied_volatility(market_price)
                            .unwrap();
                        assert!(
                            (solution.iv - sigma).abs() < TOLERANCE,
                            "{option_type:?} K={strike} T={time} σ={sigma}: got {}",
                            solution.iv
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_from_own_volatility() {
        let contract = OptionContract::new(0.02, 100.0, 105.0, 0.5, 0.35, OptionType::Put).unwrap();
        let solution = contract.implied_volatility(contract.price()).unwrap();
        assert_eq!(solution.iv, 0.35);
        assert_eq!(solution.iterations, 0);
    }

    #[test]
    fn test_degenerate_vega_reports_non_convergence() {
        // Deep out of the money, a few hours to expiry: vega underflows.
        let contract =
            OptionContract::new(0.05, 40.0, 100.0, 0.001, 0.2, OptionType::Call).unwrap();
        assert!(contract.vega() < 1e-6);

        match contract.implied_volatility(0.5) {
            Err(PricingError::DidNotConverge {
                reason: NonConvergence::VegaTooSmall { .. },
                iterations,
                last_estimate,
            }) => {
                assert!(iterations < SolverConfig::default().max_iterations);
                assert_eq!(last_estimate, 0.2);
            }
            other => panic!("expected non-convergence, got {other:?}"),
        }
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let contract = OptionContract::new(0.05, 100.0, 100.0, 1.0, 2.0, OptionType::Call).unwrap();
        let config = SolverConfig::new().with_max_iterations(2).with_tolerance(1e-14);
        let result = contract.implied_volatility_with(10.4506, &config);
        assert!(matches!(
            result,
            Err(PricingError::DidNotConverge {
                reason: NonConvergence::IterationsExhausted,
                iterations: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_unreachable_price_does_not_hang() {
        // A call can never be worth more than the underlying.
        let contract = OptionContract::new(0.05, 100.0, 100.0, 1.0, 0.2, OptionType::Call).unwrap();
        let result = contract.implied_volatility(150.0);
        assert!(matches!(result, Err(PricingError::DidNotConverge { .. })));
    }

    #[test]
    fn test_bisection_retry_after_newton_failure() {
        let contract =
            OptionContract::new(0.05, 100.0, 100.0, 1.0, 0.2, OptionType::Call).unwrap();
        let target = contract.price();
        let strict = SolverConfig::new().with_max_iterations(1).with_tolerance(1e-12);
        assert!(contract.with_volatility(3.0).unwrap().implied_volatility_with(target, &strict).is_err());

        let solution = solve_iv_bisection(
            contract.market(),
            target,
            &SolverConfig::default(),
            0.01,
            3.0,
        )
        .unwrap();
        assert!((solution.iv - 0.2).abs() < TOLERANCE);
    }

    #[test]
    fn test_sweep_and_rank_workflow() {
        let contract = OptionContract::new(0.046, 100.0, 100.0, 1.0, 0.2, OptionType::Call).unwrap();
        let deltas = sensitivity_sweep(&contract, SensitivityMeasure::Delta, DEFAULT_SWEEP_POINTS);
        assert!(deltas.windows(2).all(|w| w[1].value >= w[0].value));
        assert!(deltas.first().unwrap().value < 0.01);
        assert!(deltas.last().unwrap().value > 0.99);

        let history = [0.18, 0.22, 0.31, 0.27];
        let rank = iv_rank(0.2, &history).unwrap();
        assert!((rank - 2.0 / 13.0 * 100.0).abs() < 1e-9);
    }
}
