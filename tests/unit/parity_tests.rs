#[cfg(test)]
mod tests {
    use option_pricer_rs::prelude::*;

    const SPOTS: [f64; 5] = [60.0, 90.0, 100.0, 115.0, 150.0];
    const STRIKES: [f64; 3] = [80.0, 100.0, 125.0];
    const EXPIRIES: [f64; 4] = [0.05, 0.5, 1.0, 3.0];
    const RATES: [f64; 3] = [-0.01, 0.0, 0.07];
    const VOLS: [f64; 3] = [0.08, 0.25, 0.9];

    fn pair(r: f64, s: f64, k: f64, t: f64, v: f64) -> (OptionContract, OptionContract) {
        (
            OptionContract::new(r, s, k, t, v, OptionType::Call).unwrap(),
            OptionContract::new(r, s, k, t, v, OptionType::Put).unwrap(),
        )
    }

    #[test]
    fn test_put_call_parity_grid() {
        for s in SPOTS {
            for k in STRIKES {
                for t in EXPIRIES {
                    for r in RATES {
                        for v in VOLS {
                            let (call, put) = pair(r, s, k, t, v);
                            let forward_gap = s - k * (-r * t).exp();
                            let gap = call.price() - put.price();
                            assert!(
                                (gap - forward_gap).abs() < 1e-9,
                                "parity broken for S={s} K={k} T={t} r={r} σ={v}: {gap} vs {forward_gap}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_greek_parity_relations() {
        for s in SPOTS {
            for k in STRIKES {
                let (call, put) = pair(0.03, s, k, 0.75, 0.3);
                assert!((call.delta() - put.delta() - 1.0).abs() < 1e-12);
                assert_eq!(call.gamma(), put.gamma());
                assert_eq!(call.vega(), put.vega());

                let df = (-0.03f64 * 0.75).exp();
                // Θc − Θp = −rK·e^(−rT), ρc − ρp = K·T·e^(−rT)
                assert!((call.theta() - put.theta() + 0.03 * k * df).abs() < 1e-9);
                assert!((call.rho() - put.rho() - k * 0.75 * df).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_intrinsic_limit_near_expiry() {
        let t = 1e-12;
        for (s, k) in [(110.0, 100.0), (90.0, 100.0), (100.0, 100.0), (150.0, 80.0)] {
            let (call, put) = pair(0.05, s, k, t, 0.2);
            let call_intrinsic = f64::max(s - k, 0.0);
            let put_intrinsic = f64::max(k - s, 0.0);
            assert!(
                (call.price() - call_intrinsic).abs() < 1e-4,
                "call S={s} K={k}: {}",
                call.price()
            );
            assert!(
                (put.price() - put_intrinsic).abs() < 1e-4,
                "put S={s} K={k}: {}",
                put.price()
            );
        }
    }

    #[test]
    fn test_call_price_monotone_in_spot() {
        for v in VOLS {
            let mut previous = 0.0;
            for step in 1..=200 {
                let s = f64::from(step);
                let call = OptionContract::new(0.05, s, 100.0, 1.0, v, OptionType::Call).unwrap();
                // N(x) is quantized near zero, allow rounding-level wiggle in the tails
                assert!(call.price() >= previous - 1e-12, "decreased at S={s}, σ={v}");
                previous = call.price();
            }
        }
    }

    #[test]
    fn test_call_price_monotone_in_volatility() {
        for k in STRIKES {
            let mut previous = 0.0;
            for step in 1..=150 {
                let v = f64::from(step) / 100.0;
                let call = OptionContract::new(0.05, 100.0, k, 1.0, v, OptionType::Call).unwrap();
                assert!(call.price() >= previous - 1e-12, "decreased at σ={v}, K={k}");
                previous = call.price();
            }
        }
    }
}
