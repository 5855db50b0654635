//! 환산·보정·편차 모델의 성질 테스트.
use proptest::prelude::*;

use pump_efficiency_toolbox::pump::{
    efficiency_correction, efficiency_deviation, optimum_efficiency, PumpType,
};
use pump_efficiency_toolbox::units::normalize_flow;

fn standard_type() -> impl Strategy<Value = PumpType> {
    prop::sample::select(vec![
        PumpType::A,
        PumpType::B,
        PumpType::C,
        PumpType::F,
        PumpType::G,
        PumpType::J,
    ])
}

fn any_type() -> impl Strategy<Value = PumpType> {
    prop::sample::select(PumpType::ALL.to_vec())
}

proptest! {
    #[test]
    fn identity_selector_returns_input(v in -1e6_f64..1e6) {
        prop_assert_eq!(normalize_flow(1, v).unwrap(), v);
    }

    #[test]
    fn normalization_is_linear(selector in 1_i64..=4, v in 1e-6_f64..1e5, k in 0.01_f64..100.0) {
        let base = normalize_flow(selector, v).unwrap();
        let scaled = normalize_flow(selector, v * k).unwrap();
        prop_assert!((scaled - base * k).abs() <= 1e-9 * scaled.abs().max(1e-12));
    }

    #[test]
    fn optimum_is_continuous_in_flow(pump_type in any_type(), q in 1e-4_f64..100.0) {
        let dq = q * 1e-9;
        let a = optimum_efficiency(pump_type, q);
        let b = optimum_efficiency(pump_type, q + dq);
        prop_assert!((a - b).abs() < 1e-6);
    }

    // 구간마다 따로 뽑는다. 최솟값은 각각 약 4.52, 1.745, 1.026 이다.
    #[test]
    fn deviation_stays_positive_below_small_flow(q in 1e-9_f64..=0.05) {
        prop_assert!(efficiency_deviation(q) >= 4.0);
    }

    #[test]
    fn deviation_stays_positive_in_middle_band(q in 0.05_f64..=0.9) {
        prop_assert!(efficiency_deviation(q) >= 1.5);
    }

    #[test]
    fn deviation_stays_positive_up_to_ten(q in 0.9_f64..=10.0) {
        prop_assert!(efficiency_deviation(q) >= 1.0);
    }

    #[test]
    fn deviation_is_positive_over_log_flow(ln_q in -20.0_f64..10.0) {
        prop_assert!(efficiency_deviation(ln_q.exp()) > 0.0);
    }

    #[test]
    fn deviation_is_floor_above_ten(q in 10.000_001_f64..1e9) {
        prop_assert_eq!(efficiency_deviation(q), 1.03);
    }

    #[test]
    fn correction_is_finite(pump_type in any_type(), s in -500.0_f64..2000.0) {
        prop_assert!(efficiency_correction(pump_type, s).is_finite());
    }

    #[test]
    fn correction_has_no_large_jump_at_boundaries(pump_type in standard_type(), eps in 1e-9_f64..1e-6) {
        // 경계 양쪽 식이 정확히 이어지지 않으므로 작은 차이만 허용한다.
        for boundary in [30.0_f64, 90.0] {
            let below = efficiency_correction(pump_type, boundary - eps);
            let above = efficiency_correction(pump_type, boundary + eps);
            prop_assert!((below - above).abs() < 0.25, "jump {} at {}", below - above, boundary);
        }
    }
}
