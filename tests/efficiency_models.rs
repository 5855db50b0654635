//! 최적 효율 / 비속도 보정 / 편차 모델 테스트.
use pump_efficiency_toolbox::pump::efficiency::DEVIATION_FLOOR;
use pump_efficiency_toolbox::pump::{
    efficiency_correction, efficiency_deviation, optimum_efficiency, PumpType,
};

const EPS: f64 = 1e-9;

#[test]
fn optimum_at_unit_flow_is_intercept() {
    // ln(1) = 0 이므로 상수항만 남는다.
    let expected = [
        (PumpType::A, 85.134),
        (PumpType::B, 87.6345),
        (PumpType::C, 87.6345),
        (PumpType::F, 85.778),
        (PumpType::G, 88.365),
        (PumpType::J, 90.466),
        (PumpType::V, 89.575),
    ];
    for (pump_type, a) in expected {
        assert!((optimum_efficiency(pump_type, 1.0) - a).abs() < EPS, "{pump_type}");
    }
}

#[test]
fn optimum_follows_log_quadratic() {
    let q: f64 = 0.05;
    let x = q.ln();
    let expected = 85.778 - 2.219 * x - 1.481 * x * x;
    assert!((optimum_efficiency(PumpType::F, q) - expected).abs() < EPS);
}

#[test]
fn b_and_c_share_coefficients() {
    for q in [0.001, 0.2, 3.0, 50.0] {
        assert_eq!(
            optimum_efficiency(PumpType::B, q),
            optimum_efficiency(PumpType::C, q)
        );
    }
}

#[test]
fn correction_mid_range_matches_formula() {
    let c = efficiency_correction(PumpType::A, 50.0);
    assert!((c - 0.00325).abs() < 1e-9, "got {c}");
}

#[test]
fn correction_branches_for_standard_types() {
    assert!((efficiency_correction(PumpType::G, 0.0) - 13.717).abs() < EPS);
    assert!((efficiency_correction(PumpType::G, 30.0) - 0.81311).abs() < 1e-9);
    assert!((efficiency_correction(PumpType::G, 90.0) - 0.97577).abs() < 1e-9);
    assert!((efficiency_correction(PumpType::G, 100.0) - 1.4309).abs() < 1e-9);
}

#[test]
fn correction_branches_for_vertical_turbine() {
    assert!((efficiency_correction(PumpType::V, 0.0) - 6.4316).abs() < EPS);
    assert!((efficiency_correction(PumpType::V, 100.0) - 0.0566).abs() < 1e-9);
    let s: f64 = 150.0;
    let high = 6.184e-10 * s.powi(4) - 7.899e-7 * s.powi(3) + 3.441e-4 * s.powi(2)
        - 0.0471 * s
        + 2.0453;
    assert!((efficiency_correction(PumpType::V, s) - high).abs() < EPS);
}

#[test]
fn negative_specific_speed_is_evaluated() {
    // 범위 제한 없이 저비속도 식을 그대로 쓴다.
    let c = efficiency_correction(PumpType::A, -10.0);
    assert!((c - 26.1102).abs() < 1e-9, "got {c}");
}

#[test]
fn deviation_segments() {
    assert!((efficiency_deviation(1.0) - 1.7837744).abs() < 1e-9);
    assert!((efficiency_deviation(0.05) - 5.190118125).abs() < 1e-6);
    assert!((efficiency_deviation(0.9) - 1.89093677).abs() < 1e-6);
    assert!((efficiency_deviation(10.0) - 1.0292).abs() < 1e-9);
}

#[test]
fn deviation_is_constant_above_ten() {
    for q in [10.000001, 11.0, 250.0, 1e6] {
        assert_eq!(efficiency_deviation(q), DEVIATION_FLOOR);
    }
}

#[test]
fn deviation_near_zero_flow_approaches_constant_term() {
    assert!((efficiency_deviation(1e-12) - 16.6181).abs() < 1e-6);
}
