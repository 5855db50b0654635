//! 펌프 형식·유량·비속도에 따른 경험식 기반 효율 모델.
//!
//! 계수는 회귀로 얻은 고정값이며 구간 경계는 적힌 순서대로 검사한다.
//! 구간 경계(비속도 30, 90, 100)에서 값이 정확히 이어지지 않는다.

use super::pump_type::PumpType;

/// 계수를 최고차항부터 받아 `Σ cᵢ·xⁱ` 를 계산한다.
fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let degree = coeffs.len().saturating_sub(1);
    coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c * x.powi((degree - i) as i32))
        .sum()
}

/// 최적 효율 회귀식 `a + b·ln(Q) + c·ln(Q)²` 의 (a, b, c).
fn optimum_coefficients(pump_type: PumpType) -> (f64, f64, f64) {
    match pump_type {
        PumpType::A => (85.134, 3.85, -1.152),
        PumpType::B | PumpType::C => (87.6345, 2.0326, -1.4278),
        PumpType::F => (85.778, -2.219, -1.481),
        PumpType::G => (88.365, 1.701, -0.367),
        PumpType::J => (90.466, 1.074, -0.446),
        PumpType::V => (89.575, 1.102, -0.539),
    }
}

const VT_CORRECTION_LOW: [f64; 5] = [1.875e-8, -1.219e-5, 2.517e-3, -0.2123, 6.4316];
const VT_CORRECTION_HIGH: [f64; 5] = [6.184e-10, -7.899e-7, 3.441e-4, -0.0471, 2.0453];
const CORRECTION_LOW: [f64; 4] = [-2.692e-4, 0.02558, -0.9566, 13.717];
const CORRECTION_MID: [f64; 4] = [-2.077e-5, 0.004611, -0.3076, 6.452];
const CORRECTION_HIGH: [f64; 3] = [4.71e-5, 0.01879, -0.9191];

const DEVIATION_SMALL: [f64; 5] = [19907642.3, -2287352.57, 90466.93, -1521.98, 16.6181];
const DEVIATION_MEDIUM: [f64; 5] = [56.5767, -120.2869, 89.0594, -28.54, 6.008];
const DEVIATION_LARGE: [f64; 5] = [3.773e-4, -0.0105409, 0.111228, -0.55649, 2.2392];
/// 10 m³/s 초과 구간의 고정 편차(%)
pub const DEVIATION_FLOOR: f64 = 1.03;

/// 최적 운전점 효율(%)을 계산한다.
///
/// `flow_m3s` 는 0보다 커야 한다. 검증은 [`calculate`](super::calculator::calculate)
/// 에서 먼저 수행하며, 0 이하를 넘기면 로그 값이 무한대/NaN 이 된다.
pub fn optimum_efficiency(pump_type: PumpType, flow_m3s: f64) -> f64 {
    let x = flow_m3s.ln();
    let (a, b, c) = optimum_coefficients(pump_type);
    a + b * x + c * x.powi(2)
}

/// 비속도에 따른 효율 보정값(%p)을 계산한다. 음수 비속도도 그대로 받는다.
pub fn efficiency_correction(pump_type: PumpType, specific_speed: f64) -> f64 {
    let s = specific_speed;
    if pump_type.is_vertical_turbine() {
        if s <= 100.0 {
            polynomial(&VT_CORRECTION_LOW, s)
        } else {
            polynomial(&VT_CORRECTION_HIGH, s)
        }
    } else if s < 30.0 {
        polynomial(&CORRECTION_LOW, s)
    } else if s <= 90.0 {
        polynomial(&CORRECTION_MID, s)
    } else {
        polynomial(&CORRECTION_HIGH, s)
    }
}

/// 유량(m³/s)에 따른 효율 편차 폭(± %p)을 계산한다. 로그 변환 없이 유량을 그대로 쓴다.
pub fn efficiency_deviation(flow_m3s: f64) -> f64 {
    let q = flow_m3s;
    if q <= 0.05 {
        polynomial(&DEVIATION_SMALL, q)
    } else if q <= 0.9 {
        polynomial(&DEVIATION_MEDIUM, q)
    } else if q <= 10.0 {
        polynomial(&DEVIATION_LARGE, q)
    } else {
        DEVIATION_FLOOR
    }
}
