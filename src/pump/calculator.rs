use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::efficiency::{efficiency_correction, efficiency_deviation, optimum_efficiency};
use super::error::{EfficiencyError, EfficiencyResult};
use super::pump_type::PumpType;
use crate::units::normalize_flow;

/// 효율 계산 입력. 직렬화 필드명은 원래 입력 양식의 셀 이름(C5, C6, F5, F6)을 따른다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 유량 단위 선택 번호 (1=m³/s, 2=L/min, 3=L/s, 4=US gpm)
    #[serde(rename = "C5", deserialize_with = "deserialize_selector")]
    pub flow_unit_selector: i64,
    /// 선택 단위 기준 유량
    #[serde(rename = "C6")]
    pub flow_value: f64,
    /// 비속도
    #[serde(rename = "F5")]
    pub specific_speed: f64,
    /// 펌프 형식 코드 (A, B, C, F, G, J, V)
    #[serde(rename = "F6")]
    pub pump_type: String,
}

/// 정수 또는 소수부가 0 인 실수(`1.0`)를 선택 번호로 받는다.
fn deserialize_selector<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(de::Error::custom(format!(
            "flow unit selector must be an integer, got {value}"
        )))
    }
}

/// 효율 계산 결과 (단위: %).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// 최적 운전점 효율
    pub efficiency_optimum: f64,
    /// 비속도 보정값 (최적 효율에서 뺀다)
    pub efficiency_correction: f64,
    /// 편차 폭 (±)
    pub efficiency_deviation: f64,
}

impl CalculationResult {
    /// 실제 효율 = 최적 효율 - 보정값.
    pub fn actual_efficiency(&self) -> f64 {
        self.efficiency_optimum - self.efficiency_correction
    }

    /// `"<실제효율> ± <편차> %"` 형식, 둘 다 소수점 둘째 자리.
    pub fn actual_efficiency_text(&self) -> String {
        format!(
            "{:.2} ± {:.2} %",
            self.actual_efficiency(),
            self.efficiency_deviation
        )
    }
}

/// 유량 환산 → 양수 검증 → 최적 효율/보정/편차 순으로 계산한다.
///
/// 첫 번째로 발견한 입력 오류에서 중단하며 부분 결과는 돌려주지 않는다.
pub fn calculate(input: &CalculationInput) -> EfficiencyResult<CalculationResult> {
    let result = run_stages(input);
    if let Err(err) = &result {
        warn!(error = %err, "pump efficiency calculation rejected");
    }
    result
}

fn run_stages(input: &CalculationInput) -> EfficiencyResult<CalculationResult> {
    let flow_m3s = normalize_flow(input.flow_unit_selector, input.flow_value)?;
    if flow_m3s.is_nan() || flow_m3s <= 0.0 {
        return Err(EfficiencyError::NonPositiveFlow { flow_m3s });
    }
    let pump_type = PumpType::from_code(&input.pump_type)?;

    let efficiency_optimum = optimum_efficiency(pump_type, flow_m3s);
    let efficiency_correction = efficiency_correction(pump_type, input.specific_speed);
    let efficiency_deviation = efficiency_deviation(flow_m3s);
    debug!(
        %pump_type,
        flow_m3s,
        specific_speed = input.specific_speed,
        efficiency_optimum,
        efficiency_correction,
        efficiency_deviation,
        "pump efficiency calculated"
    );

    Ok(CalculationResult {
        efficiency_optimum,
        efficiency_correction,
        efficiency_deviation,
    })
}
