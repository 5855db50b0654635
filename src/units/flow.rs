use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::pump::error::{EfficiencyError, EfficiencyResult};

/// US 갤런/분 → m³/s 환산 계수.
pub const M3S_PER_US_GPM: f64 = 0.00006309;

/// 단위 기호나 번호를 해석하지 못함.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown flow unit: {symbol:?}")]
pub struct ParseFlowUnitError {
    pub symbol: String,
}

/// 체적 유량 단위. 내부 기준은 m³/s 이다.
///
/// 입력 양식의 선택 번호(1~4)와 1:1로 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowUnit {
    /// 1 = m³/s
    CubicMeterPerSecond,
    /// 2 = L/min
    LiterPerMinute,
    /// 3 = L/s
    LiterPerSecond,
    /// 4 = US gpm
    UsGallonPerMinute,
}

impl FlowUnit {
    pub const ALL: [FlowUnit; 4] = [
        FlowUnit::CubicMeterPerSecond,
        FlowUnit::LiterPerMinute,
        FlowUnit::LiterPerSecond,
        FlowUnit::UsGallonPerMinute,
    ];

    /// 선택 번호를 단위로 바꾼다. 1~4 이외의 값은 `InvalidUnit` 오류.
    pub fn from_selector(selector: i64) -> EfficiencyResult<Self> {
        match selector {
            1 => Ok(FlowUnit::CubicMeterPerSecond),
            2 => Ok(FlowUnit::LiterPerMinute),
            3 => Ok(FlowUnit::LiterPerSecond),
            4 => Ok(FlowUnit::UsGallonPerMinute),
            _ => Err(EfficiencyError::InvalidUnit { selector }),
        }
    }

    pub fn selector(self) -> i64 {
        match self {
            FlowUnit::CubicMeterPerSecond => 1,
            FlowUnit::LiterPerMinute => 2,
            FlowUnit::LiterPerSecond => 3,
            FlowUnit::UsGallonPerMinute => 4,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FlowUnit::CubicMeterPerSecond => "m3/s",
            FlowUnit::LiterPerMinute => "l/min",
            FlowUnit::LiterPerSecond => "l/s",
            FlowUnit::UsGallonPerMinute => "gpm",
        }
    }
}

impl fmt::Display for FlowUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 단위 기호(`m3/s`, `l/min`, `lpm`, `l/s`, `gpm` ...) 또는 선택 번호("1"~"4")를 해석한다.
impl FromStr for FlowUnit {
    type Err = ParseFlowUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unit = match s.to_lowercase().as_str() {
            "1" | "m3/s" | "m^3/s" | "cms" => FlowUnit::CubicMeterPerSecond,
            "2" | "l/min" | "lpm" => FlowUnit::LiterPerMinute,
            "3" | "l/s" | "lps" => FlowUnit::LiterPerSecond,
            "4" | "gpm" | "usgpm" | "gal/min" => FlowUnit::UsGallonPerMinute,
            _ => {
                return Err(ParseFlowUnitError {
                    symbol: s.to_string(),
                })
            }
        };
        Ok(unit)
    }
}

fn to_cubic_meter_per_second(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::LiterPerMinute => value / 60000.0,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::UsGallonPerMinute => value * M3S_PER_US_GPM,
    }
}

fn from_cubic_meter_per_second(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::LiterPerMinute => value * 60000.0,
        FlowUnit::LiterPerSecond => value * 1000.0,
        FlowUnit::UsGallonPerMinute => value / M3S_PER_US_GPM,
    }
}

/// 선택 번호와 값으로 주어진 유량을 m³/s 로 환산한다. 반올림은 하지 않는다.
pub fn normalize_flow(selector: i64, value: f64) -> EfficiencyResult<f64> {
    let unit = FlowUnit::from_selector(selector)?;
    Ok(to_cubic_meter_per_second(value, unit))
}

/// 유량 단위를 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let m3s = to_cubic_meter_per_second(value, from);
    from_cubic_meter_per_second(m3s, to)
}
