use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::EfficiencyError;

/// 펌프 형식. 효율 회귀식은 이 코드별로 선택된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PumpType {
    A,
    B,
    C,
    F,
    G,
    J,
    V,
}

impl PumpType {
    pub const ALL: [PumpType; 7] = [
        PumpType::A,
        PumpType::B,
        PumpType::C,
        PumpType::F,
        PumpType::G,
        PumpType::J,
        PumpType::V,
    ];

    /// 한 글자 코드를 해석한다. 대소문자와 공백을 그대로 비교한다.
    pub fn from_code(code: &str) -> Result<Self, EfficiencyError> {
        match code {
            "A" => Ok(PumpType::A),
            "B" => Ok(PumpType::B),
            "C" => Ok(PumpType::C),
            "F" => Ok(PumpType::F),
            "G" => Ok(PumpType::G),
            "J" => Ok(PumpType::J),
            "V" => Ok(PumpType::V),
            _ => Err(EfficiencyError::InvalidPumpType {
                code: code.to_string(),
            }),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            PumpType::A => "A",
            PumpType::B => "B",
            PumpType::C => "C",
            PumpType::F => "F",
            PumpType::G => "G",
            PumpType::J => "J",
            PumpType::V => "V",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PumpType::A => "Slurry Pump, end suction",
            PumpType::B => "Solid-handling, end suction",
            PumpType::C => "Submersible Sewage",
            PumpType::F => "ASME B73, API End Section-small",
            PumpType::G => "End Section Large",
            PumpType::J => "Double Section",
            PumpType::V => {
                "Vertical Turbine, Mixed flow and propeller, single and multistage diffuser type"
            }
        }
    }

    /// 수직 터빈형(V)은 보정식 계열이 따로 있다.
    pub fn is_vertical_turbine(self) -> bool {
        matches!(self, PumpType::V)
    }
}

impl fmt::Display for PumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PumpType {
    type Err = EfficiencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PumpType::from_code(s)
    }
}

/// 코드로 설명을 조회한다. 모르는 코드는 `None`.
pub fn describe(code: &str) -> Option<&'static str> {
    PumpType::from_code(code).ok().map(PumpType::description)
}

/// 코드로 설명을 조회하되, 모르는 코드이면 호출자가 준 문구를 돌려준다.
pub fn describe_or<'a>(code: &str, fallback: &'a str) -> &'a str {
    match describe(code) {
        Some(text) => text,
        None => fallback,
    }
}
