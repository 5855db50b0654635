//! 원심 펌프 효율 추정 모듈 모음.
//! 유량 단위 환산 결과를 받아 최적 효율, 비속도 보정, 편차 폭을 계산한다.

pub mod calculator;
pub mod efficiency;
pub mod error;
pub mod pump_type;

pub use calculator::{calculate, CalculationInput, CalculationResult};
pub use efficiency::{efficiency_correction, efficiency_deviation, optimum_efficiency};
pub use error::{EfficiencyError, EfficiencyResult};
pub use pump_type::{describe, describe_or, PumpType};
