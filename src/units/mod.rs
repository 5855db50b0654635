//! 단위 정의 및 변환 모듈 모음.

pub mod flow;

pub use flow::{convert_flow, normalize_flow, FlowUnit, ParseFlowUnitError, M3S_PER_US_GPM};
