use thiserror::Error;

pub type EfficiencyResult<T> = Result<T, EfficiencyError>;

/// 효율 계산 중 발생 가능한 입력 오류.
///
/// 메시지는 JSON 응답의 `error` 필드로도 나가므로 영어로 둔다.
/// CLI 는 [`crate::ui_cli::error_text`]에서 언어별 문구로 바꿔 출력한다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EfficiencyError {
    /// 유량 단위 선택 번호가 1~4 범위를 벗어남
    #[error("Invalid Unit for Flow (C5): {selector}")]
    InvalidUnit { selector: i64 },

    /// 카탈로그에 없는 펌프 형식 코드
    #[error("Invalid Pump Type (F6): {code:?}")]
    InvalidPumpType { code: String },

    /// m³/s 환산 유량이 0 이하(또는 NaN)
    #[error("Pump Flow must be greater than zero for calculations (got {flow_m3s} m3/s)")]
    NonPositiveFlow { flow_m3s: f64 },
}
