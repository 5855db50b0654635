//! 원격 `/calculate` 호출에서 주고받는 JSON 요청/응답 형식.
//!
//! 전송 계층과 무관하게 상태 코드와 본문만 다룬다. 서버 쪽은 [`handle_request`],
//! 클라이언트 쪽은 [`decode_reply`]를 쓴다.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::pump::{calculate, CalculationInput, CalculationResult};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// 계산 성공 시 응답 본문.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub efficiency_optimum: f64,
    pub efficiency_correction: f64,
    pub efficiency_deviation: f64,
    /// `"<값> ± <편차> %"`
    pub actual_efficiency: String,
}

impl From<CalculationResult> for CalculationResponse {
    fn from(value: CalculationResult) -> Self {
        Self {
            efficiency_optimum: value.efficiency_optimum,
            efficiency_correction: value.efficiency_correction,
            efficiency_deviation: value.efficiency_deviation,
            actual_efficiency: value.actual_efficiency_text(),
        }
    }
}

impl From<&CalculationResponse> for CalculationResult {
    fn from(value: &CalculationResponse) -> Self {
        Self {
            efficiency_optimum: value.efficiency_optimum,
            efficiency_correction: value.efficiency_correction,
            efficiency_deviation: value.efficiency_deviation,
        }
    }
}

/// 실패 시 응답 본문.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 상태 코드와 JSON 본문 한 쌍.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub body: String,
}

impl RelayReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 원격 응답을 해석할 때 발생 가능한 오류.
#[derive(Error, Debug)]
pub enum RelayError {
    /// 본문이 기대한 JSON 형식이 아님
    #[error("cannot decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// 원격 측에서 계산 실패를 돌려줌
    #[error("remote calculation failed (HTTP {status}): {detail}")]
    Remote { status: u16, detail: String },
}

/// JSON 요청 본문을 받아 계산하고 응답을 만든다.
///
/// 형식 오류와 계산 오류 모두 400 과 `{"error": ...}` 본문으로 돌려준다.
pub fn handle_request(body: &str) -> RelayReply {
    let input: CalculationInput = match serde_json::from_str(body) {
        Ok(input) => input,
        Err(err) => return error_reply(format!("Malformed request: {err}")),
    };
    match calculate(&input) {
        Ok(result) => match serde_json::to_string(&CalculationResponse::from(result)) {
            Ok(body) => RelayReply {
                status: STATUS_OK,
                body,
            },
            Err(err) => error_reply(err.to_string()),
        },
        Err(err) => error_reply(err.to_string()),
    }
}

fn error_reply(message: String) -> RelayReply {
    debug!(%message, "relay request failed");
    let body = serde_json::to_string(&ErrorBody { error: message.clone() })
        .unwrap_or_else(|_| format!("{{\"error\":{message:?}}}"));
    RelayReply {
        status: STATUS_BAD_REQUEST,
        body,
    }
}

/// 원격 응답을 해석한다. 2xx 가 아니면 본문의 `error` 필드(없으면 본문 전체)를 담아 실패로 돌려준다.
pub fn decode_reply(status: u16, body: &str) -> Result<CalculationResponse, RelayError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(RelayError::Remote { status, detail });
    }
    Ok(serde_json::from_str(body)?)
}

/// 계산 입력을 요청 본문으로 직렬화한다.
pub fn encode_request(input: &CalculationInput) -> Result<String, RelayError> {
    Ok(serde_json::to_string(input)?)
}
