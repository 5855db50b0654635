use std::path::Path;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::pump::EfficiencyError;
use crate::relay::RelayError;
use crate::ui_cli::{self, MenuChoice};
use crate::units::ParseFlowUnitError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 효율 계산 입력 오류
    #[error("{0}")]
    Efficiency(#[from] EfficiencyError),
    /// 유량 단위 기호 해석 오류
    #[error("{0}")]
    FlowUnit(#[from] ParseFlowUnitError),
    /// JSON 요청/응답 오류
    #[error("request error: {0}")]
    Relay(#[from] RelayError),
}

/// 대화형 CLI 의 메인 루프를 실행한다. 종료 시 설정을 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculation(tr, config)?,
            MenuChoice::PumpTypes => ui_cli::handle_pump_types(tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
