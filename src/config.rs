use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::Level;

use crate::pump::PumpType;
use crate::units::FlowUnit;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 코드 (ko/en/auto). 없으면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// 대화형 모드의 기본 유량 단위
    pub default_flow_unit: FlowUnit,
    /// 대화형 모드의 기본 펌프 형식
    pub default_pump_type: PumpType,
    /// 로그 수준 (error/warn/info/debug/trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_flow_unit: FlowUnit::CubicMeterPerSecond,
            default_pump_type: PumpType::A,
            log_level: "warn".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

/// 로그 수준 문자열을 해석한다. 알 수 없는 값이면 `None`.
pub fn parse_log_level(value: &str) -> Option<Level> {
    value.trim().parse::<Level>().ok()
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
