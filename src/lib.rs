//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 JSON 중계 등 다른 입출력 계층에서도 쓴다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod pump;
pub mod relay;
pub mod ui_cli;
pub mod units;
