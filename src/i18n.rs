use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_PUMP_TYPES: &str = "main_menu.pump_types";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const FLOW_UNIT_OPTIONS: &str = "calc.flow_unit_options";
    pub const PROMPT_FLOW_UNIT: &str = "prompt.flow_unit";
    pub const PROMPT_FLOW_VALUE: &str = "prompt.flow_value";
    pub const PROMPT_SPECIFIC_SPEED: &str = "prompt.specific_speed";
    pub const PROMPT_PUMP_TYPE: &str = "prompt.pump_type";
    pub const DEFAULT_HINT: &str = "prompt.default_hint";

    pub const RESULT_EFFICIENCY_OPTIMUM: &str = "result.efficiency_optimum";
    pub const RESULT_EFFICIENCY_CORRECTION: &str = "result.efficiency_correction";
    pub const RESULT_EFFICIENCY_DEVIATION: &str = "result.efficiency_deviation";
    pub const RESULT_ACTUAL_EFFICIENCY: &str = "result.actual_efficiency";
    pub const RESULT_CLEARED: &str = "result.cleared";

    pub const PUMP_TYPES_HEADING: &str = "pump_types.heading";
    pub const PUMP_TYPE_NO_DESCRIPTION: &str = "pump_types.no_description";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_UNIT: &str = "error.invalid_unit";
    pub const ERROR_INVALID_PUMP_TYPE: &str = "error.invalid_pump_type";
    pub const ERROR_NON_POSITIVE_FLOW: &str = "error.non_positive_flow";
    pub const ERROR_UNKNOWN_FLOW_UNIT: &str = "error.unknown_flow_unit";

    pub const HELP_CALCULATE: &str = "help.calculate";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어/한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

/// 중첩 테이블을 점(.)으로 이은 평탄한 맵으로 바꾼다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pump Efficiency Toolbox ===",
        MAIN_MENU_CALCULATE => "1) 펌프 효율 계산",
        MAIN_MENU_PUMP_TYPES => "2) 펌프 형식 목록",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CALC_HEADING => "\n-- 펌프 효율 계산 --",
        FLOW_UNIT_OPTIONS => "유량 단위: 1=m3/s 2=L/min 3=L/s 4=US gpm",
        PROMPT_FLOW_UNIT => "유량 단위 선택: ",
        PROMPT_FLOW_VALUE => "펌프 유량: ",
        PROMPT_SPECIFIC_SPEED => "비속도: ",
        PROMPT_PUMP_TYPE => "펌프 형식 코드 (A/B/C/F/G/J/V): ",
        DEFAULT_HINT => "(엔터 = 기본값)",
        RESULT_EFFICIENCY_OPTIMUM => "최적 효율 [%]:",
        RESULT_EFFICIENCY_CORRECTION => "효율 보정 [%]:",
        RESULT_EFFICIENCY_DEVIATION => "효율 편차 [%]:",
        RESULT_ACTUAL_EFFICIENCY => "실제 효율:",
        RESULT_CLEARED => "--",
        PUMP_TYPES_HEADING => "\n-- 펌프 형식 --",
        PUMP_TYPE_NO_DESCRIPTION => "펌프 형식을 선택하면 설명이 표시됩니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 기본값:",
        SETTINGS_OPTIONS => "1) 기본 유량 단위  2) 기본 펌프 형식  3) 언어",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_INVALID_UNIT => "유량 단위(C5)가 올바르지 않습니다:",
        ERROR_INVALID_PUMP_TYPE => "펌프 형식(F6)이 올바르지 않습니다:",
        ERROR_NON_POSITIVE_FLOW => "펌프 유량은 0보다 커야 합니다. 환산 유량 [m3/s]:",
        ERROR_UNKNOWN_FLOW_UNIT => "알 수 없는 유량 단위:",
        HELP_CALCULATE => "도움말: 유량 단위 → 유량 → 비속도 → 펌프 형식 순으로 입력. 결과는 소수점 둘째 자리까지 표시됩니다.",
        HELP_SETTINGS => "도움말: 기본값은 config.toml 에 저장되며 다음 실행에도 유지됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pump Efficiency Toolbox ===",
        MAIN_MENU_CALCULATE => "1) Pump efficiency",
        MAIN_MENU_PUMP_TYPES => "2) Pump types",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CALC_HEADING => "\n-- Pump Efficiency --",
        FLOW_UNIT_OPTIONS => "Flow units: 1=m3/s 2=L/min 3=L/s 4=US gpm",
        PROMPT_FLOW_UNIT => "Flow unit: ",
        PROMPT_FLOW_VALUE => "Pump flow: ",
        PROMPT_SPECIFIC_SPEED => "Specific speed: ",
        PROMPT_PUMP_TYPE => "Pump type code (A/B/C/F/G/J/V): ",
        DEFAULT_HINT => "(enter = default)",
        RESULT_EFFICIENCY_OPTIMUM => "Efficiency at optimum [%]:",
        RESULT_EFFICIENCY_CORRECTION => "Efficiency correction [%]:",
        RESULT_EFFICIENCY_DEVIATION => "Efficiency deviation [%]:",
        RESULT_ACTUAL_EFFICIENCY => "Actual efficiency:",
        RESULT_CLEARED => "--",
        PUMP_TYPES_HEADING => "\n-- Pump Types --",
        PUMP_TYPE_NO_DESCRIPTION => "Select a pump type to see description.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current defaults:",
        SETTINGS_OPTIONS => "1) Default flow unit  2) Default pump type  3) Language",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings updated.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_INVALID_UNIT => "Invalid Unit for Flow (C5):",
        ERROR_INVALID_PUMP_TYPE => "Invalid Pump Type (F6):",
        ERROR_NON_POSITIVE_FLOW => "Pump Flow must be greater than zero for calculations. Flow [m3/s]:",
        ERROR_UNKNOWN_FLOW_UNIT => "Unknown flow unit:",
        HELP_CALCULATE => "Help: flow unit → flow → specific speed → pump type. Results are shown to two decimals.",
        HELP_SETTINGS => "Help: defaults are stored in config.toml and kept for the next run.",
        _ => return None,
    })
}
