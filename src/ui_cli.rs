use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::pump::{self, CalculationInput, CalculationResult, EfficiencyError, PumpType};
use crate::units::FlowUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    PumpTypes,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_PUMP_TYPES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::PumpTypes),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 효율 계산 메뉴를 처리한다. 입력 오류는 메시지를 보여주고 결과 칸을 비운다.
pub fn handle_calculation(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::HELP_CALCULATE));
    println!("{}", tr.t(keys::FLOW_UNIT_OPTIONS));
    let unit_prompt = format!(
        "{} {} [{}] ",
        tr.t(keys::PROMPT_FLOW_UNIT).trim_end(),
        tr.t(keys::DEFAULT_HINT),
        cfg.default_flow_unit.selector()
    );
    let unit_sel = read_line(&unit_prompt)?;
    let flow_unit_selector = if unit_sel.trim().is_empty() {
        cfg.default_flow_unit.selector()
    } else {
        match unit_sel.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                // 숫자가 아니면 기호(l/min, gpm ...)로 한 번 더 해석한다.
                match unit_sel.parse::<FlowUnit>() {
                    Ok(unit) => unit.selector(),
                    Err(err) => {
                        report_failure(tr, &AppError::from(err));
                        return Ok(());
                    }
                }
            }
        }
    };
    let flow_value = read_f64(tr, tr.t(keys::PROMPT_FLOW_VALUE))?;
    let specific_speed = read_f64(tr, tr.t(keys::PROMPT_SPECIFIC_SPEED))?;

    let type_prompt = format!(
        "{} {} [{}] ",
        tr.t(keys::PROMPT_PUMP_TYPE).trim_end(),
        tr.t(keys::DEFAULT_HINT),
        cfg.default_pump_type
    );
    let type_sel = read_line(&type_prompt)?;
    let pump_type = if type_sel.trim().is_empty() {
        cfg.default_pump_type.code().to_string()
    } else {
        type_sel.trim().to_string()
    };
    println!(
        "  {}",
        pump::describe_or(&pump_type, tr.t(keys::PUMP_TYPE_NO_DESCRIPTION))
    );

    let input = CalculationInput {
        flow_unit_selector,
        flow_value,
        specific_speed,
        pump_type,
    };
    match pump::calculate(&input) {
        Ok(result) => print_result(tr, &result),
        Err(err) => report_failure(tr, &AppError::from(err)),
    }
    Ok(())
}

/// 계산 결과를 소수점 둘째 자리로 출력한다.
pub fn print_result(tr: &Translator, result: &CalculationResult) {
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_EFFICIENCY_OPTIMUM),
        result.efficiency_optimum
    );
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_EFFICIENCY_CORRECTION),
        result.efficiency_correction
    );
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_EFFICIENCY_DEVIATION),
        result.efficiency_deviation
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_ACTUAL_EFFICIENCY),
        result.actual_efficiency_text()
    );
}

/// 오류를 현재 언어의 문구로 바꾼다. 입력 오류 외에는 오류 메시지를 그대로 쓴다.
pub fn error_text(tr: &Translator, err: &AppError) -> String {
    match err {
        AppError::Efficiency(EfficiencyError::InvalidUnit { selector }) => {
            format!("{} {selector}", tr.t(keys::ERROR_INVALID_UNIT))
        }
        AppError::Efficiency(EfficiencyError::InvalidPumpType { code }) => {
            format!("{} {code:?}", tr.t(keys::ERROR_INVALID_PUMP_TYPE))
        }
        AppError::Efficiency(EfficiencyError::NonPositiveFlow { flow_m3s }) => {
            format!("{} {flow_m3s}", tr.t(keys::ERROR_NON_POSITIVE_FLOW))
        }
        AppError::FlowUnit(e) => format!("{} {:?}", tr.t(keys::ERROR_UNKNOWN_FLOW_UNIT), e.symbol),
        other => other.to_string(),
    }
}

fn report_failure(tr: &Translator, err: &AppError) {
    println!("{}: {}", tr.t(keys::ERROR_PREFIX), error_text(tr, err));
    let cleared = tr.t(keys::RESULT_CLEARED);
    for key in [
        keys::RESULT_EFFICIENCY_OPTIMUM,
        keys::RESULT_EFFICIENCY_CORRECTION,
        keys::RESULT_EFFICIENCY_DEVIATION,
        keys::RESULT_ACTUAL_EFFICIENCY,
    ] {
        println!("{} {cleared}", tr.t(key));
    }
}

/// 펌프 형식 목록과 설명을 출력한다.
pub fn handle_pump_types(tr: &Translator) {
    println!("{}", tr.t(keys::PUMP_TYPES_HEADING));
    for pump_type in PumpType::ALL {
        println!("{pump_type}) {}", pump_type.description());
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!(
        "{} {} / {} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.default_flow_unit,
        cfg.default_pump_type,
        cfg.language.as_deref().unwrap_or("auto")
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::FLOW_UNIT_OPTIONS));
            let v = read_line(tr.t(keys::PROMPT_FLOW_UNIT))?;
            match v.parse::<FlowUnit>() {
                Ok(unit) => {
                    cfg.default_flow_unit = unit;
                    true
                }
                Err(_) => false,
            }
        }
        "2" => {
            let v = read_line(tr.t(keys::PROMPT_PUMP_TYPE))?;
            match v.trim().parse::<PumpType>() {
                Ok(pump_type) => {
                    cfg.default_pump_type = pump_type;
                    true
                }
                Err(_) => false,
            }
        }
        "3" => {
            let v = read_line("ko / en / auto: ")?;
            match v.trim().to_lowercase().as_str() {
                "auto" | "" => {
                    cfg.language = None;
                    true
                }
                code @ ("ko" | "en") => {
                    cfg.language = Some(code.to_string());
                    true
                }
                _ => false,
            }
        }
        _ => false,
    };
    if changed {
        println!("{}", tr.t(keys::SETTINGS_SAVED));
    } else {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
