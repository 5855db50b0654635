use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{warn, Level};

use pump_efficiency_toolbox::app::{self, AppError};
use pump_efficiency_toolbox::config::{self, Config, DEFAULT_CONFIG_PATH};
use pump_efficiency_toolbox::i18n::{self, keys, Translator};
use pump_efficiency_toolbox::pump::{self, CalculationInput};
use pump_efficiency_toolbox::relay::{self, CalculationResponse};
use pump_efficiency_toolbox::ui_cli;
use pump_efficiency_toolbox::units::{convert_flow, FlowUnit};

#[derive(Parser)]
#[command(name = "pump_efficiency_toolbox_cli")]
#[command(about = "Centrifugal pump efficiency estimator", long_about = None)]
struct Cli {
    /// 표시 언어 (ko, en, auto)
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 로그 상세도 (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate pump efficiency for one operating point
    Calc {
        /// Flow unit: 1..4 or m3/s, l/min, l/s, gpm
        #[arg(long, short)]
        unit: String,
        /// Pump flow in the selected unit
        #[arg(long, short, allow_hyphen_values = true)]
        flow: f64,
        /// Specific speed
        #[arg(long, allow_hyphen_values = true)]
        ns: f64,
        /// Pump type code (A, B, C, F, G, J, V)
        #[arg(long = "pump-type", short = 't')]
        pump_type: String,
        /// Print the JSON response record instead of text
        #[arg(long)]
        json: bool,
    },
    /// List pump types and their descriptions
    Types,
    /// Show the description of one pump type code
    Describe {
        code: String,
    },
    /// Answer a JSON calculation request (stdin or file)
    Json {
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// Convert a flow value between units
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// Interactive menu (default)
    Interactive,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Interactive));

    let mut cfg = match load_config(&cli.config, interactive) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose, &cfg.log_level);

    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let tr = Translator::new_with_pack(&lang, None);

    match try_run(cli.command, &mut cfg, &cli.config, &tr) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}: {}", tr.t(keys::ERROR_PREFIX), ui_cli::error_text(&tr, &err));
            ExitCode::FAILURE
        }
    }
}

/// 대화형 모드에서만 설정 파일을 새로 만든다.
fn load_config(path: &Path, create: bool) -> Result<Config, config::ConfigError> {
    if create || path.exists() {
        config::load_or_default(path)
    } else {
        Ok(Config::default())
    }
}

fn init_tracing(verbose: u8, configured: &str) {
    let parsed = config::parse_log_level(configured);
    let level = match verbose {
        0 => parsed.unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    if parsed.is_none() {
        warn!(log_level = configured, "unknown log_level in config, using warn");
    }
}

fn try_run(
    command: Option<Commands>,
    cfg: &mut Config,
    config_path: &Path,
    tr: &Translator,
) -> Result<ExitCode, AppError> {
    match command.unwrap_or(Commands::Interactive) {
        Commands::Calc {
            unit,
            flow,
            ns,
            pump_type,
            json,
        } => {
            let input = CalculationInput {
                flow_unit_selector: parse_unit_selector(&unit)?,
                flow_value: flow,
                specific_speed: ns,
                pump_type: pump_type.trim().to_string(),
            };
            let result = pump::calculate(&input)?;
            if json {
                let body = serde_json::to_string_pretty(&CalculationResponse::from(result))
                    .map_err(relay::RelayError::from)?;
                println!("{body}");
            } else {
                ui_cli::print_result(tr, &result);
            }
        }
        Commands::Types => ui_cli::handle_pump_types(tr),
        Commands::Describe { code } => {
            println!(
                "{}",
                pump::describe_or(code.trim(), tr.t(keys::PUMP_TYPE_NO_DESCRIPTION))
            );
        }
        Commands::Json { input } => {
            let body = match input {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let reply = relay::handle_request(&body);
            println!("{}", reply.body);
            if !reply.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Convert { value, from, to } => {
            let from: FlowUnit = from.parse()?;
            let to: FlowUnit = to.parse()?;
            println!("{} {to}", convert_flow(value, from, to));
        }
        Commands::Interactive => {
            app::run(cfg, config_path, tr)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// 숫자는 그대로 선택 번호로 넘겨 범위 검증을 계산 단계에 맡긴다.
fn parse_unit_selector(unit: &str) -> Result<i64, AppError> {
    match unit.trim().parse::<i64>() {
        Ok(selector) => Ok(selector),
        Err(_) => Ok(unit.parse::<FlowUnit>()?.selector()),
    }
}
