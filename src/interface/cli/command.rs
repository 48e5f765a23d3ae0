//! CLI 명령 파싱 모듈.

use clap::{Args, Parser, Subcommand};

use crate::application::config::{BehaviorSettings, CallOverride, DEFAULT_QUIT_CODE, Settings};

#[derive(Debug, Parser)]
#[command(name = "exhandler")]
#[command(about = "Styled exception diagnostics with layered settings")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged settings and searched config paths
    Config,
    /// Divide two integers and report failures through the handler
    Demo(DemoArgs),
}

#[derive(Debug, Args)]
struct DemoArgs {
    #[arg(long, default_value_t = 10)]
    numerator: i64,

    #[arg(long, default_value_t = 0)]
    denominator: i64,

    /// Show the line number where the error was captured
    #[arg(long)]
    show_line: bool,

    /// Include the error trace
    #[arg(long)]
    trace: bool,

    /// Prefix the message with a timestamp
    #[arg(long)]
    timestamp: bool,

    /// Exit the process after printing (global default)
    #[arg(long)]
    exit_script: bool,

    /// Return the message instead of printing it (global default)
    #[arg(long)]
    return_string: bool,

    /// Formatter override, e.g. `--style main_color=red` (repeatable)
    #[arg(long = "style", value_name = "FIELD=VALUE")]
    styles: Vec<String>,

    /// Print through the level printer instead of the plain console sink
    #[arg(long)]
    level_printer: bool,

    /// Detail message for this call
    #[arg(long)]
    msg: Option<String>,

    /// Exit code used when this call terminates the process
    #[arg(long, default_value_t = DEFAULT_QUIT_CODE)]
    quit_code: i32,

    /// Per-call exit override (true/false)
    #[arg(long)]
    call_exit: Option<bool>,

    /// Per-call return-string override (true/false)
    #[arg(long)]
    call_return_string: Option<bool>,
}

pub enum CliAction {
    InspectConfig,
    Demo(DemoOptions),
}

/// 데모 실행 입력값.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub numerator: i64,
    pub denominator: i64,
    /// 설정 파일 위에 덮어쓸 전역 설정
    pub settings: Settings,
    /// `FIELD=VALUE` 스타일 재설정
    pub styles: Vec<(String, String)>,
    pub level_printer: bool,
    pub call: CallOverride,
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        let cli = Cli::parse();

        match cli.command {
            Commands::Config => Ok(CliAction::InspectConfig),
            Commands::Demo(args) => Ok(CliAction::Demo(args.into_options()?)),
        }
    }
}

impl DemoArgs {
    fn into_options(self) -> Result<DemoOptions, String> {
        let styles = self
            .styles
            .iter()
            .map(|raw| parse_style_pair(raw))
            .collect::<Result<Vec<_>, _>>()?;

        // 지정하지 않은 플래그는 설정 파일 값을 유지한다.
        let settings = Settings {
            handler: BehaviorSettings {
                show_line: self.show_line.then_some(true),
                trace: self.trace.then_some(true),
                use_timestamp: self.timestamp.then_some(true),
                exit_script: self.exit_script.then_some(true),
                return_string_rather_than_print: self.return_string.then_some(true),
            },
            ..Default::default()
        };

        Ok(DemoOptions {
            numerator: self.numerator,
            denominator: self.denominator,
            settings,
            styles,
            level_printer: self.level_printer,
            call: CallOverride {
                msg: self.msg,
                exit_script: self.call_exit,
                quit_code: self.quit_code,
                return_string_rather_than_print: self.call_return_string,
            },
        })
    }
}

fn parse_style_pair(raw: &str) -> Result<(String, String), String> {
    let Some((field, value)) = raw.split_once('=') else {
        return Err(format!("invalid --style value (expected FIELD=VALUE): {raw}"));
    };
    let field = field.trim();
    let value = value.trim();
    if field.is_empty() || value.is_empty() {
        return Err(format!("invalid --style value (expected FIELD=VALUE): {raw}"));
    }
    Ok((field.to_string(), value.to_string()))
}
