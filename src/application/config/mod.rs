//! 핸들러 설정 스키마(순수 데이터)와 병합 규칙.
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

mod resolve;

use serde::{Deserialize, Serialize};

use crate::application::error::ConfigError;
use crate::domain::style::{Color, Format};

pub use resolve::{EffectiveConfig, resolve, validate_datetime_format};

pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_QUIT_CODE: i32 = 1;

/// 세그먼트별 색상/서식과 시간 표기 형식.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleConfig {
    pub main_color: Color,
    pub message_color: Color,
    pub trace_color: Color,
    pub timestamp_color: Color,
    pub main_format: Format,
    pub message_format: Format,
    pub trace_format: Format,
    pub timestamp_format: Format,
    pub datetime_format: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let main_color = Color::White;
        let main_format = Format::Normal;
        Self {
            main_color,
            message_color: main_color,
            trace_color: main_color,
            timestamp_color: main_color,
            main_format,
            message_format: main_format,
            trace_format: main_format,
            timestamp_format: main_format,
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl StyleConfig {
    /// 재설정 규칙.
    /// - main 값: 주어지면 교체, 없으면 유지
    /// - 세그먼트 값: 이번 호출에서 주어진 값, 없으면 (새) main 값
    /// - datetime_format: 주어질 때만 교체
    pub fn apply(&mut self, update: &FormatterUpdate) {
        self.main_format = update.main_format.unwrap_or(self.main_format);
        self.timestamp_format = update.timestamp_format.unwrap_or(self.main_format);
        self.trace_format = update.trace_format.unwrap_or(self.main_format);
        self.message_format = update.message_format.unwrap_or(self.main_format);

        self.main_color = update.main_color.unwrap_or(self.main_color);
        self.timestamp_color = update.timestamp_color.unwrap_or(self.main_color);
        self.trace_color = update.trace_color.unwrap_or(self.main_color);
        self.message_color = update.message_color.unwrap_or(self.main_color);

        if let Some(datetime_format) = update.datetime_format.as_deref().filter(|v| !v.is_empty()) {
            self.datetime_format = datetime_format.to_string();
        }
    }
}

/// `formatter` 재설정 입력. 모든 필드는 선택값이다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormatterUpdate {
    pub main_color: Option<Color>,
    pub message_color: Option<Color>,
    pub trace_color: Option<Color>,
    #[serde(alias = "timestamps_color")]
    pub timestamp_color: Option<Color>,
    pub main_format: Option<Format>,
    pub message_format: Option<Format>,
    pub trace_format: Option<Format>,
    #[serde(alias = "timestamps_format")]
    pub timestamp_format: Option<Format>,
    pub datetime_format: Option<String>,
}

impl FormatterUpdate {
    /// `("main_color", "red")` 형태의 이름/값 쌍으로 재설정 입력을 만든다.
    /// 알 수 없는 필드나 토큰 이름은 즉시 오류로 반환한다.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut update = Self::default();
        for (field, value) in pairs {
            update.set(field, value)?;
        }
        Ok(update)
    }

    /// 단일 필드를 이름으로 설정한다.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), ConfigError> {
        match field.trim() {
            "main_color" => self.main_color = Some(parse_color(value)?),
            "message_color" => self.message_color = Some(parse_color(value)?),
            "trace_color" => self.trace_color = Some(parse_color(value)?),
            "timestamp_color" | "timestamps_color" => {
                self.timestamp_color = Some(parse_color(value)?)
            }
            "main_format" => self.main_format = Some(parse_format(value)?),
            "message_format" => self.message_format = Some(parse_format(value)?),
            "trace_format" => self.trace_format = Some(parse_format(value)?),
            "timestamp_format" | "timestamps_format" => {
                self.timestamp_format = Some(parse_format(value)?)
            }
            "datetime_format" => {
                validate_datetime_format(value)?;
                self.datetime_format = Some(value.to_string());
            }
            other => return Err(ConfigError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: FormatterUpdate) {
        if other.main_color.is_some() {
            self.main_color = other.main_color;
        }
        if other.message_color.is_some() {
            self.message_color = other.message_color;
        }
        if other.trace_color.is_some() {
            self.trace_color = other.trace_color;
        }
        if other.timestamp_color.is_some() {
            self.timestamp_color = other.timestamp_color;
        }
        if other.main_format.is_some() {
            self.main_format = other.main_format;
        }
        if other.message_format.is_some() {
            self.message_format = other.message_format;
        }
        if other.trace_format.is_some() {
            self.trace_format = other.trace_format;
        }
        if other.timestamp_format.is_some() {
            self.timestamp_format = other.timestamp_format;
        }
        if other.datetime_format.is_some() {
            self.datetime_format = other.datetime_format;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// 프로세스 전역 기본 설정. 호출자가 소유하고 참조로 넘긴다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalConfig {
    pub show_line: bool,
    pub trace: bool,
    pub use_timestamp: bool,
    pub exit_script: bool,
    pub return_string_rather_than_print: bool,
    pub style: StyleConfig,
}

impl GlobalConfig {
    /// 파일 설정(병합 완료 상태)에서 전역 설정을 만든다.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        if let Some(datetime_format) = settings.formatter.datetime_format.as_deref() {
            validate_datetime_format(datetime_format)?;
        }

        let behavior = &settings.handler;
        let mut style = StyleConfig::default();
        style.apply(&settings.formatter);

        Ok(Self {
            show_line: behavior.show_line.unwrap_or(false),
            trace: behavior.trace.unwrap_or(false),
            use_timestamp: behavior.use_timestamp.unwrap_or(false),
            exit_script: behavior.exit_script.unwrap_or(false),
            return_string_rather_than_print: behavior
                .return_string_rather_than_print
                .unwrap_or(false),
            style,
        })
    }
}

/// 호출 단위 재정의 값. 한 번의 `exception` 호출 동안만 존재한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOverride {
    /// 상세 정보 문구(빈 문자열은 미지정으로 취급)
    pub msg: Option<String>,
    pub exit_script: Option<bool>,
    /// 종료 결과일 때만 의미가 있다.
    pub quit_code: i32,
    /// `Some(false)`만 전역 `true`를 해제한다.
    pub return_string_rather_than_print: Option<bool>,
}

impl Default for CallOverride {
    fn default() -> Self {
        Self {
            msg: None,
            exit_script: None,
            quit_code: DEFAULT_QUIT_CODE,
            return_string_rather_than_print: None,
        }
    }
}

impl CallOverride {
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }

    pub fn exit_script(mut self, exit_script: bool) -> Self {
        self.exit_script = Some(exit_script);
        self
    }

    pub fn quit_code(mut self, quit_code: i32) -> Self {
        self.quit_code = quit_code;
        self
    }

    pub fn return_string(mut self, return_string: bool) -> Self {
        self.return_string_rather_than_print = Some(return_string);
        self
    }
}

/// 설정 파일 스키마(JSON). 여러 경로를 우선순위대로 병합한다.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// 동작 플래그
    #[serde(default)]
    pub handler: BehaviorSettings,
    /// 색상/서식/시간 형식
    #[serde(default)]
    pub formatter: FormatterUpdate,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BehaviorSettings {
    /// 줄 번호 표시 여부
    pub show_line: Option<bool>,
    /// trace 포함 여부
    pub trace: Option<bool>,
    /// 타임스탬프 표시 여부
    pub use_timestamp: Option<bool>,
    /// 출력 후 프로세스 종료 여부
    pub exit_script: Option<bool>,
    /// 출력 대신 문자열 반환 여부(exit_script보다 우선)
    pub return_string_rather_than_print: Option<bool>,
}

impl Settings {
    pub fn merge_from(&mut self, other: Settings) {
        self.handler.merge_from(other.handler);
        self.formatter.merge_from(other.formatter);
    }
}

impl BehaviorSettings {
    pub fn merge_from(&mut self, other: BehaviorSettings) {
        if other.show_line.is_some() {
            self.show_line = other.show_line;
        }
        if other.trace.is_some() {
            self.trace = other.trace;
        }
        if other.use_timestamp.is_some() {
            self.use_timestamp = other.use_timestamp;
        }
        if other.exit_script.is_some() {
            self.exit_script = other.exit_script;
        }
        if other.return_string_rather_than_print.is_some() {
            self.return_string_rather_than_print = other.return_string_rather_than_print;
        }
    }
}

fn parse_color(raw: &str) -> Result<Color, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::UnknownColor(raw.to_string()))
}

fn parse_format(raw: &str) -> Result<Format, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::UnknownFormat(raw.to_string()))
}
