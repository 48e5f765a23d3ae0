//! 로그 레벨별 색상/기호로 메시지를 출력하는 콘솔 프린터 어댑터.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use chrono::Local;
use unicode_width::UnicodeWidthStr;

use crate::application::error::ConfigError;
use crate::application::ports::Sink;
use crate::domain::style::{Color, Format, RESET};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 출력 레벨.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warning,
    Error,
    Debug,
    Input,
    Critical,
    Success,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Debug,
        Self::Input,
        Self::Critical,
        Self::Success,
    ];

    /// 색상 스킴 키.
    pub fn key(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::Input => "input",
            Self::Critical => "critical",
            Self::Success => "success",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Info => "*",
            Self::Warning => "!",
            Self::Error | Self::Critical => "x",
            Self::Debug => "-",
            Self::Input => "?",
            Self::Success => "✓",
        }
    }

    pub fn default_color(self) -> Color {
        match self {
            Self::Info => Color::White,
            Self::Warning => Color::Yellow,
            Self::Error | Self::Critical => Color::Red,
            Self::Debug => Color::Cyan,
            Self::Input | Self::Success => Color::Green,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.key() == key)
    }
}

/// 레벨 기반 콘솔 프린터.
/// - debug 레벨은 debug 모드에서만 출력한다.
/// - 여러 줄 메시지는 첫 줄 본문 시작 위치에 맞춰 들여쓴다.
pub struct LevelPrinter {
    scheme: BTreeMap<Level, Color>,
    debug_mode: bool,
    use_timestamps: bool,
    sink_level: Level,
    out: Mutex<Box<dyn Write + Send>>,
}

impl Default for LevelPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelPrinter {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// 출력 대상을 외부에서 주입한다.
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            scheme: Level::ALL
                .into_iter()
                .map(|level| (level, level.default_color()))
                .collect(),
            debug_mode: false,
            use_timestamps: false,
            sink_level: Level::Error,
            out: Mutex::new(out),
        }
    }

    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    pub fn use_timestamps(mut self, enabled: bool) -> Self {
        self.use_timestamps = enabled;
        self
    }

    /// `Sink`로 사용될 때의 출력 레벨(기본 error).
    pub fn sink_level(mut self, level: Level) -> Self {
        self.sink_level = level;
        self
    }

    /// 기본 스킴 위에 사용자 스킴을 덮어쓴다.
    pub fn color_scheme<'a, I>(mut self, scheme: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, Color)>,
    {
        self.set_color_scheme(scheme)?;
        Ok(self)
    }

    /// 알 수 없는 레벨 키가 하나라도 있으면 아무것도 바꾸지 않고 오류를 반환한다.
    pub fn set_color_scheme<'a, I>(&mut self, scheme: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (&'a str, Color)>,
    {
        let mut updates = Vec::new();
        let mut unknown = Vec::new();
        for (key, color) in scheme {
            match Level::from_key(key) {
                Some(level) => updates.push((level, color)),
                None => unknown.push(key.to_string()),
            }
        }

        if !unknown.is_empty() {
            unknown.sort();
            unknown.dedup();
            return Err(ConfigError::UnknownLevel(unknown));
        }

        self.scheme.extend(updates);
        Ok(())
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug_mode = enabled;
    }

    pub fn set_timestamp_usage(&mut self, enabled: bool) {
        self.use_timestamps = enabled;
    }

    pub fn color_for(&self, level: Level) -> Color {
        self.scheme
            .get(&level)
            .copied()
            .unwrap_or_else(|| level.default_color())
    }

    pub fn info(&self, message: &str, style: Option<Format>) {
        self.print(Level::Info, message, style);
    }

    pub fn warning(&self, message: &str, style: Option<Format>) {
        self.print(Level::Warning, message, style);
    }

    pub fn error(&self, message: &str, style: Option<Format>) {
        self.print(Level::Error, message, style);
    }

    pub fn debug(&self, message: &str, style: Option<Format>) {
        self.print(Level::Debug, message, style);
    }

    pub fn critical(&self, message: &str, style: Option<Format>) {
        self.print(Level::Critical, message, style);
    }

    pub fn success(&self, message: &str, style: Option<Format>) {
        self.print(Level::Success, message, style);
    }

    /// 프롬프트를 출력하고 stdin에서 한 줄을 읽는다(개행 제외).
    pub fn input(&self, message: &str) -> io::Result<String> {
        self.input_from(message, &mut io::stdin().lock())
    }

    /// `input`과 같지만 주어진 reader에서 읽는다.
    pub fn input_from<R: BufRead>(&self, message: &str, reader: &mut R) -> io::Result<String> {
        {
            let mut out = self.lock_out();
            write!(out, "{}[{}] {message}: {RESET}", self.color_for(Level::Input), Level::Input.symbol())?;
            out.flush()?;
        }
        let mut line = String::new();
        reader.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// 레벨 규칙에 따라 한 건을 출력한다.
    pub fn print(&self, level: Level, message: &str, style: Option<Format>) {
        let timestamp = self
            .use_timestamps
            .then(|| Local::now().format(TIMESTAMP_FORMAT).to_string());
        let Some(line) = self.render(level, message, style, timestamp.as_deref()) else {
            return;
        };

        let mut out = self.lock_out();
        if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            tracing::warn!(%err, level = level.key(), "failed to print message");
        }
    }

    /// 출력할 한 건을 문자열로 만든다. debug 모드가 아니면 debug 레벨은 `None`.
    pub fn render(
        &self,
        level: Level,
        message: &str,
        style: Option<Format>,
        timestamp: Option<&str>,
    ) -> Option<String> {
        if level == Level::Debug && !self.debug_mode {
            return None;
        }

        let prefix = match timestamp {
            Some(ts) => format!("[{}] [{ts}] ", level.symbol()),
            None => format!("[{}] ", level.symbol()),
        };
        let indent = " ".repeat(UnicodeWidthStr::width(prefix.as_str()));

        let mut body = String::new();
        for (idx, line) in message.split('\n').enumerate() {
            if idx > 0 {
                body.push('\n');
                body.push_str(&indent);
            }
            body.push_str(line);
        }

        let style = style.map(Format::token).unwrap_or_default();
        Some(format!(
            "{}{prefix}{style}{body}{RESET}",
            self.color_for(level)
        ))
    }

    fn lock_out(&self) -> std::sync::MutexGuard<'_, Box<dyn Write + Send>> {
        // 다른 스레드의 panic으로 잠금이 오염되어도 출력은 계속한다.
        self.out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Sink for LevelPrinter {
    fn write(&self, message: &str) {
        self.print(self.sink_level, message, None);
    }
}

/// 섹션 구분용 배너 문자열.
pub fn separator(title: &str) -> String {
    format!(
        "\n{}{}--- {title} ---{RESET}\n",
        Format::Bold.token(),
        Color::Magenta.token()
    )
}
