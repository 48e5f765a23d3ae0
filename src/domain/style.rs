//! 터미널 스타일 토큰(색상/서식)과 세그먼트 조합 규칙.
//!
//! 토큰은 불투명한 ANSI 접두 문자열로만 취급한다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 모든 스타일 구간 끝에 붙는 리셋 토큰.
pub const RESET: &str = "\x1b[0m";

/// 전경/배경 색상 토큰.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    White,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightWhite,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BgWhite,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
}

/// 텍스트 서식 토큰.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Normal,
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reversed,
    Strikethrough,
}

impl Color {
    pub const ALL: [Color; 24] = [
        Self::White,
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::BrightWhite,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BgWhite,
        Self::BgBlack,
        Self::BgRed,
        Self::BgGreen,
        Self::BgYellow,
        Self::BgBlue,
        Self::BgMagenta,
        Self::BgCyan,
    ];

    /// ANSI 접두 문자열.
    pub fn token(self) -> &'static str {
        match self {
            Self::White => "\x1b[97m",
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[91m",
            Self::Green => "\x1b[92m",
            Self::Yellow => "\x1b[93m",
            Self::Blue => "\x1b[94m",
            Self::Magenta => "\x1b[95m",
            Self::Cyan => "\x1b[96m",
            Self::BrightWhite => "\x1b[97;1m",
            Self::BrightBlack => "\x1b[30;1m",
            Self::BrightRed => "\x1b[91;1m",
            Self::BrightGreen => "\x1b[92;1m",
            Self::BrightYellow => "\x1b[93;1m",
            Self::BrightBlue => "\x1b[94;1m",
            Self::BrightMagenta => "\x1b[95;1m",
            Self::BrightCyan => "\x1b[96;1m",
            Self::BgWhite => "\x1b[47m",
            Self::BgBlack => "\x1b[40m",
            Self::BgRed => "\x1b[41m",
            Self::BgGreen => "\x1b[42m",
            Self::BgYellow => "\x1b[43m",
            Self::BgBlue => "\x1b[44m",
            Self::BgMagenta => "\x1b[45m",
            Self::BgCyan => "\x1b[46m",
        }
    }

    /// 설정/CLI 표기용 이름(snake_case).
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::BrightWhite => "bright_white",
            Self::BrightBlack => "bright_black",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightMagenta => "bright_magenta",
            Self::BrightCyan => "bright_cyan",
            Self::BgWhite => "bg_white",
            Self::BgBlack => "bg_black",
            Self::BgRed => "bg_red",
            Self::BgGreen => "bg_green",
            Self::BgYellow => "bg_yellow",
            Self::BgBlue => "bg_blue",
            Self::BgMagenta => "bg_magenta",
            Self::BgCyan => "bg_cyan",
        }
    }
}

impl Format {
    pub const ALL: [Format; 8] = [
        Self::Normal,
        Self::Bold,
        Self::Dim,
        Self::Italic,
        Self::Underline,
        Self::Blink,
        Self::Reversed,
        Self::Strikethrough,
    ];

    /// ANSI 접두 문자열.
    pub fn token(self) -> &'static str {
        match self {
            Self::Normal => "\x1b[0m",
            Self::Bold => "\x1b[1m",
            Self::Dim => "\x1b[2m",
            Self::Italic => "\x1b[3m",
            Self::Underline => "\x1b[4m",
            Self::Blink => "\x1b[5m",
            Self::Reversed => "\x1b[7m",
            Self::Strikethrough => "\x1b[9m",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Reversed => "reversed",
            Self::Strikethrough => "strikethrough",
        }
    }
}

/// 알 수 없는 토큰 이름. 호출 측에서 구체 오류로 변환한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken(pub String);

impl FromStr for Color {
    type Err = UnknownToken;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_name(raw);
        Self::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| UnknownToken(raw.to_string()))
    }
}

impl FromStr for Format {
    type Err = UnknownToken;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_name(raw);
        Self::ALL
            .into_iter()
            .find(|f| f.name() == normalized)
            .ok_or_else(|| UnknownToken(raw.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// `format + color + text + RESET` 형태의 스타일 구간을 만든다.
pub fn styled(format: Format, color: Color, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(format.token());
    out.push_str(color.token());
    out.push_str(text);
    out.push_str(RESET);
    out
}

// "Bright-Red", "bright red" 같은 표기도 허용한다.
fn normalize_name(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}
