//! 진단 메시지 조립 모듈.
//!
//! 세그먼트 순서: 타임스탬프 -> 메시지 -> trace.
//! 각 세그먼트는 독립적으로 스타일이 적용되며 없는 세그먼트는 아무것도 남기지 않는다.

use chrono::{DateTime, Local};

use crate::application::config::{
    DEFAULT_DATETIME_FORMAT, EffectiveConfig, validate_datetime_format,
};
use crate::domain::exception::ExceptionRecord;
use crate::domain::style::styled;

/// 타임스탬프 세그먼트 뒤에 붙는 구분자(스타일 구간 밖).
pub const TIMESTAMP_SEPARATOR: &str = " > ";

/// 현재 시각 기준으로 메시지를 조립한다.
pub fn compose(effective: &EffectiveConfig, record: &ExceptionRecord, readable: &str) -> String {
    compose_at(effective, record, readable, Local::now())
}

/// 시각을 주입받아 메시지를 조립한다.
pub fn compose_at(
    effective: &EffectiveConfig,
    record: &ExceptionRecord,
    readable: &str,
    now: DateTime<Local>,
) -> String {
    let style = &effective.style;
    let mut out = String::new();

    if effective.use_timestamp {
        let stamp = format_timestamp(&style.datetime_format, now);
        out.push_str(&styled(style.timestamp_format, style.timestamp_color, &stamp));
        out.push_str(TIMESTAMP_SEPARATOR);
    }

    out.push_str(&styled(
        style.message_format,
        style.message_color,
        &message_text(effective, record, readable),
    ));

    if effective.trace {
        out.push('\n');
        out.push_str(&styled(
            style.trace_format,
            style.trace_color,
            record.trace.as_deref().unwrap_or_default(),
        ));
    }

    out
}

/// 메시지 세그먼트 본문: 문구 + 줄 번호 + 상세 정보.
pub fn message_text(effective: &EffectiveConfig, record: &ExceptionRecord, readable: &str) -> String {
    let mut text = readable.to_string();
    if effective.show_line
        && let Some(line) = record.line
    {
        text.push_str(&format!(" on line {line}"));
    }
    if let Some(msg) = effective.msg.as_deref().filter(|v| !v.is_empty()) {
        text.push_str(&format!(" in-detailed info: {msg}"));
    }
    text
}

fn format_timestamp(pattern: &str, now: DateTime<Local>) -> String {
    // 잘못된 형식은 Display 단계에서 panic을 일으키므로 미리 걸러낸다.
    if let Err(err) = validate_datetime_format(pattern) {
        tracing::warn!(%err, "falling back to default datetime format");
        return now.format(DEFAULT_DATETIME_FORMAT).to_string();
    }
    now.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::application::config::{CallOverride, GlobalConfig, resolve};
    use crate::domain::style::{Color, Format, RESET};

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 5, 17, 9, 30, 5)
            .earliest()
            .unwrap()
    }

    fn effective(global: GlobalConfig, call: CallOverride) -> EffectiveConfig {
        resolve(&global, &call)
    }

    #[test]
    fn message_only_when_optional_segments_disabled() {
        let eff = effective(GlobalConfig::default(), CallOverride::default());
        let record = ExceptionRecord::new("KeyError").with_line(3).with_trace("tb");
        let out = compose_at(&eff, &record, "Missing key,", fixed_now());

        assert_eq!(out, format!("\x1b[0m\x1b[97mMissing key,{RESET}"));
        assert!(!out.contains(TIMESTAMP_SEPARATOR));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn all_segments_in_fixed_order() {
        let mut global = GlobalConfig {
            show_line: true,
            trace: true,
            use_timestamp: true,
            ..Default::default()
        };
        global.style.timestamp_color = Color::Green;
        global.style.timestamp_format = Format::Blink;
        global.style.message_color = Color::Yellow;
        global.style.message_format = Format::Underline;
        global.style.trace_color = Color::Cyan;
        global.style.trace_format = Format::Dim;
        global.style.datetime_format = "%d-%m-%Y %H:%M:%S".to_string();

        let eff = effective(global, CallOverride::default().msg("boom"));
        let record = ExceptionRecord::new("ValueError")
            .with_line(12)
            .with_trace("Traceback line");
        let out = compose_at(&eff, &record, "Bad value,", fixed_now());

        let expected = format!(
            "\x1b[5m\x1b[92m17-05-2024 09:30:05{RESET} > \
             \x1b[4m\x1b[93mBad value, on line 12 in-detailed info: boom{RESET}\n\
             \x1b[2m\x1b[96mTraceback line{RESET}"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn line_requires_show_line_and_known_line() {
        let eff = effective(
            GlobalConfig {
                show_line: true,
                ..Default::default()
            },
            CallOverride::default(),
        );
        let without_line = ExceptionRecord::new("KeyError");
        assert_eq!(message_text(&eff, &without_line, "Missing,"), "Missing,");

        let eff = effective(GlobalConfig::default(), CallOverride::default());
        let with_line = ExceptionRecord::new("KeyError").with_line(8);
        assert_eq!(message_text(&eff, &with_line, "Missing,"), "Missing,");
    }

    #[test]
    fn every_present_segment_ends_with_reset() {
        let eff = effective(
            GlobalConfig {
                trace: true,
                use_timestamp: true,
                ..Default::default()
            },
            CallOverride::default(),
        );
        let out = compose_at(&eff, &ExceptionRecord::new("X"), "phrase", fixed_now());

        let (timestamp, rest) = out.split_once(TIMESTAMP_SEPARATOR).unwrap();
        let (message, trace) = rest.split_once('\n').unwrap();
        for segment in [timestamp, message, trace] {
            assert!(segment.ends_with(RESET), "segment {segment:?}");
        }
    }

    #[test]
    fn invalid_datetime_format_falls_back_to_default() {
        let mut global = GlobalConfig {
            use_timestamp: true,
            ..Default::default()
        };
        global.style.datetime_format = "%Q".to_string();
        let eff = effective(global, CallOverride::default());
        let out = compose_at(&eff, &ExceptionRecord::new("X"), "p", fixed_now());
        assert!(out.contains("2024-05-17 09:30:05"));
    }
}
