//! 전역 설정과 호출 단위 재정의를 하나의 적용 설정으로 해석한다.

use chrono::format::{Item, StrftimeItems};
use serde::Serialize;

use super::{CallOverride, GlobalConfig, StyleConfig};
use crate::application::error::ConfigError;
use crate::domain::policy::{Outcome, decide_outcome};

/// 한 번의 진단 호출에 쓰이는 최종 설정. 미지정 상태가 남지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    pub show_line: bool,
    pub trace: bool,
    pub use_timestamp: bool,
    pub exit_script: bool,
    pub return_string_rather_than_print: bool,
    pub quit_code: i32,
    pub msg: Option<String>,
    pub style: StyleConfig,
}

impl EffectiveConfig {
    /// 세 가지 결과 중 하나를 결정한다.
    pub fn outcome(&self) -> Outcome {
        decide_outcome(
            self.return_string_rather_than_print,
            self.exit_script,
            self.quit_code,
        )
    }
}

/// 필드별로 재정의 값이 있으면 그 값을, 없으면 전역 값을 사용한다.
/// `return_string_rather_than_print`는 전역 `true`가 유지되다가
/// 호출에서 명시적으로 `Some(false)`를 줄 때만 해제된다.
pub fn resolve(global: &GlobalConfig, call: &CallOverride) -> EffectiveConfig {
    let effective = EffectiveConfig {
        show_line: global.show_line,
        trace: global.trace,
        use_timestamp: global.use_timestamp,
        exit_script: call.exit_script.unwrap_or(global.exit_script),
        return_string_rather_than_print: call
            .return_string_rather_than_print
            .unwrap_or(global.return_string_rather_than_print),
        quit_code: call.quit_code,
        msg: call.msg.clone().filter(|v| !v.is_empty()),
        style: global.style.clone(),
    };

    tracing::debug!(
        exit_script = effective.exit_script,
        return_string = effective.return_string_rather_than_print,
        quit_code = effective.quit_code,
        "resolved handler settings"
    );
    effective
}

/// strftime 형식 문자열을 검증한다.
pub fn validate_datetime_format(pattern: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidDatetimeFormat(pattern.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::Color;

    fn global(exit_script: bool, return_string: bool) -> GlobalConfig {
        GlobalConfig {
            exit_script,
            return_string_rather_than_print: return_string,
            ..Default::default()
        }
    }

    #[test]
    fn absent_override_fields_inherit_global() {
        for exit_script in [false, true] {
            for return_string in [false, true] {
                let g = global(exit_script, return_string);
                let effective = resolve(&g, &CallOverride::default());
                assert_eq!(effective.exit_script, exit_script);
                assert_eq!(effective.return_string_rather_than_print, return_string);
                assert_eq!(effective.quit_code, 1);
                assert_eq!(effective.msg, None);
            }
        }
    }

    #[test]
    fn provided_override_fields_win() {
        for global_value in [false, true] {
            for call_value in [false, true] {
                let g = global(global_value, global_value);
                let call = CallOverride::default()
                    .exit_script(call_value)
                    .return_string(call_value)
                    .quit_code(9)
                    .msg("detail");
                let effective = resolve(&g, &call);
                assert_eq!(effective.exit_script, call_value);
                assert_eq!(effective.return_string_rather_than_print, call_value);
                assert_eq!(effective.quit_code, 9);
                assert_eq!(effective.msg.as_deref(), Some("detail"));
            }
        }
    }

    #[test]
    fn behaviour_and_style_fields_come_from_global() {
        let mut g = GlobalConfig {
            show_line: true,
            trace: true,
            use_timestamp: true,
            ..Default::default()
        };
        g.style.main_color = Color::Blue;
        let effective = resolve(&g, &CallOverride::default());
        assert!(effective.show_line);
        assert!(effective.trace);
        assert!(effective.use_timestamp);
        assert_eq!(effective.style, g.style);
    }

    #[test]
    fn empty_msg_counts_as_absent() {
        let effective = resolve(&GlobalConfig::default(), &CallOverride::default().msg(""));
        assert_eq!(effective.msg, None);
    }

    #[test]
    fn sticky_return_string_ignores_exit_unless_explicitly_false() {
        for global_exit in [false, true] {
            for call_exit in [None, Some(false), Some(true)] {
                let g = global(global_exit, true);
                let call = CallOverride {
                    exit_script: call_exit,
                    ..Default::default()
                };
                assert_eq!(resolve(&g, &call).outcome(), Outcome::ReturnString);
            }
        }

        let g = global(false, true);
        let call = CallOverride::default().return_string(false).exit_script(true);
        assert_eq!(
            resolve(&g, &call).outcome(),
            Outcome::PrintAndTerminate { quit_code: 1 }
        );
        let call = CallOverride::default().return_string(false);
        assert_eq!(resolve(&g, &call).outcome(), Outcome::PrintAndContinue);
    }

    #[test]
    fn datetime_format_validation() {
        assert!(validate_datetime_format("%Y-%m-%d %H:%M:%S").is_ok());
        assert!(validate_datetime_format("plain text").is_ok());
        assert_eq!(
            validate_datetime_format("%Q"),
            Err(ConfigError::InvalidDatetimeFormat("%Q".to_string()))
        );
    }
}
