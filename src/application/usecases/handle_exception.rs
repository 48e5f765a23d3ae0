//! 예외 하나를 진단 메시지로 바꾸고 결과(반환/출력/종료)를 실행하는 유스케이스.

use std::sync::Arc;

use crate::application::compose::compose;
use crate::application::config::{
    CallOverride, EffectiveConfig, FormatterUpdate, GlobalConfig, resolve,
    validate_datetime_format,
};
use crate::application::error::ConfigError;
use crate::application::ports::{ExitHandler, Sink};
use crate::domain::classify::classify;
use crate::domain::exception::ExceptionRecord;
use crate::domain::policy::Outcome;

/// 전역 설정과 출력/종료 포트를 소유하는 예외 핸들러.
pub struct Handler {
    config: GlobalConfig,
    sink: Box<dyn Sink>,
    exit_handler: Box<dyn ExitHandler>,
}

impl Handler {
    /// 출력/종료 포트를 외부에서 주입한다.
    pub fn new(config: GlobalConfig, sink: Box<dyn Sink>, exit_handler: Box<dyn ExitHandler>) -> Self {
        Self {
            config,
            sink,
            exit_handler,
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 색상/서식/시간 형식을 재설정한다. 동작 플래그는 바뀌지 않는다.
    pub fn formatter(&mut self, update: FormatterUpdate) -> Result<(), ConfigError> {
        if let Some(datetime_format) = update.datetime_format.as_deref() {
            validate_datetime_format(datetime_format)?;
        }
        self.config.style.apply(&update);
        Ok(())
    }

    /// 이름/값 쌍으로 재설정한다. 한 번의 호출로 취급된다.
    pub fn formatter_pairs<'a, I>(&mut self, pairs: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let update = FormatterUpdate::from_pairs(pairs)?;
        self.formatter(update)
    }

    /// 호출 단위 설정을 해석한다.
    pub fn effective(&self, call: &CallOverride) -> EffectiveConfig {
        resolve(&self.config, call)
    }

    /// 진단 메시지를 조립해 결과를 실행한다.
    /// - `ReturnString`: 메시지를 반환한다.
    /// - `PrintAndContinue`: sink로 출력하고 `None`을 반환한다.
    /// - `PrintAndTerminate`: sink로 출력한 뒤 종료 포트를 호출한다.
    pub fn exception(&self, record: &ExceptionRecord, call: CallOverride) -> Option<String> {
        let effective = self.effective(&call);
        let readable = classify(&record.type_identity);
        let message = compose(&effective, record, &readable);

        let outcome = effective.outcome();
        tracing::debug!(
            identity = %record.type_identity,
            ?outcome,
            "handled exception"
        );

        match outcome {
            Outcome::ReturnString => Some(message),
            Outcome::PrintAndContinue => {
                self.sink.write(&message);
                None
            }
            Outcome::PrintAndTerminate { quit_code } => {
                self.sink.write(&message);
                self.exit_handler.exit(quit_code);
                None
            }
        }
    }

    /// `Result`의 오류를 처리하고 값은 그대로 돌려준다.
    /// 오류일 때는 호출 위치의 줄 번호가 기록된다.
    #[track_caller]
    pub fn handle<T, E>(&self, result: Result<T, E>, call: CallOverride) -> Result<T, Option<String>>
    where
        E: std::error::Error + 'static,
    {
        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                let record = ExceptionRecord::from_error(&err);
                Err(self.exception(&record, call))
            }
        }
    }
}

/// panic을 진단 메시지로 보고하는 hook을 설치한다.
/// 반환 결과(`ReturnString`)인 경우에는 stderr로 출력한다.
pub fn install_panic_hook(handler: Arc<Handler>, call: CallOverride) {
    std::panic::set_hook(Box::new(move |info| {
        let record = ExceptionRecord::from_panic(info);
        if let Some(message) = handler.exception(&record, call.clone()) {
            eprintln!("{message}");
        }
    }));
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::style::{Color, RESET};

    #[derive(Clone, Default)]
    struct Recorder {
        lines: Arc<Mutex<Vec<String>>>,
        exits: Arc<Mutex<Vec<i32>>>,
    }

    impl Sink for Recorder {
        fn write(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    impl ExitHandler for Recorder {
        fn exit(&self, code: i32) {
            self.exits.lock().unwrap().push(code);
        }
    }

    fn handler(config: GlobalConfig) -> (Handler, Recorder) {
        let recorder = Recorder::default();
        let handler = Handler::new(
            config,
            Box::new(recorder.clone()),
            Box::new(recorder.clone()),
        );
        (handler, recorder)
    }

    #[test]
    fn print_and_continue_writes_to_sink_once() {
        let (handler, recorder) = handler(GlobalConfig::default());
        let out = handler.exception(&ExceptionRecord::new("KeyError"), CallOverride::default());

        assert_eq!(out, None);
        let lines = recorder.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("The requested key was not found,"));
        assert!(recorder.exits.lock().unwrap().is_empty());
    }

    #[test]
    fn terminate_writes_then_exits_with_quit_code() {
        let (handler, recorder) = handler(GlobalConfig {
            exit_script: true,
            ..Default::default()
        });
        let out = handler.exception(
            &ExceptionRecord::new("KeyError"),
            CallOverride::default().quit_code(4),
        );

        assert_eq!(out, None);
        assert_eq!(recorder.lines.lock().unwrap().len(), 1);
        assert_eq!(*recorder.exits.lock().unwrap(), vec![4]);
    }

    #[test]
    fn return_string_skips_sink_and_exit() {
        let (handler, recorder) = handler(GlobalConfig {
            exit_script: true,
            return_string_rather_than_print: true,
            ..Default::default()
        });
        let out = handler
            .exception(&ExceptionRecord::new("FooBarError"), CallOverride::default())
            .unwrap();

        assert!(out.contains("Foo Bar Error occurred [Unknown Exception for handler],"));
        assert!(out.ends_with(RESET));
        assert!(recorder.lines.lock().unwrap().is_empty());
        assert!(recorder.exits.lock().unwrap().is_empty());
    }

    #[test]
    fn formatter_changes_style_but_not_flags() {
        let (mut handler, _) = handler(GlobalConfig {
            show_line: true,
            ..Default::default()
        });
        handler
            .formatter_pairs([("main_color", "magenta")])
            .unwrap();

        assert!(handler.config().show_line);
        assert_eq!(handler.config().style.message_color, Color::Magenta);
    }

    #[test]
    fn formatter_rejects_bad_input_without_partial_apply() {
        let (mut handler, _) = handler(GlobalConfig::default());
        let before = handler.config().clone();

        assert_eq!(
            handler.formatter_pairs([("main_color", "red"), ("shadow", "x")]),
            Err(ConfigError::UnknownField("shadow".to_string()))
        );
        assert!(matches!(
            handler.formatter(FormatterUpdate {
                main_color: Some(Color::Red),
                datetime_format: Some("%".to_string()),
                ..Default::default()
            }),
            Err(ConfigError::InvalidDatetimeFormat(_))
        ));
        assert_eq!(handler.config(), &before);
    }

    #[test]
    fn handle_passes_ok_values_through() {
        let (handler, recorder) = handler(GlobalConfig::default());
        let ok: Result<i32, std::num::ParseIntError> = "12".parse();
        assert_eq!(handler.handle(ok, CallOverride::default()), Ok(12));
        assert!(recorder.lines.lock().unwrap().is_empty());
    }

    #[test]
    fn handle_records_caller_line_for_errors() {
        let (handler, _) = handler(GlobalConfig {
            show_line: true,
            return_string_rather_than_print: true,
            ..Default::default()
        });
        let err: Result<i32, std::num::ParseIntError> = "x".parse();
        let line = line!() + 1;
        let out = handler.handle(err, CallOverride::default()).unwrap_err().unwrap();

        assert!(out.contains("The text could not be parsed as an integer,"));
        assert!(out.contains(&format!("on line {line}")));
    }

    #[test]
    fn handle_classifies_boxed_errors_by_inner_type() {
        let (handler, _) = handler(GlobalConfig {
            return_string_rather_than_print: true,
            ..Default::default()
        });
        let err: Result<i32, Box<std::num::ParseIntError>> = "x".parse::<i32>().map_err(Box::new);
        let out = handler.handle(err, CallOverride::default()).unwrap_err().unwrap();

        assert!(out.contains("The text could not be parsed as an integer,"));
        assert!(!out.contains("Unknown Exception"));
    }
}
