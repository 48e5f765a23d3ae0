//! panic hook 경로 테스트. hook은 프로세스 전역이므로 별도 테스트 바이너리에 둔다.

use std::panic;
use std::sync::{Arc, Mutex};

use exhandler::{CallOverride, ExitHandler, GlobalConfig, Handler, Sink, install_panic_hook};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Sink for Recorder {
    fn write(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

struct NoExit;

impl ExitHandler for NoExit {
    fn exit(&self, _code: i32) {}
}

#[test]
fn panics_are_reported_through_the_sink() {
    let recorder = Recorder::default();
    let handler = Handler::new(
        GlobalConfig {
            show_line: true,
            trace: true,
            ..Default::default()
        },
        Box::new(recorder.clone()),
        Box::new(NoExit),
    );
    install_panic_hook(Arc::new(handler), CallOverride::default().msg("worker"));

    let result = panic::catch_unwind(|| {
        panic!("boom");
    });
    let _ = panic::take_hook();

    assert!(result.is_err());
    let lines = recorder.0.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("The program panicked, on line"));
    assert!(lines[0].contains("in-detailed info: worker"));
    assert!(lines[0].contains("boom"));
    assert!(lines[0].contains("panic_hook.rs"));
}
