//! 애플리케이션 조립(composition root) 모듈.

use crate::application::config::GlobalConfig;
use crate::application::ports::Sink;
use crate::application::usecases::handle_exception::Handler;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::load_config::LoadConfigUseCase;
use crate::infrastructure::adapters::{
    ConsoleSink, JsonSettingsRepository, LevelPrinter, ProcessExit,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
#[derive(Default)]
pub struct AppComposition {
    settings_repo: JsonSettingsRepository,
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            settings_repo: &self.settings_repo,
        }
    }

    /// 설정 로딩 유스케이스를 생성한다.
    pub fn load_config_usecase(&self) -> LoadConfigUseCase<'_> {
        LoadConfigUseCase {
            settings_repo: &self.settings_repo,
        }
    }

    /// 실제 콘솔/프로세스 종료 어댑터로 핸들러를 만든다.
    pub fn handler(&self, config: GlobalConfig, level_printer: bool) -> Handler {
        let sink: Box<dyn Sink> = if level_printer {
            Box::new(LevelPrinter::new())
        } else {
            Box::new(ConsoleSink)
        };
        Handler::new(config, sink, Box::new(ProcessExit))
    }
}
