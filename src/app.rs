use std::io::{BufRead, Write};

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{self, Translator};
use crate::registry::PropertyRegistry;
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("conversion failed: {0}")]
    Conversion(#[from] ConversionError),
    /// 입력이 끝남 (EOF)
    #[error("input closed")]
    InputClosed,
}

/// 직전 변환 기록. 반대 방향 변환에 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastConversion {
    pub property: usize,
    pub source: usize,
    pub target: usize,
    pub result: f64,
}

/// 대화형 세션 상태.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub property: usize,
    pub last: Option<LastConversion>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            property: config.default_property,
            last: None,
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run<R: BufRead, W: Write>(
    registry: &PropertyRegistry,
    config: &Config,
    tr: &Translator,
    console: &mut Console<R, W>,
) -> Result<Session, AppError> {
    let mut session = Session::new(config);
    loop {
        let choice = match ui_cli::main_menu(tr, registry, &session, console) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        let outcome = match choice {
            MenuChoice::Convert => {
                ui_cli::handle_convert(tr, registry, config, &mut session, console)
            }
            MenuChoice::SelectProperty => {
                ui_cli::handle_select_property(tr, registry, &mut session, console)
            }
            MenuChoice::Reverse => {
                ui_cli::handle_reverse(tr, registry, config, &mut session, console)
            }
            MenuChoice::ListUnits => ui_cli::handle_list_units(tr, registry, &session, console),
            MenuChoice::Exit => {
                console.say(tr.t(i18n::keys::APP_EXIT))?;
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            // 변환 오류는 보고만 하고 메뉴로 돌아간다
            Err(AppError::Conversion(e)) => {
                tracing::debug!(error = %e, "conversion rejected");
                console.say(&describe_conversion_error(tr, &e))?;
            }
            Err(AppError::InputClosed) => {
                console.say(tr.t(i18n::keys::APP_EXIT))?;
                break;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(session)
}

/// 변환 오류를 사용자 언어로 표시할 문자열로 만든다.
fn describe_conversion_error(tr: &Translator, err: &ConversionError) -> String {
    let prefix = tr.t(i18n::keys::ERROR_PREFIX);
    match err {
        ConversionError::UnimplementedProperty { name } => {
            format!("{prefix}: {} ({name})", tr.t(i18n::keys::UNIMPLEMENTED_PROPERTY))
        }
        other => format!("{prefix}: {other}"),
    }
}
