use std::io::{BufRead, Write};

use crate::app::{AppError, LastConversion, Session};
use crate::config::Config;
use crate::conversion::{format_result, parse_value};
use crate::i18n::{keys, Translator};
use crate::registry::PropertyRegistry;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    SelectProperty,
    Reverse,
    ListUnits,
    Exit,
}

/// 입출력 스트림 묶음. 테스트에서는 메모리 버퍼를 넣는다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    /// 1부터 시작하는 번호를 읽어 0 기반 인덱스로 돌려준다.
    fn read_index(&mut self, tr: &Translator, prompt: &str, len: usize) -> Result<usize, AppError> {
        loop {
            let s = self.read_line(prompt)?;
            match s.parse::<usize>() {
                Ok(n) if (1..=len).contains(&n) => return Ok(n - 1),
                _ => self.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
            }
        }
    }

    fn read_value(&mut self, tr: &Translator, prompt: &str) -> Result<f64, AppError> {
        loop {
            let s = self.read_line(prompt)?;
            match parse_value(&s) {
                Ok(v) => return Ok(v),
                Err(_) => self.say(tr.t(keys::ERROR_INVALID_NUMBER))?,
            }
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(
    tr: &Translator,
    registry: &PropertyRegistry,
    session: &Session,
    console: &mut Console<R, W>,
) -> Result<MenuChoice, AppError> {
    console.say(tr.t(keys::MAIN_MENU_TITLE))?;
    let names = registry.property_names();
    if let Some(name) = names.get(session.property) {
        console.say(&format!("{} {name}", tr.t(keys::CURRENT_PROPERTY)))?;
    }
    for key in [
        keys::MAIN_MENU_CONVERT,
        keys::MAIN_MENU_PROPERTY,
        keys::MAIN_MENU_REVERSE,
        keys::MAIN_MENU_LIST_UNITS,
        keys::MAIN_MENU_EXIT,
    ] {
        console.say(tr.t(key))?;
    }
    loop {
        let sel = console.read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.as_str() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::SelectProperty),
            "3" => return Ok(MenuChoice::Reverse),
            "4" => return Ok(MenuChoice::ListUnits),
            "0" => return Ok(MenuChoice::Exit),
            _ => console.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 물리량 선택 메뉴를 처리한다. 단위가 없는 물리량은 거부한다.
pub fn handle_select_property<R: BufRead, W: Write>(
    tr: &Translator,
    registry: &PropertyRegistry,
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say(tr.t(keys::PROPERTY_HEADING))?;
    let names = registry.property_names();
    print_numbered(console, &names)?;
    let index = console.read_index(tr, tr.t(keys::PROMPT_PROPERTY), names.len())?;
    registry.table_for_property(index)?;
    session.property = index;
    session.last = None;
    Ok(())
}

/// 현재 물리량의 단위 목록을 출력한다.
pub fn handle_list_units<R: BufRead, W: Write>(
    tr: &Translator,
    registry: &PropertyRegistry,
    session: &Session,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say(tr.t(keys::UNITS_HEADING))?;
    let labels = registry.labels_for_property(session.property)?;
    print_numbered(console, &labels)
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_convert<R: BufRead, W: Write>(
    tr: &Translator,
    registry: &PropertyRegistry,
    config: &Config,
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say(tr.t(keys::HELP_CONVERSION))?;
    let labels = registry.labels_for_property(session.property)?;
    print_numbered(console, &labels)?;
    let source = console.read_index(tr, tr.t(keys::PROMPT_SOURCE_UNIT), labels.len())?;
    let target = console.read_index(tr, tr.t(keys::PROMPT_TARGET_UNIT), labels.len())?;
    let value = console.read_value(tr, tr.t(keys::PROMPT_VALUE))?;
    convert_and_report(tr, registry, config, session, console, source, target, value)
}

/// 직전 변환의 대상 단위에서 원래 단위 쪽으로 값을 변환한다.
pub fn handle_reverse<R: BufRead, W: Write>(
    tr: &Translator,
    registry: &PropertyRegistry,
    config: &Config,
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let Some(last) = session.last else {
        return console.say(tr.t(keys::NO_PREVIOUS_CONVERSION));
    };
    let labels = registry.labels_for_property(last.property)?;
    let prompt = format!(
        "{} [{}]: ",
        tr.t(keys::PROMPT_VALUE).trim_end().trim_end_matches(':'),
        labels[last.target]
    );
    let value = console.read_value(tr, &prompt)?;
    convert_and_report(
        tr,
        registry,
        config,
        session,
        console,
        last.target,
        last.source,
        value,
    )
}

#[allow(clippy::too_many_arguments)]
fn convert_and_report<R: BufRead, W: Write>(
    tr: &Translator,
    registry: &PropertyRegistry,
    config: &Config,
    session: &mut Session,
    console: &mut Console<R, W>,
    source: usize,
    target: usize,
    value: f64,
) -> Result<(), AppError> {
    let labels = registry.labels_for_property(session.property)?;
    let result = registry.convert(session.property, source, target, value)?;
    console.say(&format!(
        "{} {} {} = {} {}",
        tr.t(keys::RESULT),
        format_result(value, &config.display),
        labels[source],
        format_result(result, &config.display),
        labels[target]
    ))?;
    session.last = Some(LastConversion {
        property: session.property,
        source,
        target,
        result,
    });
    Ok(())
}

fn print_numbered<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    items: &[String],
) -> Result<(), AppError> {
    for (i, item) in items.iter().enumerate() {
        console.say(&format!("{}) {item}", i + 1))?;
    }
    Ok(())
}
