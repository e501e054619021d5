use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_PROPERTY: &str = "main_menu.property";
    pub const MAIN_MENU_REVERSE: &str = "main_menu.reverse";
    pub const MAIN_MENU_LIST_UNITS: &str = "main_menu.list_units";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CURRENT_PROPERTY: &str = "conversion.current_property";
    pub const PROPERTY_HEADING: &str = "conversion.property_heading";
    pub const UNITS_HEADING: &str = "conversion.units_heading";
    pub const PROMPT_PROPERTY: &str = "prompt.property";
    pub const PROMPT_SOURCE_UNIT: &str = "prompt.source_unit";
    pub const PROMPT_TARGET_UNIT: &str = "prompt.target_unit";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const RESULT: &str = "conversion.result";
    pub const NO_PREVIOUS_CONVERSION: &str = "conversion.no_previous";
    pub const UNIMPLEMENTED_PROPERTY: &str = "conversion.unimplemented_property";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const HELP_CONVERSION: &str = "help.conversion";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)).unwrap_or("[missing translation]"),
            Language::En => en(key).unwrap_or("[missing translation]"),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: `[section] key = "value"`.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 원자 단위 변환기 ===",
        MAIN_MENU_CONVERT => "1) 값 변환",
        MAIN_MENU_PROPERTY => "2) 물리량 선택",
        MAIN_MENU_REVERSE => "3) 직전 변환 반대 방향으로",
        MAIN_MENU_LIST_UNITS => "4) 단위 목록 보기",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CURRENT_PROPERTY => "현재 물리량:",
        PROPERTY_HEADING => "\n-- 물리량 --",
        UNITS_HEADING => "\n-- 단위 목록 --",
        PROMPT_PROPERTY => "물리량 번호: ",
        PROMPT_SOURCE_UNIT => "입력 단위 번호: ",
        PROMPT_TARGET_UNIT => "변환 단위 번호: ",
        PROMPT_VALUE => "값 입력: ",
        RESULT => "변환 결과:",
        NO_PREVIOUS_CONVERSION => "아직 변환한 값이 없습니다.",
        UNIMPLEMENTED_PROPERTY => "이 물리량은 아직 단위가 준비되지 않았습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HELP_CONVERSION => "도움말: 단위 번호 → 값 순으로 입력합니다. 에너지↔파장, 세기↔강도는 비선형 변환입니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Atomic Unit Converter ===",
        MAIN_MENU_CONVERT => "1) Convert a value",
        MAIN_MENU_PROPERTY => "2) Choose property",
        MAIN_MENU_REVERSE => "3) Reverse last conversion",
        MAIN_MENU_LIST_UNITS => "4) List units",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CURRENT_PROPERTY => "Current property:",
        PROPERTY_HEADING => "\n-- Properties --",
        UNITS_HEADING => "\n-- Units --",
        PROMPT_PROPERTY => "Property number: ",
        PROMPT_SOURCE_UNIT => "From unit number: ",
        PROMPT_TARGET_UNIT => "To unit number: ",
        PROMPT_VALUE => "Value: ",
        RESULT => "Result:",
        NO_PREVIOUS_CONVERSION => "Nothing converted yet.",
        UNIMPLEMENTED_PROPERTY => "This property has no units yet.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HELP_CONVERSION => "Help: pick unit numbers, then a value. Energy↔wavelength and strength↔intensity are non-linear.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko-KR"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }

    #[test]
    fn every_english_key_has_korean() {
        let tr = Translator::new("ko");
        for key in [keys::APP_EXIT, keys::RESULT, keys::HELP_CONVERSION] {
            assert_ne!(tr.t(key), Translator::new("en").t(key));
        }
        assert_eq!(tr.language(), Language::Ko);
    }

    #[test]
    fn unknown_key_is_marked() {
        assert_eq!(Translator::new("en").t("nope"), "[missing translation]");
    }

    #[test]
    fn pack_overrides_builtin_strings() {
        let dir = std::env::temp_dir().join(format!("auc-locales-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("en.toml"), "[conversion]\nresult = \"=>\"\n").unwrap();
        let tr = Translator::new_with_pack("en", Some(&dir));
        assert_eq!(tr.t(keys::RESULT), "=>");
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
        let _ = fs::remove_dir_all(&dir);
    }
}
