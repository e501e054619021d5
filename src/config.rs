use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::quantity::Property;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 결과 표시 형식 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 유효숫자 개수
    pub precision: usize,
    /// 이 값보다 크면 지수 표기
    pub exponent_upper: f64,
    /// 이 값보다 작으면 지수 표기
    pub exponent_lower: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            exponent_upper: 1e3,
            exponent_lower: 1e-3,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드 (ko/en/auto). 없으면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// 대화형 모드에서 처음 선택되는 물리량 인덱스
    pub default_property: usize,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_property: Property::Length.index(),
            display: DisplayConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 돌려주고 아무것도 쓰지 않는다.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let path = resolve_path(path);
        if path.exists() {
            read_config(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// 설정 파일을 로드하거나, 없으면 기본 설정을 생성해 저장한다.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
        let path = resolve_path(path);
        if path.exists() {
            read_config(&path)
        } else {
            let cfg = Config::default();
            cfg.save_to(&path)?;
            debug!(path = %path.display(), "wrote default config");
            Ok(cfg)
        }
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 잘못된 값을 기본값으로 되돌린다.
    fn sanitized(mut self) -> Self {
        if Property::from_index(self.default_property).is_none() {
            warn!(
                default_property = self.default_property,
                "default_property out of range; using 0"
            );
            self.default_property = 0;
        }
        let d = &mut self.display;
        if !(d.exponent_lower.is_finite()
            && d.exponent_upper.is_finite()
            && d.exponent_lower >= 0.0
            && d.exponent_lower <= d.exponent_upper)
        {
            warn!(
                lower = d.exponent_lower,
                upper = d.exponent_upper,
                "invalid exponent window; using defaults"
            );
            let defaults = DisplayConfig::default();
            d.exponent_lower = defaults.exponent_lower;
            d.exponent_upper = defaults.exponent_upper;
        }
        if d.precision == 0 {
            d.precision = 1;
        }
        self
    }
}

fn resolve_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded config");
    Ok(cfg.sanitized())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("auc-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_file_writes_defaults() {
        let path = temp_path("missing.toml");
        let _ = fs::remove_file(&path);
        let cfg = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        let again = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(again, cfg);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn plain_load_never_writes() {
        let path = temp_path("readonly.toml");
        let _ = fs::remove_file(&path);
        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(!path.exists());

        fs::write(&path, "[display]\nprecision = 4\n").unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap().display.precision, 4);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_defaults_and_sanitizes() {
        let path = temp_path("partial.toml");
        fs::write(
            &path,
            "language = \"ko\"\ndefault_property = 42\n[display]\nprecision = 3\n",
        )
        .unwrap();
        let cfg = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(cfg.language.as_deref(), Some("ko"));
        assert_eq!(cfg.default_property, 0);
        assert_eq!(cfg.display.precision, 3);
        assert_eq!(cfg.display.exponent_upper, 1e3);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_path("bad.toml");
        fs::write(&path, "default_property = \"x\"").unwrap();
        assert!(matches!(
            Config::load_or_default(Some(&path)),
            Err(ConfigError::Parse(_))
        ));
        let _ = fs::remove_file(&path);
    }
}
