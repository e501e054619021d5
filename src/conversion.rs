use thiserror::Error;

use crate::config::DisplayConfig;
use crate::units::{ConversionStrategy, UnitKind};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 표 범위를 벗어난 단위 인덱스
    #[error("unit index {index} is out of range (table has {len} units)")]
    IndexOutOfRange { index: usize, len: usize },
    /// 범위를 벗어난 물리량 인덱스
    #[error("property index {index} is out of range ({len} properties)")]
    UnknownProperty { index: usize, len: usize },
    /// 숫자가 아니거나 유한한 결과를 낼 수 없는 입력
    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: &'static str },
    /// 단위가 정의되지 않은 물리량
    #[error("property '{name}' has no units yet")]
    UnimplementedProperty { name: String },
    /// 유한한 양수가 아닌 환산 계수
    #[error("unit '{label}' has invalid factor {factor}; factors must be finite and positive")]
    InvalidFactor { label: String, factor: f64 },
    /// 표의 변환 전략과 맞지 않는 단위 종류
    #[error("unit '{label}' of kind {kind:?} does not belong in a {strategy:?} table")]
    KindMismatch {
        label: String,
        kind: UnitKind,
        strategy: ConversionStrategy,
    },
}

/// 사용자 입력 문자열을 숫자로 해석한다.
///
/// 빈 입력은 0으로 본다. 숫자가 아니거나 NaN/무한대는 거부한다.
pub fn parse_value(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed.parse().map_err(|_| ConversionError::InvalidInput {
        input: trimmed.to_string(),
        reason: "not a number",
    })?;
    if !value.is_finite() {
        return Err(ConversionError::InvalidInput {
            input: trimmed.to_string(),
            reason: "value is not a finite number",
        });
    }
    Ok(value)
}

/// 결과 값을 표시용 문자열로 만든다.
///
/// 절댓값이 `[exponent_lower, exponent_upper]` 밖이면 지수 표기를 쓴다. 0은 그대로 표시한다.
pub fn format_result(value: f64, display: &DisplayConfig) -> String {
    let digits = display.precision.max(1);
    let magnitude = value.abs();
    if value == 0.0 || (magnitude >= display.exponent_lower && magnitude <= display.exponent_upper)
    {
        // 정수부 자릿수. 0.1 미만이면 음수가 되어 소수 자릿수가 늘어난다
        let int_digits = if magnitude > 0.0 {
            magnitude.log10().floor() as i64 + 1
        } else {
            1
        };
        let decimals = (digits as i64 - int_digits).max(0) as usize;
        let s = format!("{value:.decimals$}");
        trim_fraction(&s)
    } else {
        let s = format!("{:.*e}", digits - 1, value);
        match s.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{exp}", trim_fraction(mantissa)),
            None => s,
        }
    }
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
