use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::conversion::ConversionError;
use crate::units::constants::{PLANCK, SPEED_OF_LIGHT, VACUUM_IMPEDANCE};

/// 단위의 종류. 종류가 다른 단위끼리 변환할 때 어떤 관계식을 쓸지 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    /// 일반 선형 단위
    Linear,
    /// 광자 에너지
    Energy,
    /// 파장
    Wavelength,
    /// 전기장 세기
    Strength,
    /// 전기장 강도(면적당 일률)
    Intensity,
}

/// 물리량별 변환 전략.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionStrategy {
    /// 기준 단위를 거친 배율 변환만 수행한다.
    Linear,
    /// 에너지 ↔ 파장, E = hc/λ.
    EnergyWavelength,
    /// 전기장 세기 ↔ 강도, I = E²/Z.
    FieldStrengthIntensity,
}

impl ConversionStrategy {
    /// 이 전략이 받아들이는 단위 종류인지 검사한다.
    pub fn accepts(self, kind: UnitKind) -> bool {
        matches!(
            (self, kind),
            (ConversionStrategy::Linear, UnitKind::Linear)
                | (
                    ConversionStrategy::EnergyWavelength,
                    UnitKind::Energy | UnitKind::Wavelength
                )
                | (
                    ConversionStrategy::FieldStrengthIntensity,
                    UnitKind::Strength | UnitKind::Intensity
                )
        )
    }
}

/// 표의 한 행. `factor`는 기준 단위 1에 해당하는 이 단위의 값이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub label: String,
    pub factor: f64,
    pub kind: UnitKind,
}

/// 하나의 물리량에 속한 단위 목록과 변환 전략.
///
/// 인덱스가 단위의 식별자이며, 삽입 순서가 유지되고 삭제는 없다.
/// 초기화 이후에는 읽기 전용으로만 쓰인다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTable {
    property_name: String,
    strategy: ConversionStrategy,
    entries: Vec<UnitEntry>,
}

impl UnitTable {
    /// 선형 변환만 하는 빈 표를 만든다.
    pub fn new(property_name: impl Into<String>) -> Self {
        Self::with_strategy(property_name, ConversionStrategy::Linear)
    }

    pub fn with_strategy(property_name: impl Into<String>, strategy: ConversionStrategy) -> Self {
        Self {
            property_name: property_name.into(),
            strategy,
            entries: Vec::new(),
        }
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn strategy(&self) -> ConversionStrategy {
        self.strategy
    }

    pub fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 표시용 라벨을 인덱스 순서대로 돌려준다.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    /// 선형 단위를 추가한다.
    pub fn add_entry(&mut self, label: &str, factor: f64) -> Result<(), ConversionError> {
        self.add_kind_entry(label, factor, UnitKind::Linear)
    }

    /// 종류가 지정된 단위를 추가한다. 라벨 중복은 허용하되 경고를 남긴다.
    pub fn add_kind_entry(
        &mut self,
        label: &str,
        factor: f64,
        kind: UnitKind,
    ) -> Result<(), ConversionError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConversionError::InvalidFactor {
                label: label.to_string(),
                factor,
            });
        }
        if !self.strategy.accepts(kind) {
            return Err(ConversionError::KindMismatch {
                label: label.to_string(),
                kind,
                strategy: self.strategy,
            });
        }
        if self.entries.iter().any(|e| e.label == label) {
            warn!(
                property = %self.property_name,
                label,
                "duplicate unit label; entries stay addressable by index"
            );
        }
        self.entries.push(UnitEntry {
            label: label.to_string(),
            factor,
            kind,
        });
        Ok(())
    }

    /// 두 번 이상 등장하는 라벨 목록 (첫 등장 순서).
    pub fn duplicate_labels(&self) -> Vec<&str> {
        let mut dups: Vec<&str> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let seen_before = self.entries[..i].iter().any(|e| e.label == entry.label);
            if seen_before && !dups.contains(&entry.label.as_str()) {
                dups.push(&entry.label);
            }
        }
        dups
    }

    pub fn entry(&self, index: usize) -> Result<&UnitEntry, ConversionError> {
        self.entries
            .get(index)
            .ok_or(ConversionError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// `source` 단위의 `value`를 `target` 단위로 변환한다.
    ///
    /// 같은 종류끼리는 기준 단위를 거친 배율 변환을, 종류가 다르면
    /// 전략에 해당하는 비선형 관계식을 적용한다. 입력이나 결과가
    /// 유한하지 않으면 값을 돌려주지 않고 `InvalidInput`으로 실패한다.
    pub fn convert(&self, source: usize, target: usize, value: f64) -> Result<f64, ConversionError> {
        let from = self.entry(source)?;
        let to = self.entry(target)?;
        if !value.is_finite() {
            return Err(ConversionError::InvalidInput {
                input: value.to_string(),
                reason: "value is not a finite number",
            });
        }

        let result = if source == target {
            value
        } else if from.kind == to.kind {
            linear(value, from.factor, to.factor)
        } else {
            match (from.kind, to.kind) {
                (UnitKind::Energy, UnitKind::Wavelength)
                | (UnitKind::Wavelength, UnitKind::Energy) => {
                    energy_wavelength(value, from.factor, to.factor)
                }
                (UnitKind::Strength, UnitKind::Intensity) => {
                    strength_to_intensity(value, from.factor, to.factor)
                }
                (UnitKind::Intensity, UnitKind::Strength) => {
                    intensity_to_strength(value, from.factor, to.factor)
                }
                // add_kind_entry가 전략 밖의 종류를 막으므로 도달하지 않는다
                (a, b) => {
                    return Err(ConversionError::KindMismatch {
                        label: format!("{a:?} -> {b:?}"),
                        kind: b,
                        strategy: self.strategy,
                    })
                }
            }
        };

        tracing::trace!(
            property = %self.property_name,
            from = %from.label,
            to = %to.label,
            value,
            result,
            "converted"
        );

        if result.is_finite() {
            Ok(result)
        } else {
            Err(ConversionError::InvalidInput {
                input: value.to_string(),
                reason: "conversion has no finite result for this value",
            })
        }
    }
}

/// 기준 단위를 거친 배율 변환.
pub fn linear(value: f64, source_factor: f64, target_factor: f64) -> f64 {
    (value / source_factor) * target_factor
}

/// E·λ = hc. 방향과 관계없이 같은 식을 쓴다.
pub fn energy_wavelength(value: f64, source_factor: f64, target_factor: f64) -> f64 {
    PLANCK * SPEED_OF_LIGHT / (value / source_factor) * target_factor
}

pub fn strength_to_intensity(value: f64, source_factor: f64, target_factor: f64) -> f64 {
    target_factor * (value / source_factor).powi(2) / VACUUM_IMPEDANCE
}

pub fn intensity_to_strength(value: f64, source_factor: f64, target_factor: f64) -> f64 {
    target_factor * (VACUUM_IMPEDANCE * value / source_factor).sqrt()
}
