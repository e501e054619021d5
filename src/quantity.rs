use serde::{Deserialize, Serialize};

/// 다루는 물리량 종류를 나타낸다. 선언 순서가 곧 레지스트리 인덱스이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Property {
    Length,
    Time,
    Mass,
    EnergyWavelength,
    FieldStrengthIntensity,
    CrossSection,
}

impl Property {
    /// 사용자에게 보여지는 순서 그대로의 전체 목록.
    pub const ALL: [Property; 6] = [
        Property::Length,
        Property::Time,
        Property::Mass,
        Property::EnergyWavelength,
        Property::FieldStrengthIntensity,
        Property::CrossSection,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 표시용 이름.
    pub fn name(self) -> &'static str {
        match self {
            Property::Length => "Length",
            Property::Time => "Time",
            Property::Mass => "Mass",
            Property::EnergyWavelength => "Energy/Wavelength",
            Property::FieldStrengthIntensity => "Field Strength and Intensity",
            Property::CrossSection => "Cross Section",
        }
    }
}
