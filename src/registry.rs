use tracing::debug;

use crate::conversion::ConversionError;
use crate::quantity::Property;
use crate::units::{self, UnitTable};

/// 물리량별 단위 표를 고정 순서로 보관한다.
///
/// 프로세스 시작 시 한 번 `initialize`로 만든 뒤 참조로 넘겨 쓴다.
/// 생성 이후 변경 경로가 없으므로 여러 스레드에서 동시에 조회해도 된다.
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    tables: Vec<UnitTable>,
}

impl PropertyRegistry {
    /// 내장 단위 표를 `Property::ALL` 순서대로 구성한다.
    pub fn initialize() -> Result<Self, ConversionError> {
        let mut tables = Vec::with_capacity(Property::ALL.len());
        for property in Property::ALL {
            let table = match property {
                Property::Length => units::length_table()?,
                Property::Time => units::time_table()?,
                Property::Mass => units::mass_table()?,
                Property::EnergyWavelength => units::energy_wavelength_table()?,
                Property::FieldStrengthIntensity => units::field_table()?,
                Property::CrossSection => units::cross_section_table(),
            };
            debug!(
                index = property.index(),
                property = table.property_name(),
                units = table.len(),
                "registered unit table"
            );
            tables.push(table);
        }
        Ok(Self { tables })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// 상위 선택 메뉴에 쓰일 물리량 이름 목록.
    pub fn property_names(&self) -> Vec<String> {
        self.tables
            .iter()
            .map(|t| t.property_name().to_string())
            .collect()
    }

    /// 인덱스에 해당하는 표. 범위를 벗어나거나 단위가 비어 있으면 실패한다.
    pub fn table_for_property(&self, index: usize) -> Result<&UnitTable, ConversionError> {
        let table = self
            .tables
            .get(index)
            .ok_or(ConversionError::UnknownProperty {
                index,
                len: self.tables.len(),
            })?;
        if table.is_empty() {
            return Err(ConversionError::UnimplementedProperty {
                name: table.property_name().to_string(),
            });
        }
        Ok(table)
    }

    /// 단위 라벨 목록. 순서가 `convert`의 인덱스와 그대로 대응한다.
    pub fn labels_for_property(&self, index: usize) -> Result<Vec<String>, ConversionError> {
        Ok(self.table_for_property(index)?.labels())
    }

    pub fn convert(
        &self,
        property: usize,
        source: usize,
        target: usize,
        value: f64,
    ) -> Result<f64, ConversionError> {
        self.table_for_property(property)?
            .convert(source, target, value)
    }
}
