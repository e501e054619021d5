use crate::conversion::ConversionError;
use crate::units::constants::ELECTRON_MASS_IN_GRAM;
use crate::units::table::UnitTable;

/// 질량 단위 표. 내부 기준은 전자 질량이다.
pub fn mass_table() -> Result<UnitTable, ConversionError> {
    let mut table = UnitTable::new("Mass");
    table.add_entry("electron mass", 1.0)?;
    table.add_entry("amu", 5.48579909044197e-4)?;
    table.add_entry("grams", ELECTRON_MASS_IN_GRAM)?;
    table.add_entry("kilograms", 9.1093837139e-31)?;
    Ok(table)
}
