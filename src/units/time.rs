use crate::conversion::ConversionError;
use crate::units::constants::AU_TIME_IN_ATTOSECOND;
use crate::units::table::UnitTable;

/// 시간 단위 표. 내부 기준은 원자 시간 단위이다.
pub fn time_table() -> Result<UnitTable, ConversionError> {
    let mut table = UnitTable::new("Time");
    table.add_entry("atomic unit", 1.0)?;
    table.add_entry("attosecond", AU_TIME_IN_ATTOSECOND)?;
    table.add_entry("femtosecond", AU_TIME_IN_ATTOSECOND / 1000.0)?;
    table.add_entry("second", 24.188843265864e-18)?;
    Ok(table)
}
