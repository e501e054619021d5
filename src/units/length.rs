use crate::conversion::ConversionError;
use crate::units::constants::BOHR_IN_ANGSTROM;
use crate::units::table::UnitTable;

/// 길이 단위 표. 내부 기준은 보어 반지름이다.
pub fn length_table() -> Result<UnitTable, ConversionError> {
    let mut table = UnitTable::new("Length");
    table.add_entry("Bohr (au)", 1.0)?;
    table.add_entry("Å", BOHR_IN_ANGSTROM)?;
    table.add_entry("nm", 0.052917721090380)?;
    table.add_entry("cm", 0.52917721090380e-8)?;
    table.add_entry("m", 0.52917721090380e-10)?;
    Ok(table)
}
