use crate::conversion::ConversionError;
use crate::units::constants::HARTREE_IN_EV;
use crate::units::table::{ConversionStrategy, UnitKind, UnitTable};

/// 에너지/파장 단위 표. 에너지 기준은 하트리, 파장 기준은 보어 반지름이다.
pub fn energy_wavelength_table() -> Result<UnitTable, ConversionError> {
    let mut table =
        UnitTable::with_strategy("Energy/Wavelength", ConversionStrategy::EnergyWavelength);
    table.add_kind_entry("Hartree (au)", 1.0, UnitKind::Energy)?;
    table.add_kind_entry("eV", HARTREE_IN_EV, UnitKind::Energy)?;
    table.add_kind_entry("nm", 0.052917721090380, UnitKind::Wavelength)?;
    Ok(table)
}
