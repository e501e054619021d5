use crate::conversion::ConversionError;
use crate::units::constants::AU_FIELD_PER_V_PER_M;
use crate::units::table::{ConversionStrategy, UnitKind, UnitTable};

/// 전기장 세기/강도 단위 표.
///
/// 세기는 V/m, 강도는 W/m²를 기준(계수 1)으로 둔다. 두 기준 사이는
/// 진공 임피던스로 연결된다.
pub fn field_table() -> Result<UnitTable, ConversionError> {
    let mut table = UnitTable::with_strategy(
        "Field Strength and Intensity",
        ConversionStrategy::FieldStrengthIntensity,
    );
    table.add_kind_entry("au of electric field", AU_FIELD_PER_V_PER_M, UnitKind::Strength)?;
    table.add_kind_entry("V/nm", 1e-9, UnitKind::Strength)?;
    table.add_kind_entry("V/m", 1.0, UnitKind::Strength)?;
    table.add_kind_entry("W/cm\u{00B2}", 1e-4, UnitKind::Intensity)?;
    table.add_kind_entry("W/m\u{00B2}", 1.0, UnitKind::Intensity)?;
    Ok(table)
}
