use crate::units::table::UnitTable;

/// 단면적 표. 아직 단위가 정의되지 않아 비어 있으며, 선택하면
/// 레지스트리가 `UnimplementedProperty`로 거부한다.
// TODO: add Bohr², Å² and cm² entries once the cross-section factors are agreed on
pub fn cross_section_table() -> UnitTable {
    UnitTable::new("Cross Section")
}
