//! 물리량별 단위 표 정의 및 변환 모듈 모음.

pub mod constants;
pub mod cross_section;
pub mod energy;
pub mod field;
pub mod length;
pub mod mass;
pub mod table;
pub mod time;

pub use cross_section::cross_section_table;
pub use energy::energy_wavelength_table;
pub use field::field_table;
pub use length::length_table;
pub use mass::mass_table;
pub use table::{ConversionStrategy, UnitEntry, UnitKind, UnitTable};
pub use time::time_table;
