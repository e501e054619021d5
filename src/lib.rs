//! 원자 단위계 기반 단위 변환 핵심 로직을 라이브러리로 분리하여 CLI 외의 UI에서도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod registry;
pub mod ui_cli;
pub mod units;

pub use conversion::ConversionError;
pub use quantity::Property;
pub use registry::PropertyRegistry;
pub use units::{ConversionStrategy, UnitEntry, UnitKind, UnitTable};
