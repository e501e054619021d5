//! 원자 단위계 기준 물리 상수 및 환산 계수.

/// 플랑크 상수 (원자 단위, h = 2π).
pub const PLANCK: f64 = 2.0 * std::f64::consts::PI;

/// 빛의 속도 (원자 단위). 최신 개정값을 사용한다.
pub const SPEED_OF_LIGHT: f64 = 137.03599917721;

/// 진공 임피던스 [Ω].
pub const VACUUM_IMPEDANCE: f64 = 376.730313413;

/// 보어 반지름 [Å].
pub const BOHR_IN_ANGSTROM: f64 = 0.52917721090380;

/// 원자 시간 단위 [as].
pub const AU_TIME_IN_ATTOSECOND: f64 = 24.188843265864;

/// 전자 질량 [g].
pub const ELECTRON_MASS_IN_GRAM: f64 = 9.1093837139e-28;

/// 하트리 에너지 [eV].
pub const HARTREE_IN_EV: f64 = 27.211386245988;

/// 1 V/m 에 해당하는 원자 단위 전기장 세기.
pub const AU_FIELD_PER_V_PER_M: f64 = 1.94469037e-12;
