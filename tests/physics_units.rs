//! 에너지↔파장, 전기장 세기↔강도 비선형 변환 테스트.
use atomic_unit_converter::units::constants::{PLANCK, SPEED_OF_LIGHT, VACUUM_IMPEDANCE};
use atomic_unit_converter::{ConversionError, Property, PropertyRegistry};

const HARTREE: usize = 0;
const EV: usize = 1;
const NM: usize = 2;

const AU_FIELD: usize = 0;
const V_PER_NM: usize = 1;
const V_PER_M: usize = 2;
const W_PER_CM2: usize = 3;
const W_PER_M2: usize = 4;

fn energy() -> usize {
    Property::EnergyWavelength.index()
}

fn field() -> usize {
    Property::FieldStrengthIntensity.index()
}

#[test]
fn hartree_to_nm_matches_hc() {
    let reg = PropertyRegistry::initialize().unwrap();
    let nm = reg.convert(energy(), HARTREE, NM, 1.0).unwrap();
    let expected = 2.0 * std::f64::consts::PI * 137.03599917721 * 0.05291772109038;
    assert!((nm - expected).abs() < 1e-12, "nm={nm}");
    assert!((nm - 45.5634).abs() < 1e-3);
    assert_eq!(PLANCK * SPEED_OF_LIGHT, 2.0 * std::f64::consts::PI * 137.03599917721);
}

#[test]
fn energy_wavelength_round_trip() {
    let reg = PropertyRegistry::initialize().unwrap();
    for (e_unit, v) in [(HARTREE, 0.057), (EV, 1.55), (EV, 13.6)] {
        let nm = reg.convert(energy(), e_unit, NM, v).unwrap();
        let back = reg.convert(energy(), NM, e_unit, nm).unwrap();
        assert!(((back - v) / v).abs() < 1e-12, "{v} -> {nm} nm -> {back}");
    }
}

#[test]
fn eight_hundred_nm_is_about_one_and_a_half_ev() {
    let reg = PropertyRegistry::initialize().unwrap();
    let ev = reg.convert(energy(), NM, EV, 800.0).unwrap();
    assert!((ev - 1.5498).abs() < 1e-3, "ev={ev}");
}

#[test]
fn same_kind_energy_is_linear() {
    let reg = PropertyRegistry::initialize().unwrap();
    let ev = reg.convert(energy(), HARTREE, EV, 1.0).unwrap();
    assert_eq!(ev, 27.211386245988);
    assert_eq!(reg.convert(energy(), NM, NM, 3.0).unwrap(), 3.0);
}

#[test]
fn au_field_to_w_per_cm2() {
    let reg = PropertyRegistry::initialize().unwrap();
    let i = reg.convert(field(), AU_FIELD, W_PER_CM2, 1.0).unwrap();
    let expected = 1e-4 * (1.0 / 1.94469037e-12_f64).powi(2) / 376.730313413;
    assert!(((i - expected) / expected).abs() < 1e-14, "i={i}");
    assert!((i / 7.0189e16 - 1.0).abs() < 1e-4);
}

#[test]
fn intensity_to_strength_inverts_square_law() {
    let reg = PropertyRegistry::initialize().unwrap();
    let e = reg.convert(field(), W_PER_M2, V_PER_M, 1.0).unwrap();
    assert!((e - VACUUM_IMPEDANCE.sqrt()).abs() < 1e-12);
    for v in [0.01, 0.5, 3.0] {
        let i = reg.convert(field(), V_PER_NM, W_PER_CM2, v).unwrap();
        let back = reg.convert(field(), W_PER_CM2, V_PER_NM, i).unwrap();
        assert!(((back - v) / v).abs() < 1e-12, "{v} -> {i} -> {back}");
    }
}

#[test]
fn field_same_kind_is_linear() {
    let reg = PropertyRegistry::initialize().unwrap();
    let v_per_m = reg.convert(field(), V_PER_NM, V_PER_M, 1.0).unwrap();
    assert!((v_per_m - 1e9).abs() < 1e-3);
    let w_m2 = reg.convert(field(), W_PER_CM2, W_PER_M2, 1.0).unwrap();
    assert!((w_m2 - 1e4).abs() < 1e-9);
}

#[test]
fn zero_photon_energy_is_rejected() {
    let reg = PropertyRegistry::initialize().unwrap();
    assert!(matches!(
        reg.convert(energy(), EV, NM, 0.0),
        Err(ConversionError::InvalidInput { .. })
    ));
}

#[test]
fn nan_never_flows_through() {
    let reg = PropertyRegistry::initialize().unwrap();
    assert!(matches!(
        reg.convert(field(), AU_FIELD, W_PER_CM2, f64::NAN),
        Err(ConversionError::InvalidInput { .. })
    ));
    assert!(matches!(
        reg.convert(field(), W_PER_M2, V_PER_M, -1.0),
        Err(ConversionError::InvalidInput { .. })
    ));
}
