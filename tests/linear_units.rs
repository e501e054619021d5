//! 선형 단위(길이/시간/질량) 변환 회귀 테스트.
use atomic_unit_converter::{Property, PropertyRegistry};

const LINEAR: [Property; 3] = [Property::Length, Property::Time, Property::Mass];

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

#[test]
fn round_trip_recovers_value() {
    let reg = PropertyRegistry::initialize().unwrap();
    for property in LINEAR {
        let table = reg.table_for_property(property.index()).unwrap();
        for i in 0..table.len() {
            for j in 0..table.len() {
                for v in [1.0, -3.5, 2.5e-7, 6.02e23] {
                    let there = table.convert(i, j, v).unwrap();
                    let back = table.convert(j, i, there).unwrap();
                    assert!(
                        rel_close(back, v, 1e-9),
                        "{}: {i}->{j}->{i} of {v} gave {back}",
                        table.property_name()
                    );
                }
            }
        }
    }
}

#[test]
fn same_unit_is_identity() {
    let reg = PropertyRegistry::initialize().unwrap();
    for property in LINEAR {
        let table = reg.table_for_property(property.index()).unwrap();
        for i in 0..table.len() {
            assert_eq!(table.convert(i, i, 1.0).unwrap(), 1.0);
        }
    }
}

#[test]
fn reference_unit_is_exact() {
    let reg = PropertyRegistry::initialize().unwrap();
    for property in LINEAR {
        let table = reg.table_for_property(property.index()).unwrap();
        assert_eq!(table.entries()[0].factor, 1.0);
        for (k, entry) in table.entries().iter().enumerate() {
            let v = 7.25;
            assert_eq!(table.convert(0, k, v).unwrap(), v * entry.factor);
            assert_eq!(table.convert(k, 0, v).unwrap(), v / entry.factor);
        }
    }
}

#[test]
fn bohr_to_angstrom_and_meter() {
    let reg = PropertyRegistry::initialize().unwrap();
    let a = reg.convert(Property::Length.index(), 0, 1, 1.0).unwrap();
    assert!((a - 0.52917721090380).abs() < 1e-15);
    // 1 m = 1e10 Å
    let m_to_a = reg.convert(Property::Length.index(), 4, 1, 1.0).unwrap();
    assert!(rel_close(m_to_a, 1e10, 1e-12));
}

#[test]
fn femtosecond_is_thousand_attoseconds() {
    let reg = PropertyRegistry::initialize().unwrap();
    let as_ = reg.convert(Property::Time.index(), 2, 1, 1.0).unwrap();
    assert!(rel_close(as_, 1000.0, 1e-12));
}

#[test]
fn kilogram_is_thousand_grams() {
    let reg = PropertyRegistry::initialize().unwrap();
    let g = reg.convert(Property::Mass.index(), 3, 2, 1.0).unwrap();
    assert!(rel_close(g, 1000.0, 1e-12));
}
