//! Unit algebra and parsing against the standard catalog

use amounts_core::{Unit, UnitManager};
use amounts_standard::length::{METER, MILE};
use amounts_standard::mass::{GRAM, KILOGRAM};
use amounts_standard::speed::METER_PER_SECOND;
use amounts_standard::temperature::DEGREE_CELSIUS;
use amounts_standard::time::{HOUR, SECOND};
use amounts_standard::volume::METER3;

fn manager() -> UnitManager {
    let manager = UnitManager::new();
    amounts_standard::register_all(&manager);
    manager
}

#[test]
fn parse_simple_units() {
    let manager = manager();
    assert_eq!(Unit::parse("m", &manager).unwrap(), *METER);
    assert_eq!(Unit::parse("kilogram", &manager).unwrap(), *KILOGRAM);
}

#[test]
fn parse_calculated_units() {
    let manager = manager();

    assert_eq!(Unit::parse("m/s", &manager).unwrap(), &*METER / &*SECOND);
    assert_eq!(Unit::parse("m/s", &manager).unwrap(), *METER_PER_SECOND);

    assert_eq!(Unit::parse("1000*Kg", &manager).unwrap(), 1000.0 * &*KILOGRAM);

    assert_eq!(Unit::parse("m\u{b3}/h", &manager).unwrap(), &*METER3 / &*HOUR);

    assert_eq!(
        Unit::parse("1*\u{b0}C/s", &manager).unwrap(),
        &*DEGREE_CELSIUS / &*SECOND
    );
}

#[test]
fn parse_chained_divisions() {
    let manager = manager();

    assert_eq!(
        Unit::parse("m\u{b3}/h/m", &manager).unwrap(),
        &(&*METER3 / &*HOUR) / &*METER
    );
    assert_eq!(
        Unit::parse("m\u{b3}/h/m*Kg", &manager).unwrap(),
        &(&(&*METER3 / &*HOUR) / &*METER) * &*KILOGRAM
    );
}

#[test]
fn parse_tolerates_doubled_operators() {
    let manager = manager();
    let expected = &*DEGREE_CELSIUS / &*SECOND;
    assert_eq!(Unit::parse("1*\u{b0}C/s", &manager).unwrap(), expected);
    assert_eq!(Unit::parse("1**\u{b0}C/s", &manager).unwrap(), expected);
    assert_eq!(Unit::parse("1***\u{b0}C/s", &manager).unwrap(), expected);
}

#[test]
fn parse_round_trips_catalog_symbols() {
    let manager = manager();
    for unit in manager.units() {
        let parsed = Unit::parse(unit.symbol(), &manager).unwrap();
        assert_eq!(parsed.symbol(), unit.symbol(), "symbol {}", unit.symbol());
    }
}

#[test]
fn compatibility_follows_unit_types() {
    let acceleration = &*MILE / &HOUR.power(2);

    assert!(acceleration.is_compatible_to(&(&*METER / &SECOND.power(2))));
    assert!(acceleration.is_compatible_to(&(&*METER * &SECOND.power(-2))));
    assert!(!acceleration.is_compatible_to(&(&*METER / &*SECOND)));
    assert!(!acceleration.is_compatible_to(&GRAM));
}

#[test]
fn derived_units_compose_factors() {
    let kmh = Unit::parse("km/h", &manager()).unwrap();
    assert!((kmh.factor() - 1000.0 / 3600.0).abs() < 1e-12);
}
