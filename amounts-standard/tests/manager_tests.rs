//! Registry behavior against the standard catalog

use amounts_core::{Amount, Unit, UnitManager, UnitType};
use amounts_standard::length::{KILOMETER, METER};
use amounts_standard::temperature::{DEGREE_CELSIUS, KELVIN};
use amounts_standard::types::LENGTH;

fn manager() -> UnitManager {
    let manager = UnitManager::new();
    amounts_standard::register_all(&manager);
    manager
}

#[test]
fn registering_a_unit_indexes_name_and_symbol() {
    let manager = UnitManager::new();
    let unit = Unit::new("SomeUnit", "SU", UnitType::base("SomeUnitType").unwrap());
    manager.register_unit(unit.clone());

    assert_eq!(manager.get_unit_by_name("SomeUnit").unwrap(), unit);
    assert_eq!(manager.get_unit_by_symbol("SU").unwrap(), unit);
}

#[test]
fn registering_a_unit_derived_from_none() {
    let manager = UnitManager::new();
    let unit = Unit::from_base("OtherUnit", "OU", &Unit::none());
    manager.register_unit(unit.clone());

    assert_eq!(manager.get_unit_by_name("OtherUnit").unwrap(), unit);
    assert_eq!(manager.get_unit_by_symbol("OU").unwrap(), unit);
}

#[test]
fn catalog_registration_is_idempotent() {
    let manager = manager();
    let count = manager.units().len();
    amounts_standard::register_all(&manager);
    assert_eq!(manager.units().len(), count);
}

#[test]
fn units_of_type_lists_the_length_family() {
    let manager = manager();
    let lengths = manager.units_of_type(&LENGTH);
    assert!(lengths.iter().any(|u| u.name() == "meter"));
    assert!(lengths.iter().any(|u| u.name() == "kilometer"));
    assert!(lengths.iter().all(|u| u.unit_type() == &*LENGTH));
}

#[test]
fn is_registered_matches_by_factor_and_type() {
    let manager = manager();
    assert!(manager.is_registered(&METER));
    // Same factor and type as the registered kilometer.
    assert!(manager.is_registered(&(1000.0 * &*METER)));
    assert!(!manager.is_registered(&(17.0 * &*METER)));
}

#[test]
fn resolver_fallback_is_consulted_and_cached() {
    let manager = manager();
    manager.add_resolver(|name| {
        (name == "smoot").then(|| Unit::from_base("smoot", "smt", &(1.702 * &*METER)))
    });

    let smoot = manager.get_unit_by_name("smoot").unwrap();
    assert_eq!(smoot.symbol(), "smt");
    assert!(manager.is_registered(&smoot));
    assert!(manager.get_unit_by_name("sazhen").is_err());
    // Symbol lookup has no resolver fallback, but the resolved unit was
    // registered under its symbol.
    assert_eq!(manager.get_unit_by_symbol("smt").unwrap(), smoot);
}

#[test]
fn conversion_functions_are_directional_registrations() {
    let manager = UnitManager::new();
    amounts_standard::register_temperature_units(&manager);

    // Only one direction registered.
    manager.register_conversion(&DEGREE_CELSIUS, &KELVIN, |_, amount| {
        Ok(Amount::new(amount.value() + 273.15, KELVIN.clone()))
    });

    let freezing = Amount::new(0.0, DEGREE_CELSIUS.clone());
    assert_eq!(freezing.converted_to(&KELVIN, &manager).unwrap().value(), 273.15);
    assert!(Amount::new(273.15, KELVIN.clone())
        .converted_to(&DEGREE_CELSIUS, &manager)
        .is_err());
}

#[test]
fn resolve_to_named_unit_prefers_registered_match() {
    let manager = manager();
    let derived = 1000.0 * &*METER;
    assert!(!derived.is_named());

    let resolved = manager.resolve_to_named_unit(&derived, false).unwrap();
    assert_eq!(resolved.name(), KILOMETER.name());

    let odd = 1234.5 * &*METER;
    assert!(manager.resolve_to_named_unit(&odd, false).is_none());
    assert_eq!(manager.resolve_to_named_unit(&odd, true).unwrap(), odd);
}
