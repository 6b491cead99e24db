//! Temperature units and scale conversions
//!
//! Kelvin, celsius and fahrenheit live on separate unit types: degree scales
//! differ by additive offsets, which factor scaling cannot express. The
//! bridges between them are registered as conversion functions; each
//! direction is its own registration.

use std::sync::LazyLock;

use amounts_core::{Amount, Unit, UnitManager};

use crate::types::{CELSIUS_TEMPERATURE, FAHRENHEIT_TEMPERATURE, THERMODYNAMIC_TEMPERATURE};

pub static KELVIN: LazyLock<Unit> =
    LazyLock::new(|| Unit::new("kelvin", "K", THERMODYNAMIC_TEMPERATURE.clone()));
pub static DEGREE_CELSIUS: LazyLock<Unit> =
    LazyLock::new(|| Unit::new("degree celsius", "\u{b0}C", CELSIUS_TEMPERATURE.clone()));
pub static DEGREE_FAHRENHEIT: LazyLock<Unit> =
    LazyLock::new(|| Unit::new("degree fahrenheit", "\u{b0}F", FAHRENHEIT_TEMPERATURE.clone()));

pub fn register_temperature_units(manager: &UnitManager) {
    for unit in [&KELVIN, &DEGREE_CELSIUS, &DEGREE_FAHRENHEIT] {
        manager.register_unit((**unit).clone());
    }
}

pub fn register_temperature_conversions(manager: &UnitManager) {
    manager.register_conversion(&DEGREE_CELSIUS, &DEGREE_FAHRENHEIT, |_, amount| {
        Ok(Amount::new(
            amount.value() * 9.0 / 5.0 + 32.0,
            DEGREE_FAHRENHEIT.clone(),
        ))
    });

    manager.register_conversion(&DEGREE_FAHRENHEIT, &DEGREE_CELSIUS, |_, amount| {
        Ok(Amount::new(
            (amount.value() - 32.0) / 9.0 * 5.0,
            DEGREE_CELSIUS.clone(),
        ))
    });

    manager.register_conversion(&DEGREE_CELSIUS, &KELVIN, |_, amount| {
        Ok(Amount::new(amount.value() + 273.15, KELVIN.clone()))
    });

    manager.register_conversion(&KELVIN, &DEGREE_CELSIUS, |_, amount| {
        Ok(Amount::new(amount.value() - 273.15, DEGREE_CELSIUS.clone()))
    });

    // Fahrenheit and kelvin convert through celsius.
    manager.register_conversion(&DEGREE_FAHRENHEIT, &KELVIN, |manager, amount| {
        amount
            .converted_to(&DEGREE_CELSIUS, manager)?
            .converted_to(&KELVIN, manager)
    });

    manager.register_conversion(&KELVIN, &DEGREE_FAHRENHEIT, |manager, amount| {
        amount
            .converted_to(&DEGREE_CELSIUS, manager)?
            .converted_to(&DEGREE_FAHRENHEIT, manager)
    });
}
