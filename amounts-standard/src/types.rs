//! Base unit types
//!
//! The seven SI base dimensions, plus the standalone celsius and fahrenheit
//! temperature axes: degree scales are not factor-convertible to kelvin, so
//! each gets its own dimension and conversion functions bridge between them.

use std::sync::LazyLock;

use amounts_core::UnitType;

pub static LENGTH: LazyLock<UnitType> = LazyLock::new(|| base("metre"));
pub static MASS: LazyLock<UnitType> = LazyLock::new(|| base("kilogram"));
pub static TIME: LazyLock<UnitType> = LazyLock::new(|| base("second"));
pub static ELECTRIC_CURRENT: LazyLock<UnitType> = LazyLock::new(|| base("ampere"));
pub static THERMODYNAMIC_TEMPERATURE: LazyLock<UnitType> = LazyLock::new(|| base("kelvin"));
pub static AMOUNT_OF_SUBSTANCE: LazyLock<UnitType> = LazyLock::new(|| base("mole"));
pub static LUMINOUS_INTENSITY: LazyLock<UnitType> = LazyLock::new(|| base("candela"));

pub static CELSIUS_TEMPERATURE: LazyLock<UnitType> = LazyLock::new(|| base("celsius temperature"));
pub static FAHRENHEIT_TEMPERATURE: LazyLock<UnitType> =
    LazyLock::new(|| base("fahrenheit temperature"));

fn base(name: &str) -> UnitType {
    // The catalog names contain no reserved characters.
    UnitType::base(name).expect("valid base dimension name")
}
