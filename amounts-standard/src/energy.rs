//! Energy and power units

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

use crate::length::METER;
use crate::mass::KILOGRAM;
use crate::time::{HOUR, SECOND};

pub static JOULE: LazyLock<Unit> = LazyLock::new(|| {
    Unit::from_base("joule", "J", &(&(&METER.power(2) * &*KILOGRAM) * &SECOND.power(-2)))
});
pub static KILOJOULE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("kilojoule", "kJ", &(1000.0 * &*JOULE)));
pub static MEGAJOULE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("megajoule", "MJ", &(1000000.0 * &*JOULE)));
pub static GIGAJOULE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("gigajoule", "GJ", &(1000000000.0 * &*JOULE)));

pub static WATT: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("watt", "W", &(&*JOULE / &*SECOND)));
pub static KILOWATT: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("kilowatt", "kW", &(1000.0 * &*WATT)));
pub static MEGAWATT: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("megawatt", "MW", &(1000000.0 * &*WATT)));

pub static WATT_SECOND: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("watt-second", "Wsec", &(&*WATT * &*SECOND)));
pub static WATT_HOUR: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("watt-hour", "Wh", &(&*WATT * &*HOUR)));
pub static KILOWATT_HOUR: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("kilowatt-hour", "kWh", &(1000.0 * &*WATT_HOUR)));

pub static CALORIE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("calorie", "cal", &(4.1868 * &*JOULE)));
pub static KILOCALORIE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("kilocalorie", "kcal", &(1000.0 * &*CALORIE)));

pub static HORSEPOWER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("horsepower", "hp", &(0.73549875 * &*KILOWATT)));

pub fn register_energy_units(manager: &UnitManager) {
    for unit in [
        &JOULE,
        &KILOJOULE,
        &MEGAJOULE,
        &GIGAJOULE,
        &WATT,
        &KILOWATT,
        &MEGAWATT,
        &WATT_SECOND,
        &WATT_HOUR,
        &KILOWATT_HOUR,
        &CALORIE,
        &KILOCALORIE,
        &HORSEPOWER,
    ] {
        manager.register_unit((**unit).clone());
    }
}
