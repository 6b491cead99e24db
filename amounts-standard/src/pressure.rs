//! Pressure units

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

use crate::force::NEWTON;
use crate::length::METER;

pub static PASCAL: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("pascal", "Pa", &(&*NEWTON * &METER.power(-2))));
pub static HECTOPASCAL: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("hectopascal", "hPa", &(100.0 * &*PASCAL)));
pub static KILOPASCAL: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("kilopascal", "kPa", &(1000.0 * &*PASCAL)));
pub static BAR: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("bar", "bar", &(100000.0 * &*PASCAL)));
pub static MILLIBAR: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("millibar", "mbar", &(0.001 * &*BAR)));
pub static ATMOSPHERE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("atmosphere", "atm", &(101325.0 * &*PASCAL)));

pub fn register_pressure_units(manager: &UnitManager) {
    for unit in [&PASCAL, &HECTOPASCAL, &KILOPASCAL, &BAR, &MILLIBAR, &ATMOSPHERE] {
        manager.register_unit((**unit).clone());
    }
}
