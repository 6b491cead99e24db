//! Force units

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

use crate::length::METER;
use crate::mass::KILOGRAM;
use crate::time::SECOND;

pub static NEWTON: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("newton", "N", &(&(&*METER * &*KILOGRAM) * &SECOND.power(-2))));
pub static KILONEWTON: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("kilonewton", "kN", &(1000.0 * &*NEWTON)));

pub fn register_force_units(manager: &UnitManager) {
    for unit in [&NEWTON, &KILONEWTON] {
        manager.register_unit((**unit).clone());
    }
}
