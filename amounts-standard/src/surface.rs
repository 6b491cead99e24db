//! Surface units

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

use crate::length::{KILOMETER, METER};

pub static METER2: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("meter\u{b2}", "m\u{b2}", &METER.power(2)));
pub static ARE: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("are", "are", &(100.0 * &*METER2)));
pub static HECTARE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("hectare", "ha", &(10000.0 * &*METER2)));
pub static KILOMETER2: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("kilometer\u{b2}", "km\u{b2}", &KILOMETER.power(2)));

pub fn register_surface_units(manager: &UnitManager) {
    for unit in [&METER2, &ARE, &HECTARE, &KILOMETER2] {
        manager.register_unit((**unit).clone());
    }
}
