//! Frequency units

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

use crate::time::{MINUTE, SECOND};

pub static HERTZ: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("hertz", "Hz", &SECOND.power(-1)));
pub static MEGAHERTZ: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("megahertz", "MHz", &(1000000.0 * &*HERTZ)));
pub static RPM: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("rounds per minute", "rpm", &MINUTE.power(-1)));

pub fn register_frequency_units(manager: &UnitManager) {
    for unit in [&HERTZ, &MEGAHERTZ, &RPM] {
        manager.register_unit((**unit).clone());
    }
}
