//! Speed units

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

use crate::length::{KILOMETER, METER, MILE};
use crate::time::{HOUR, SECOND};

pub static METER_PER_SECOND: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("meter/second", "m/s", &(&*METER / &*SECOND)));
pub static KILOMETER_PER_HOUR: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("kilometer/hour", "km/h", &(&*KILOMETER / &*HOUR)));
pub static MILE_PER_HOUR: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("mile/hour", "mi/h", &(&*MILE / &*HOUR)));
pub static KNOT: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("knot", "kn", &(1.852 * &*KILOMETER_PER_HOUR)));

pub fn register_speed_units(manager: &UnitManager) {
    for unit in [&METER_PER_SECOND, &KILOMETER_PER_HOUR, &MILE_PER_HOUR, &KNOT] {
        manager.register_unit((**unit).clone());
    }
}
