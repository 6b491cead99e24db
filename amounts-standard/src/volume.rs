//! Volume units

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

use crate::length::{DECIMETER, METER};

pub static LITER: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("liter", "L", &DECIMETER.power(3)));
pub static MILLILITER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("milliliter", "mL", &(0.001 * &*LITER)));
pub static CENTILITER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("centiliter", "cL", &(0.01 * &*LITER)));
pub static DECILITER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("deciliter", "dL", &(0.1 * &*LITER)));
pub static HECTOLITER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("hectoliter", "hL", &(100.0 * &*LITER)));

pub static METER3: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("meter\u{b3}", "m\u{b3}", &METER.power(3)));

pub fn register_volume_units(manager: &UnitManager) {
    for unit in [&LITER, &MILLILITER, &CENTILITER, &DECILITER, &HECTOLITER, &METER3] {
        manager.register_unit((**unit).clone());
    }
}
