//! Relative units
//!
//! Dimensionless units that act as multipliers: an amount of percent times
//! an amount of anything stays in that thing's family, scaled by 0.01 once
//! converted back.

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

pub static ABSOLUTE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("absolute", "-", &Unit::none()));
pub static PERCENT: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("percentage", "%", &(0.01 * &Unit::none())));

pub fn register_relative_units(manager: &UnitManager) {
    for unit in [&ABSOLUTE, &PERCENT] {
        manager.register_unit((**unit).clone());
    }
}
