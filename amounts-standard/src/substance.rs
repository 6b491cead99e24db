//! Amount-of-substance units

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

use crate::types::AMOUNT_OF_SUBSTANCE;

pub static MOLE: LazyLock<Unit> = LazyLock::new(|| Unit::new("mole", "mol", AMOUNT_OF_SUBSTANCE.clone()));

pub fn register_substance_units(manager: &UnitManager) {
    manager.register_unit(MOLE.clone());
}
