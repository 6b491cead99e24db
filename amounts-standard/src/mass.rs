//! Mass units

use std::sync::LazyLock;

use amounts_core::{Amount, Unit, UnitManager};

use crate::types::MASS;

pub static KILOGRAM: LazyLock<Unit> = LazyLock::new(|| Unit::new("kilogram", "Kg", MASS.clone()));
pub static GRAM: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("gram", "g", &(0.001 * &*KILOGRAM)));
pub static MILLIGRAM: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("milligram", "mg", &(0.001 * &*GRAM)));
pub static TON: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("ton", "ton", &(1000.0 * &*KILOGRAM)));

pub fn register_mass_units(manager: &UnitManager) {
    for unit in [&KILOGRAM, &GRAM, &MILLIGRAM, &TON] {
        manager.register_unit((**unit).clone());
    }
}

/// Mass-amount constructors on bare numbers.
pub trait MassAmounts {
    fn kilograms(self) -> Amount;
    fn grams(self) -> Amount;
}

impl MassAmounts for f64 {
    fn kilograms(self) -> Amount {
        Amount::new(self, KILOGRAM.clone())
    }

    fn grams(self) -> Amount {
        Amount::new(self, GRAM.clone())
    }
}
