//! Electric units

use std::sync::LazyLock;

use amounts_core::{Unit, UnitManager};

use crate::energy::WATT;
use crate::time::SECOND;
use crate::types::ELECTRIC_CURRENT;

pub static AMPERE: LazyLock<Unit> =
    LazyLock::new(|| Unit::new("ampere", "A", ELECTRIC_CURRENT.clone()));
pub static MILLIAMPERE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("milliampere", "mA", &(0.001 * &*AMPERE)));

pub static COULOMB: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("coulomb", "C", &(&*SECOND * &*AMPERE)));
pub static VOLT: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("volt", "V", &(&*WATT / &*AMPERE)));
pub static OHM: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("ohm", "\u{3a9}", &(&*VOLT / &*AMPERE)));
pub static FARAD: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("farad", "F", &(&*COULOMB / &*VOLT)));

pub fn register_electric_units(manager: &UnitManager) {
    for unit in [&AMPERE, &MILLIAMPERE, &COULOMB, &VOLT, &OHM, &FARAD] {
        manager.register_unit((**unit).clone());
    }
}
