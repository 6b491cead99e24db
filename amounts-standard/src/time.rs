//! Time units

use std::sync::LazyLock;

use amounts_core::{Amount, Unit, UnitManager};

use crate::types::TIME;

pub static SECOND: LazyLock<Unit> = LazyLock::new(|| Unit::new("second", "s", TIME.clone()));
pub static MICROSECOND: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("microsecond", "\u{b5}s", &(0.000001 * &*SECOND)));
pub static MILLISECOND: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("millisecond", "ms", &(0.001 * &*SECOND)));
pub static MINUTE: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("minute", "min", &(60.0 * &*SECOND)));
pub static HOUR: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("hour", "h", &(3600.0 * &*SECOND)));
pub static DAY: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("day", "d", &(24.0 * &*HOUR)));

pub fn register_time_units(manager: &UnitManager) {
    for unit in [&SECOND, &MICROSECOND, &MILLISECOND, &MINUTE, &HOUR, &DAY] {
        manager.register_unit((**unit).clone());
    }
}

/// Time-amount constructors on bare numbers.
pub trait TimeAmounts {
    fn seconds(self) -> Amount;
    fn minutes(self) -> Amount;
    fn hours(self) -> Amount;
    fn days(self) -> Amount;
}

impl TimeAmounts for f64 {
    fn seconds(self) -> Amount {
        Amount::new(self, SECOND.clone())
    }

    fn minutes(self) -> Amount {
        Amount::new(self, MINUTE.clone())
    }

    fn hours(self) -> Amount {
        Amount::new(self, HOUR.clone())
    }

    fn days(self) -> Amount {
        Amount::new(self, DAY.clone())
    }
}
