//! Length units

use std::sync::LazyLock;

use amounts_core::{Amount, Unit, UnitManager};

use crate::types::LENGTH;

pub static METER: LazyLock<Unit> = LazyLock::new(|| Unit::new("meter", "m", LENGTH.clone()));
pub static PICOMETER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("picometer", "pm", &(0.000000000001 * &*METER)));
pub static NANOMETER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("nanometer", "nm", &(0.000000001 * &*METER)));
pub static MICROMETER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("micrometer", "\u{b5}m", &(0.000001 * &*METER)));
pub static MILLIMETER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("millimeter", "mm", &(0.001 * &*METER)));
pub static CENTIMETER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("centimeter", "cm", &(0.01 * &*METER)));
pub static DECIMETER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("decimeter", "dm", &(0.1 * &*METER)));
pub static DECAMETER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("decameter", "Dm", &(10.0 * &*METER)));
pub static HECTOMETER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("hectometer", "Hm", &(100.0 * &*METER)));
pub static KILOMETER: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("kilometer", "km", &(1000.0 * &*METER)));

pub static INCH: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("inch", "in", &(0.0254 * &*METER)));
pub static FOOT: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("foot", "ft", &(12.0 * &*INCH)));
pub static YARD: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("yard", "yd", &(36.0 * &*INCH)));
pub static MILE: LazyLock<Unit> = LazyLock::new(|| Unit::from_base("mile", "mi", &(5280.0 * &*FOOT)));
pub static NAUTICAL_MILE: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("nautical mile", "nmi", &(1852.0 * &*METER)));

pub static LIGHT_YEAR: LazyLock<Unit> =
    LazyLock::new(|| Unit::from_base("light-year", "ly", &(9460730472580800.0 * &*METER)));

pub fn register_length_units(manager: &UnitManager) {
    for unit in [
        &METER,
        &PICOMETER,
        &NANOMETER,
        &MICROMETER,
        &MILLIMETER,
        &CENTIMETER,
        &DECIMETER,
        &DECAMETER,
        &HECTOMETER,
        &KILOMETER,
        &INCH,
        &FOOT,
        &YARD,
        &MILE,
        &NAUTICAL_MILE,
        &LIGHT_YEAR,
    ] {
        manager.register_unit((**unit).clone());
    }
}

/// Length-amount constructors on bare numbers, `2.5.kilometers()` style.
pub trait LengthAmounts {
    fn meters(self) -> Amount;
    fn millimeters(self) -> Amount;
    fn centimeters(self) -> Amount;
    fn kilometers(self) -> Amount;
}

impl LengthAmounts for f64 {
    fn meters(self) -> Amount {
        Amount::new(self, METER.clone())
    }

    fn millimeters(self) -> Amount {
        Amount::new(self, MILLIMETER.clone())
    }

    fn centimeters(self) -> Amount {
        Amount::new(self, CENTIMETER.clone())
    }

    fn kilometers(self) -> Amount {
        Amount::new(self, KILOMETER.clone())
    }
}
