//! Amounts - dimension-safe quantities for Rust
//!
//! Models a measurement as a value paired with a unit, and keeps the two
//! honest through every operation: arithmetic checks dimensions, conversions
//! route through a registry that knows both scale factors and non-linear
//! conversion functions, and formatting/parsing round-trip through a small
//! culture-aware grammar.
//!
//! ```
//! use amounts::prelude::*;
//! use amounts::standard;
//! use amounts::standard::speed::KILOMETER_PER_HOUR;
//!
//! let manager = UnitManager::new();
//! standard::register_all(&manager);
//!
//! let distance = 120.0.kilometers();
//! let time = 1.5.hours();
//! let speed = distance.div(&time);
//! let kmh = speed.converted_to(&KILOMETER_PER_HOUR, &manager).unwrap();
//! assert_eq!(kmh, Amount::new(80.0, KILOMETER_PER_HOUR.clone()));
//! ```

pub use amounts_core::{
    equality_precision, parse_unit, set_equality_precision, Amount, AmountError, ConversionFn,
    NumberFormat, Unit, UnitFormat, UnitManager, UnitResolver, UnitType,
};
pub use amounts_core::{dimension, math};

pub use amounts_standard as standard;

/// Prelude for convenient imports
pub mod prelude {
    pub use amounts_core::prelude::*;
    pub use amounts_standard::prelude::*;
}
