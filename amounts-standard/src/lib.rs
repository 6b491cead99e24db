//! Amounts Standard - the standard unit catalog
//!
//! SI base units, common derived units and relative units, declared as
//! statics and registered through plain functions:
//!
//! ```
//! use amounts_core::UnitManager;
//!
//! let manager = UnitManager::new();
//! amounts_standard::register_all(&manager);
//! assert!(manager.get_unit_by_symbol("km/h").is_ok());
//! ```
//!
//! Categories:
//! - Length (m, km, in, ft, mi, ...)
//! - Surface (m², ha, ...) and volume (L, m³, ...)
//! - Mass (Kg, g, ton)
//! - Time (s, min, h, d)
//! - Speed (m/s, km/h, kn, ...)
//! - Force, energy, power, pressure, frequency
//! - Electric (A, C, V, Ω, F)
//! - Temperature (K, °C, °F) with scale-conversion functions
//! - Relative (absolute, percentage)

pub mod electric;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod relative;
pub mod speed;
pub mod substance;
pub mod surface;
pub mod temperature;
pub mod time;
pub mod types;
pub mod volume;

pub use electric::register_electric_units;
pub use energy::register_energy_units;
pub use force::register_force_units;
pub use frequency::register_frequency_units;
pub use length::{register_length_units, LengthAmounts};
pub use mass::{register_mass_units, MassAmounts};
pub use pressure::register_pressure_units;
pub use relative::register_relative_units;
pub use speed::register_speed_units;
pub use substance::register_substance_units;
pub use surface::register_surface_units;
pub use temperature::{register_temperature_conversions, register_temperature_units};
pub use time::{register_time_units, TimeAmounts};
pub use volume::register_volume_units;

use amounts_core::UnitManager;

/// Registers every standard unit and conversion function.
pub fn register_all(manager: &UnitManager) {
    register_length_units(manager);
    register_surface_units(manager);
    register_volume_units(manager);
    register_mass_units(manager);
    register_time_units(manager);
    register_speed_units(manager);
    register_force_units(manager);
    register_energy_units(manager);
    register_pressure_units(manager);
    register_frequency_units(manager);
    register_electric_units(manager);
    register_substance_units(manager);
    register_temperature_units(manager);
    register_relative_units(manager);
    register_temperature_conversions(manager);
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{register_all, LengthAmounts, MassAmounts, TimeAmounts};
}
