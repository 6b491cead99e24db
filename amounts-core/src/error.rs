//! Error type shared by the amounts crates

use thiserror::Error;

use crate::Unit;

/// Errors raised by unit resolution, conversion and textual parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// A unit name or symbol could not be resolved against the registry.
    #[error("no registered unit matches '{0}'")]
    UnknownUnit(String),

    /// Two units are not compatible and no conversion function is registered
    /// for their dimension pair.
    #[error("failed to convert from unit '{from}' to unit '{to}': units are not compatible and no conversion is defined")]
    Conversion { from: String, to: String },

    /// A base-dimension name contained the reserved '|' separator.
    #[error("the name of a unit type must not contain the '|' character: '{0}'")]
    InvalidDimensionName(String),

    /// The numeric part of a textual amount could not be parsed.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

impl AmountError {
    /// Conversion error naming both unit identities for diagnostics.
    ///
    /// Derived units can have an empty name, in which case the symbol is
    /// the more useful identity to report.
    pub(crate) fn conversion(from: &Unit, to: &Unit) -> Self {
        AmountError::Conversion {
            from: identity_of(from),
            to: identity_of(to),
        }
    }
}

fn identity_of(unit: &Unit) -> String {
    if unit.name().is_empty() {
        unit.symbol().to_string()
    } else {
        unit.name().to_string()
    }
}
