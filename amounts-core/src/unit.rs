//! Unit representation and algebra
//!
//! A [`Unit`] pairs a conversion factor with a [`UnitType`]. Named units are
//! declared with an explicit name and symbol; units produced by algebra are
//! unnamed and carry a synthesized, non-canonical name and symbol.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use crate::{parse, AmountError, UnitManager, UnitType};

/// Selects which textual representation of a unit to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitFormat {
    /// The full unit name, e.g. "kilometer".
    Name,
    /// The unit symbol, e.g. "km".
    #[default]
    Symbol,
}

/// A unit of measurement: a scale factor over a dimension vector.
///
/// Two units are *compatible* when their unit types are equal; compatible
/// units convert into each other by pure factor scaling. Equality and hashing
/// consider only `(factor, unit_type)` — two differently named units with the
/// same factor and dimensions are the same unit for all numeric purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    name: String,
    symbol: String,
    factor: f64,
    unit_type: UnitType,
    named: bool,
}

impl Unit {
    /// Creates a named unit with factor 1.0 over the given unit type.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, unit_type: UnitType) -> Unit {
        Unit::build(name.into(), symbol.into(), 1.0, unit_type, true)
    }

    /// Creates a named unit that is a scaled view of an existing unit,
    /// inheriting its factor and unit type.
    ///
    /// The base is typically itself derived, e.g.
    /// `Unit::from_base("kilometer", "km", &(1000.0 * &meter))`.
    pub fn from_base(name: impl Into<String>, symbol: impl Into<String>, base: &Unit) -> Unit {
        Unit::build(name.into(), symbol.into(), base.factor, base.unit_type.clone(), true)
    }

    /// The empty unit: no name, factor 1.0, dimensionless.
    pub fn none() -> Unit {
        Unit::build(String::new(), String::new(), 1.0, UnitType::none(), true)
    }

    /// Parses a unit expression such as `"m/s"` or `"1000*Kg"` against the
    /// given registry.
    pub fn parse(s: &str, manager: &UnitManager) -> Result<Unit, AmountError> {
        parse::parse_unit(s, manager)
    }

    fn build(name: String, symbol: String, factor: f64, unit_type: UnitType, named: bool) -> Unit {
        Unit {
            name,
            symbol: sanitize_unit_string(symbol),
            factor,
            unit_type,
            named,
        }
    }

    pub(crate) fn derived(name: String, symbol: String, factor: f64, unit_type: UnitType) -> Unit {
        Unit::build(name, symbol, factor, unit_type, false)
    }

    /// The name of the unit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbol of the unit.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The scale factor relative to the dimension-native base of 1.0.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// The dimension vector of the unit.
    pub fn unit_type(&self) -> &UnitType {
        &self.unit_type
    }

    /// Whether this unit was declared with an explicit name, as opposed to
    /// being synthesized by algebra.
    pub fn is_named(&self) -> bool {
        self.named
    }

    /// Whether the other unit shares this unit's dimensions.
    pub fn is_compatible_to(&self, other: &Unit) -> bool {
        self.unit_type == other.unit_type
    }

    /// Errors with [`AmountError::Conversion`] unless the units are
    /// compatible.
    pub fn assert_compatibility(&self, other: &Unit) -> Result<(), AmountError> {
        if self.is_compatible_to(other) {
            Ok(())
        } else {
            Err(AmountError::conversion(self, other))
        }
    }

    /// Raises the unit to a power, e.g. `meter.power(3)` is a cubic meter.
    pub fn power(&self, power: i32) -> Unit {
        Unit::derived(
            format!("({}^{})", self.name, power),
            format!("{}^{}", self.symbol, power),
            self.factor.powi(power),
            self.unit_type.power(power),
        )
    }

    /// The product unit; factors multiply, dimensions add.
    pub fn multiply(&self, other: &Unit) -> Unit {
        Unit::derived(
            format!("({}*{})", self.name, other.name),
            format!("{}*{}", self.symbol, other.symbol),
            self.factor * other.factor,
            self.unit_type.multiply(&other.unit_type),
        )
    }

    /// The quotient unit; factors divide, dimensions subtract.
    pub fn divide(&self, other: &Unit) -> Unit {
        Unit::derived(
            format!("({}/{})", self.name, other.name),
            format!("{}/{}", self.symbol, other.symbol),
            self.factor / other.factor,
            self.unit_type.divide(&other.unit_type),
        )
    }

    /// Scales the unit by a constant, leaving its dimensions unchanged.
    ///
    /// Scaling by exactly 1.0 returns the unit as-is; repeated scalar
    /// multiplication must not pile up synthesized wrappers.
    pub fn scaled(&self, scale: f64) -> Unit {
        if scale == 1.0 {
            return self.clone();
        }
        Unit::derived(
            format!("({}*{})", scale, self.name),
            format!("{}*{}", scale, self.symbol),
            scale * self.factor,
            self.unit_type.clone(),
        )
    }

    /// Orders compatible units by factor; errors on incompatible units.
    pub fn compare_to(&self, other: &Unit) -> Result<Ordering, AmountError> {
        self.assert_compatibility(other)?;
        Ok(self.factor.total_cmp(&other.factor))
    }

    /// The name or symbol, per the requested format.
    pub fn as_text(&self, format: UnitFormat) -> &str {
        match format {
            UnitFormat::Name => &self.name,
            UnitFormat::Symbol => &self.symbol,
        }
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.factor == other.factor && self.unit_type == other.unit_type
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::none()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Collapses repeated `**` and `//` runs left behind by algebraic symbol
/// composition, to fixpoint.
pub(crate) fn sanitize_unit_string(mut s: String) -> String {
    while s.contains("**") {
        s = s.replace("**", "*");
    }
    while s.contains("//") {
        s = s.replace("//", "/");
    }
    s
}

impl Mul for &Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        self.multiply(rhs)
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        self.multiply(&rhs)
    }
}

impl Mul<&Unit> for f64 {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        rhs.scaled(self)
    }
}

impl Mul<Unit> for f64 {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        rhs.scaled(self)
    }
}

impl Mul<f64> for &Unit {
    type Output = Unit;

    fn mul(self, rhs: f64) -> Unit {
        self.scaled(rhs)
    }
}

impl Mul<f64> for Unit {
    type Output = Unit;

    fn mul(self, rhs: f64) -> Unit {
        self.scaled(rhs)
    }
}

impl Div for &Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        self.divide(rhs)
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        self.divide(&rhs)
    }
}

impl Div<f64> for &Unit {
    type Output = Unit;

    fn div(self, rhs: f64) -> Unit {
        Unit::derived(
            format!("({}/{})", self.name, rhs),
            format!("{}/{}", self.symbol, rhs),
            self.factor / rhs,
            self.unit_type.clone(),
        )
    }
}

impl Div<f64> for Unit {
    type Output = Unit;

    fn div(self, rhs: f64) -> Unit {
        &self / rhs
    }
}

impl Div<&Unit> for f64 {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        Unit::derived(
            format!("({}/{})", self, rhs.name),
            format!("{}/{}", self, rhs.symbol),
            self / rhs.factor,
            rhs.unit_type.power(-1),
        )
    }
}

impl Div<Unit> for f64 {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        self / &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("meter", "m", UnitType::base("test-unit-length").unwrap())
    }

    fn second() -> Unit {
        Unit::new("second", "s", UnitType::base("test-unit-time").unwrap())
    }

    fn kilometer() -> Unit {
        Unit::from_base("kilometer", "km", &(1000.0 * &meter()))
    }

    #[test]
    fn test_named_construction() {
        let m = meter();
        assert!(m.is_named());
        assert_eq!(m.factor(), 1.0);

        let km = kilometer();
        assert!(km.is_named());
        assert_eq!(km.factor(), 1000.0);
        assert!(km.is_compatible_to(&m));
    }

    #[test]
    fn test_algebra_is_unnamed() {
        let speed = meter() / second();
        assert!(!speed.is_named());
        assert_eq!(speed.symbol(), "m/s");
        assert_eq!(speed.name(), "(meter/second)");
    }

    #[test]
    fn test_power() {
        let m = meter();
        assert_eq!(m.power(1), m);
        let m2 = m.power(2);
        assert_eq!(m2.symbol(), "m^2");
        assert_eq!(*m2.unit_type(), m.unit_type().power(2));
        let inverse = m.power(-1);
        assert_eq!(inverse.factor(), 1.0);

        let km3 = kilometer().power(3);
        assert_eq!(km3.factor(), 1.0e9);
    }

    #[test]
    fn test_power_zero_is_none() {
        let u = kilometer().power(0);
        assert_eq!(u, Unit::none());
        assert_eq!(u.factor(), 1.0);
        assert!(u.unit_type().is_none());
    }

    #[test]
    fn test_scaling_by_one_returns_unit_unchanged() {
        let m = meter();
        let scaled = 1.0 * &m;
        assert_eq!(scaled.symbol(), "m");
        assert_eq!(scaled.name(), "meter");
        assert!(scaled.is_named());
    }

    #[test]
    fn test_scalar_division() {
        let half_meter = meter() / 2.0;
        assert_eq!(half_meter.factor(), 0.5);
        assert_eq!(*half_meter.unit_type(), *meter().unit_type());

        let per_meter = 1.0 / meter();
        assert_eq!(*per_meter.unit_type(), meter().unit_type().power(-1));
    }

    #[test]
    fn test_equality_ignores_names() {
        let a = Unit::new("metre", "mtr", UnitType::base("test-unit-length").unwrap());
        assert_eq!(a, meter());
        assert_ne!(meter(), kilometer());
        assert_ne!(meter(), second());
    }

    #[test]
    fn test_sanitize_collapses_operators() {
        assert_eq!(sanitize_unit_string("m**s".to_string()), "m*s");
        assert_eq!(sanitize_unit_string("m***s".to_string()), "m*s");
        assert_eq!(sanitize_unit_string("m//s".to_string()), "m/s");
    }

    #[test]
    fn test_compare_orders_by_factor() {
        assert_eq!(meter().compare_to(&kilometer()).unwrap(), Ordering::Less);
        assert_eq!(kilometer().compare_to(&meter()).unwrap(), Ordering::Greater);
        assert!(meter().compare_to(&second()).is_err());
    }

    #[test]
    fn test_assert_compatibility() {
        assert!(meter().assert_compatibility(&kilometer()).is_ok());
        let err = meter().assert_compatibility(&second()).unwrap_err();
        assert!(matches!(err, AmountError::Conversion { .. }));
    }

    #[test]
    fn test_serde_round_trip() {
        let speed = kilometer() / (3600.0 * &second());
        let json = serde_json::to_string(&speed).unwrap();
        let back: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, speed);
        assert_eq!(back.symbol(), speed.symbol());
    }
}
