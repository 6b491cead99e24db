//! Amount type - a scalar value with an associated unit
//!
//! Arithmetic is dimension-checked: addition converts the right operand into
//! the left operand's unit, multiplication and division compose units without
//! converting. Division by zero is not an error; IEEE infinities and NaN
//! propagate through the value while the unit algebra stays exact.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

use serde::{Deserialize, Serialize};

use crate::{AmountError, NumberFormat, Unit, UnitManager};

/// Number of decimal digits to which two amounts are rounded before being
/// considered equal. Absorbs the drift of repeated conversions.
static EQUALITY_PRECISION: AtomicU32 = AtomicU32::new(8);

/// The current equality precision in decimal digits (default 8).
pub fn equality_precision() -> u32 {
    EQUALITY_PRECISION.load(AtomicOrdering::Relaxed)
}

/// Sets the process-wide equality precision.
pub fn set_equality_precision(digits: u32) {
    EQUALITY_PRECISION.store(digits, AtomicOrdering::Relaxed);
}

pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// An immutable quantity: a `f64` value tagged with a [`Unit`].
///
/// An absent quantity is `Option<Amount>` at the call site; the amount type
/// itself has no null sentinel and its arithmetic is strict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amount {
    value: f64,
    unit: Unit,
}

impl Amount {
    /// Creates an amount from a value and unit.
    pub fn new(value: f64, unit: Unit) -> Amount {
        Amount { value, unit }
    }

    /// Creates an amount by resolving the unit name against a registry.
    pub fn from_name(value: f64, unit_name: &str, manager: &UnitManager) -> Result<Amount, AmountError> {
        Ok(Amount::new(value, manager.get_unit_by_name(unit_name)?))
    }

    /// An amount of zero in the given unit.
    pub fn zero(unit: Unit) -> Amount {
        Amount::new(0.0, unit)
    }

    /// The raw value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// A unit equivalent to this amount, e.g. `3 hour` as a unit of 3 hours.
    pub fn as_unit(&self) -> Unit {
        Unit::from_base(
            format!("{}*{}", self.value, self.unit.name()),
            format!("{}*{}", self.value, self.unit.symbol()),
            &(self.value * &self.unit),
        )
    }

    /// Converts to the given unit via the registry.
    pub fn converted_to(&self, unit: &Unit, manager: &UnitManager) -> Result<Amount, AmountError> {
        manager.convert_to(self, unit)
    }

    /// Converts to the given unit and rounds to a number of decimals.
    pub fn converted_to_rounded(
        &self,
        unit: &Unit,
        decimals: u32,
        manager: &UnitManager,
    ) -> Result<Amount, AmountError> {
        let converted = manager.convert_to(self, unit)?;
        Ok(Amount::new(round_to(converted.value, decimals), unit.clone()))
    }

    /// Converts to the unit registered under the given name.
    pub fn converted_to_name(&self, unit_name: &str, manager: &UnitManager) -> Result<Amount, AmountError> {
        self.converted_to(&manager.get_unit_by_name(unit_name)?, manager)
    }

    /// The value converted to the dimensionless [`Unit::none`].
    ///
    /// Errors unless the amount's unit is dimensionless-compatible.
    pub fn to_scalar(&self, manager: &UnitManager) -> Result<f64, AmountError> {
        Ok(self.converted_to(&Unit::none(), manager)?.value)
    }

    /// Splits the amount over an ordered list of compatible units, coarsest
    /// first: every component except the last is converted and truncated to
    /// an integer, the last receives the remainder rounded to `decimals`.
    ///
    /// Truncation error can make the final component round up to the next
    /// unit's carry boundary (59.999... seconds becomes 60); that result is
    /// returned as-is rather than re-carried.
    pub fn split(
        &self,
        units: &[Unit],
        decimals: u32,
        manager: &UnitManager,
    ) -> Result<Vec<Amount>, AmountError> {
        let mut parts = Vec::with_capacity(units.len());
        let mut rest = self.clone();

        let (last, leading) = match units.split_last() {
            Some(split) => split,
            None => return Ok(parts),
        };

        for unit in leading {
            let truncated = Amount::new(rest.converted_to(unit, manager)?.value.trunc(), unit.clone());
            rest = rest.sub(&truncated, manager)?;
            parts.push(truncated);
        }
        parts.push(rest.converted_to_rounded(last, decimals, manager)?);

        Ok(parts)
    }

    /// Sum of two amounts, in the left operand's unit.
    pub fn add(&self, other: &Amount, manager: &UnitManager) -> Result<Amount, AmountError> {
        let converted = manager.convert_to(other, &self.unit)?;
        Ok(Amount::new(self.value + converted.value, self.unit.clone()))
    }

    /// Difference of two amounts, in the left operand's unit.
    pub fn sub(&self, other: &Amount, manager: &UnitManager) -> Result<Amount, AmountError> {
        let converted = manager.convert_to(other, &self.unit)?;
        Ok(Amount::new(self.value - converted.value, self.unit.clone()))
    }

    /// Product of two amounts. Units compose; nothing converts, so the
    /// product of two compatible amounts keeps a compound unit rather than
    /// collapsing to a scalar.
    pub fn mul(&self, other: &Amount) -> Amount {
        Amount::new(self.value * other.value, &self.unit * &other.unit)
    }

    /// Quotient of two amounts. Units compose; division by zero propagates
    /// IEEE infinity through the value.
    pub fn div(&self, other: &Amount) -> Amount {
        Amount::new(self.value / other.value, &self.unit / &other.unit)
    }

    /// The amount scaled by a constant, keeping its unit.
    pub fn scaled(&self, scale: f64) -> Amount {
        Amount::new(self.value * scale, self.unit.clone())
    }

    /// The amount raised to an integer power.
    pub fn power(&self, power: i32) -> Amount {
        Amount::new(self.value.powi(power), self.unit.power(power))
    }

    /// The negated amount.
    pub fn negated(&self) -> Amount {
        Amount::new(-self.value, self.unit.clone())
    }

    /// The reciprocal amount (`1 / self`), with the inverted unit.
    pub fn inverse(&self) -> Amount {
        Amount::new(1.0 / self.value, 1.0 / &self.unit)
    }

    /// Orders two amounts after converting the right operand into the left
    /// operand's unit; amounts equal within [`equality_precision`] compare
    /// as equal. Errors when the units are not convertible.
    pub fn compare_to(&self, other: &Amount, manager: &UnitManager) -> Result<Ordering, AmountError> {
        let converted = manager.convert_to(other, &self.unit)?;
        let digits = equality_precision();
        if round_to(self.value, digits) == round_to(converted.value, digits) {
            Ok(Ordering::Equal)
        } else {
            Ok(self.value.total_cmp(&converted.value))
        }
    }

    /// Formats the amount.
    ///
    /// `format` is one of the two-letter codes `GG`, `GN`, `GS`, `NG`, `NN`,
    /// `NS` (value style General/Numeric, unit style General/Name/Symbol), or
    /// a custom numeric pattern containing `UG`/`UN`/`US` placeholders for
    /// the unit text. A `|unit-name` suffix converts before formatting; `|?`
    /// converts to the nearest registered named unit.
    pub fn format(
        &self,
        format: &str,
        culture: &NumberFormat,
        manager: &UnitManager,
    ) -> Result<String, AmountError> {
        let (body, conversion) = match format.split_once('|') {
            Some((body, target)) => (body, Some(target)),
            None => (format, None),
        };

        let amount = match conversion {
            Some("?") => {
                // self_if_none guarantees a unit comes back.
                match manager.resolve_to_named_unit(&self.unit, true) {
                    Some(named) => self.converted_to(&named, manager)?,
                    None => self.clone(),
                }
            }
            Some(target) => self.converted_to_name(target, manager)?,
            None => self.clone(),
        };

        let rendered = match body {
            "" | "GG" => format!("{} {}", culture.format_general(amount.value), amount.unit.symbol()),
            "GN" => format!("{} {}", culture.format_general(amount.value), amount.unit.name()),
            "GS" => format!("{} {}", culture.format_general(amount.value), amount.unit.symbol()),
            "NG" | "NS" => format!("{} {}", culture.format_numeric(amount.value, 2), amount.unit.symbol()),
            "NN" => format!("{} {}", culture.format_numeric(amount.value, 2), amount.unit.name()),
            pattern => {
                // Quoted so the numeric pattern language treats the unit
                // text as literal.
                let pattern = pattern
                    .replace("UG", &format!("\"{}\"", amount.unit.symbol()))
                    .replace("UN", &format!("\"{}\"", amount.unit.name()))
                    .replace("US", &format!("\"{}\"", amount.unit.symbol()));
                culture.format_pattern(amount.value, &pattern)
            }
        };

        Ok(rendered.trim_end().to_string())
    }

    /// Null-tolerant formatting convenience: an absent amount renders as the
    /// empty string.
    pub fn format_opt(
        amount: Option<&Amount>,
        format: &str,
        culture: &NumberFormat,
        manager: &UnitManager,
    ) -> Result<String, AmountError> {
        match amount {
            Some(amount) => amount.format(format, culture, manager),
            None => Ok(String::new()),
        }
    }

    /// Parses the textual representation of an amount.
    ///
    /// The empty string parses to `None`. The first space separates the
    /// numeric prefix (read in the given culture) from the unit expression,
    /// which may be wrapped in one layer of parentheses and may end in the
    /// literal token ` neg`, negating the value. Without a space the whole
    /// string is a bare number with [`Unit::none`].
    pub fn parse(
        s: &str,
        culture: &NumberFormat,
        manager: &UnitManager,
    ) -> Result<Option<Amount>, AmountError> {
        if s.is_empty() {
            return Ok(None);
        }

        let amount = match s.split_once(' ') {
            Some((value_text, unit_text)) => {
                let value = culture.parse(value_text)?;
                let unit_text = unit_text.strip_prefix('(').unwrap_or(unit_text);
                let unit_text = unit_text.strip_suffix(')').unwrap_or(unit_text);
                let (unit_text, negative) = match unit_text.strip_suffix(" neg") {
                    Some(stripped) => (stripped, true),
                    None => (unit_text, false),
                };
                let unit = Unit::parse(unit_text, manager)?;
                let amount = Amount::new(value, unit);
                if negative {
                    amount.negated()
                } else {
                    amount
                }
            }
            None => Amount::new(culture.parse(s)?, Unit::none()),
        };

        Ok(Some(amount))
    }
}

/// Equal when the right operand, converted into the left operand's unit,
/// matches the value to [`equality_precision`] digits. Amounts that cannot
/// be converted into each other are unequal.
impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            self.compare_to(other, UnitManager::global()),
            Ok(Ordering::Equal)
        )
    }
}

/// Ordering sugar over [`Amount::compare_to`] against the global registry;
/// incompatible amounts are unordered.
impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other, UnitManager::global()).ok()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!(
            "{} {}",
            NumberFormat::invariant().format_general(self.value),
            self.unit.symbol()
        );
        write!(f, "{}", rendered.trim_end())
    }
}

impl std::ops::Mul for &Amount {
    type Output = Amount;

    fn mul(self, rhs: &Amount) -> Amount {
        Amount::mul(self, rhs)
    }
}

impl std::ops::Mul for Amount {
    type Output = Amount;

    fn mul(self, rhs: Amount) -> Amount {
        Amount::mul(&self, &rhs)
    }
}

impl std::ops::Mul<f64> for &Amount {
    type Output = Amount;

    fn mul(self, rhs: f64) -> Amount {
        self.scaled(rhs)
    }
}

impl std::ops::Mul<f64> for Amount {
    type Output = Amount;

    fn mul(self, rhs: f64) -> Amount {
        self.scaled(rhs)
    }
}

impl std::ops::Mul<&Amount> for f64 {
    type Output = Amount;

    fn mul(self, rhs: &Amount) -> Amount {
        rhs.scaled(self)
    }
}

impl std::ops::Mul<Amount> for f64 {
    type Output = Amount;

    fn mul(self, rhs: Amount) -> Amount {
        rhs.scaled(self)
    }
}

impl std::ops::Div for &Amount {
    type Output = Amount;

    fn div(self, rhs: &Amount) -> Amount {
        Amount::div(self, rhs)
    }
}

impl std::ops::Div for Amount {
    type Output = Amount;

    fn div(self, rhs: Amount) -> Amount {
        Amount::div(&self, &rhs)
    }
}

impl std::ops::Div<f64> for &Amount {
    type Output = Amount;

    fn div(self, rhs: f64) -> Amount {
        Amount::new(self.value / rhs, self.unit.clone())
    }
}

impl std::ops::Div<f64> for Amount {
    type Output = Amount;

    fn div(self, rhs: f64) -> Amount {
        &self / rhs
    }
}

impl std::ops::Div<&Amount> for f64 {
    type Output = Amount;

    fn div(self, rhs: &Amount) -> Amount {
        rhs.inverse().scaled(self)
    }
}

impl std::ops::Div<Amount> for f64 {
    type Output = Amount;

    fn div(self, rhs: Amount) -> Amount {
        self / &rhs
    }
}

impl std::ops::Neg for &Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        self.negated()
    }
}

impl std::ops::Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        self.negated()
    }
}
