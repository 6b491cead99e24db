//! Base-dimension interning and the dimension vector
//!
//! Every base physical dimension ("metre", "kilogram", ...) is interned once
//! to a stable index for the lifetime of the process. A [`UnitType`] is a
//! vector of signed exponents over those indices: `m/s²` is `[1, 0, -2]` when
//! metre, kilogram and second were interned in that order.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};
use std::sync::{LazyLock, RwLock};

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::AmountError;

/// Process-wide table of interned base-dimension names.
///
/// Read-mostly: lookups vastly outnumber registrations, which happen a
/// handful of times at startup.
static BASE_DIMENSIONS: LazyLock<RwLock<Vec<String>>> = LazyLock::new(|| RwLock::new(Vec::new()));

/// Interns a base-dimension name, returning its stable index.
///
/// Re-interning a known name returns the same index. Interning the same new
/// name from two threads concurrently yields a single index; the write path
/// re-checks the table under the write lock.
///
/// The '|' character is reserved for the textual encoding of unit types and
/// is rejected with [`AmountError::InvalidDimensionName`].
pub fn intern(name: &str) -> Result<usize, AmountError> {
    if name.contains('|') {
        return Err(AmountError::InvalidDimensionName(name.to_string()));
    }

    {
        let names = read_table();
        if let Some(index) = names.iter().position(|n| n == name) {
            return Ok(index);
        }
    }

    let mut names = BASE_DIMENSIONS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    // Another thread may have interned between the read and write locks.
    if let Some(index) = names.iter().position(|n| n == name) {
        return Ok(index);
    }
    names.push(name.to_string());
    Ok(names.len() - 1)
}

/// Returns the name registered for a dimension index, if any.
pub fn name_of(index: usize) -> Option<String> {
    read_table().get(index).cloned()
}

fn read_table() -> std::sync::RwLockReadGuard<'static, Vec<String>> {
    // A poisoned lock cannot leave the Vec half-updated; keep serving.
    BASE_DIMENSIONS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// The dimension vector of a unit: one signed exponent per interned base
/// dimension, implicitly zero beyond the stored length.
///
/// Stored canonically with trailing zeros trimmed, so vectors built through
/// different algebraic histories compare and hash identically. The hash is
/// computed once at construction.
#[derive(Debug, Clone)]
pub struct UnitType {
    exponents: Box<[i8]>,
    hash: u64,
}

impl UnitType {
    /// The dimensionless unit type, identity of the multiplicative algebra.
    pub fn none() -> UnitType {
        UnitType::from_exponents(Vec::new())
    }

    /// The unit type of a single base dimension (exponent 1), interning the
    /// name on first use.
    pub fn base(name: &str) -> Result<UnitType, AmountError> {
        let index = intern(name)?;
        let mut exponents = vec![0i8; index + 1];
        exponents[index] = 1;
        Ok(UnitType::from_exponents(exponents))
    }

    fn from_exponents(mut exponents: Vec<i8>) -> UnitType {
        while exponents.last() == Some(&0) {
            exponents.pop();
        }
        let mut hash = 0u64;
        for &exp in &exponents {
            hash = hash.wrapping_mul(31).wrapping_add(exp as u8 as u64);
        }
        UnitType {
            exponents: exponents.into_boxed_slice(),
            hash,
        }
    }

    /// Whether this is the dimensionless unit type.
    pub fn is_none(&self) -> bool {
        self.exponents.is_empty()
    }

    /// The exponent of the base dimension at `index` (zero if unstored).
    pub fn exponent(&self, index: usize) -> i8 {
        self.exponents.get(index).copied().unwrap_or(0)
    }

    /// Raises the unit type to a power by scaling every exponent.
    ///
    /// A power of zero yields the dimensionless unit type.
    pub fn power(&self, power: i32) -> UnitType {
        let exponents = self
            .exponents
            .iter()
            .map(|&e| (e as i32 * power) as i8)
            .collect();
        UnitType::from_exponents(exponents)
    }

    /// Elementwise sum of exponents after zero-extension.
    pub fn multiply(&self, other: &UnitType) -> UnitType {
        let len = self.exponents.len().max(other.exponents.len());
        let exponents = (0..len)
            .map(|i| self.exponent(i) + other.exponent(i))
            .collect();
        UnitType::from_exponents(exponents)
    }

    /// Elementwise difference of exponents after zero-extension.
    pub fn divide(&self, other: &UnitType) -> UnitType {
        let len = self.exponents.len().max(other.exponents.len());
        let exponents = (0..len)
            .map(|i| self.exponent(i) - other.exponent(i))
            .collect();
        UnitType::from_exponents(exponents)
    }

    fn nonzero_entries(&self) -> impl Iterator<Item = (usize, i8)> + '_ {
        self.exponents
            .iter()
            .enumerate()
            .filter(|(_, &e)| e != 0)
            .map(|(i, &e)| (i, e))
    }
}

impl PartialEq for UnitType {
    fn eq(&self, other: &Self) -> bool {
        self.exponents == other.exponents
    }
}

impl Eq for UnitType {}

impl Hash for UnitType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Default for UnitType {
    fn default() -> Self {
        UnitType::none()
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (index, exp) in self.nonzero_entries() {
            let name = name_of(index).unwrap_or_default();
            write!(f, "{}{}^{}", sep, name, exp)?;
            sep = " * ";
        }
        Ok(())
    }
}

impl Mul for &UnitType {
    type Output = UnitType;

    fn mul(self, rhs: &UnitType) -> UnitType {
        self.multiply(rhs)
    }
}

impl Mul for UnitType {
    type Output = UnitType;

    fn mul(self, rhs: UnitType) -> UnitType {
        self.multiply(&rhs)
    }
}

impl Div for &UnitType {
    type Output = UnitType;

    fn div(self, rhs: &UnitType) -> UnitType {
        self.divide(rhs)
    }
}

impl Div for UnitType {
    type Output = UnitType;

    fn div(self, rhs: UnitType) -> UnitType {
        self.divide(&rhs)
    }
}

// A unit type serializes by dimension *names*, not indices: interning order
// is a process-local accident and must not leak into persisted data.
impl Serialize for UnitType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut names = Vec::new();
        let mut exps = Vec::new();
        for (index, exp) in self.nonzero_entries() {
            names.push(name_of(index).unwrap_or_default());
            exps.push(exp);
        }
        let mut state = serializer.serialize_struct("UnitType", 2)?;
        state.serialize_field("names", &names)?;
        state.serialize_field("exps", &exps)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for UnitType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Encoded {
            names: Vec<String>,
            exps: Vec<i8>,
        }

        let encoded = Encoded::deserialize(deserializer)?;
        if encoded.names.len() != encoded.exps.len() {
            return Err(D::Error::custom("mismatched names/exps lengths"));
        }

        let mut exponents = Vec::new();
        for (name, exp) in encoded.names.iter().zip(encoded.exps) {
            let index = intern(name).map_err(D::Error::custom)?;
            if exponents.len() <= index {
                exponents.resize(index + 1, 0);
            }
            exponents[index] = exp;
        }
        Ok(UnitType::from_exponents(exponents))
    }
}
