//! Unit registry and conversion authority
//!
//! The [`UnitManager`] stores registered units indexed by name, by symbol and
//! by unit type, plus a directed table of conversion functions keyed by
//! `(from, to)` unit-type pairs. It is the single authority deciding between
//! factor conversion, function-graph conversion, and failure.
//!
//! Managers are ordinary values with interior synchronization: construct an
//! isolated instance per test, or use [`UnitManager::global`] as the shared
//! process-wide default.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use crate::{parse, Amount, AmountError, Unit, UnitType};

/// A unidirectional unit conversion function.
///
/// Registered for a specific `(from, to)` unit pair but applied to any pair
/// of units sharing those unit types; the registry aligns the input to the
/// registered `from` unit before calling, and rescales the output afterwards.
/// Functions receive the manager so composed conversions can route through a
/// third unit.
pub type ConversionFn = Arc<dyn Fn(&UnitManager, &Amount) -> Result<Amount, AmountError> + Send + Sync>;

/// A callback consulted when a unit name fails to resolve; returning a unit
/// registers it.
pub type UnitResolver = Arc<dyn Fn(&str) -> Option<Unit> + Send + Sync>;

struct ConversionSlot {
    /// The unit the input is aligned to before the function runs; the
    /// function's output rescales linearly to any unit of the target type.
    from: Unit,
    convert: ConversionFn,
}

#[derive(Default)]
struct Tables {
    all_units: Vec<Unit>,
    by_type: HashMap<UnitType, Vec<Unit>>,
    by_name: HashMap<String, Unit>,
    by_symbol: HashMap<String, Unit>,
    conversions: HashMap<(UnitType, UnitType), ConversionSlot>,
}

/// The unit registry.
pub struct UnitManager {
    tables: RwLock<Tables>,
    resolvers: RwLock<Vec<UnitResolver>>,
}

static GLOBAL: LazyLock<UnitManager> = LazyLock::new(UnitManager::new);

impl UnitManager {
    /// Creates an empty registry.
    pub fn new() -> UnitManager {
        UnitManager {
            tables: RwLock::new(Tables::default()),
            resolvers: RwLock::new(Vec::new()),
        }
    }

    /// The process-wide default registry.
    ///
    /// Starts empty; hosts populate it at startup (e.g. via a unit catalog's
    /// registration functions). Operator sugar on [`Amount`] resolves
    /// conversions against this instance.
    pub fn global() -> &'static UnitManager {
        &GLOBAL
    }

    /// Registers a unit in the name, symbol and unit-type indexes.
    ///
    /// Idempotent: re-registering an already present unit (same factor, unit
    /// type, name and symbol) is a no-op. A later registration under a
    /// colliding name or symbol wins that index, while the by-type list
    /// accumulates.
    pub fn register_unit(&self, unit: Unit) {
        let mut tables = self.write_tables();
        let present = tables
            .all_units
            .iter()
            .any(|u| u == &unit && u.name() == unit.name() && u.symbol() == unit.symbol());
        if present {
            return;
        }

        debug!(name = unit.name(), symbol = unit.symbol(), "registering unit");
        tables.all_units.push(unit.clone());
        tables
            .by_type
            .entry(unit.unit_type().clone())
            .or_default()
            .push(unit.clone());
        tables.by_name.insert(unit.name().to_string(), unit.clone());
        tables.by_symbol.insert(unit.symbol().to_string(), unit);
    }

    /// Registers a conversion function from one unit to another.
    ///
    /// The entry is keyed by the unit-type pair and overwrites any previous
    /// registration for that pair. Conversions are directional: the reverse
    /// transform must be registered separately.
    pub fn register_conversion<F>(&self, from: &Unit, to: &Unit, convert: F)
    where
        F: Fn(&UnitManager, &Amount) -> Result<Amount, AmountError> + Send + Sync + 'static,
    {
        debug!(from = from.name(), to = to.name(), "registering conversion");
        let key = (from.unit_type().clone(), to.unit_type().clone());
        self.write_tables().conversions.insert(
            key,
            ConversionSlot {
                from: from.clone(),
                convert: Arc::new(convert),
            },
        );
    }

    /// Appends a resolver to the fallback chain consulted by name lookups.
    pub fn add_resolver<F>(&self, resolver: F)
    where
        F: Fn(&str) -> Option<Unit> + Send + Sync + 'static,
    {
        self.resolvers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Arc::new(resolver));
    }

    /// Looks a unit up by name, falling back to the resolver chain; a
    /// resolver-supplied unit is registered before being returned.
    pub fn try_get_unit_by_name(&self, name: &str) -> Option<Unit> {
        if let Some(unit) = self.read_tables().by_name.get(name).cloned() {
            return Some(unit);
        }

        let resolvers: Vec<UnitResolver> = self
            .resolvers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        for resolver in resolvers {
            if let Some(unit) = resolver(name) {
                trace!(name, "unit supplied by resolver");
                self.register_unit(unit.clone());
                return Some(unit);
            }
        }
        None
    }

    /// Looks a unit up by name, erroring with [`AmountError::UnknownUnit`]
    /// after exhausting the resolver chain.
    pub fn get_unit_by_name(&self, name: &str) -> Result<Unit, AmountError> {
        self.try_get_unit_by_name(name)
            .ok_or_else(|| AmountError::UnknownUnit(name.to_string()))
    }

    /// Looks a unit up by symbol. Exact lookup only; no resolver fallback.
    pub fn get_unit_by_symbol(&self, symbol: &str) -> Result<Unit, AmountError> {
        self.read_tables()
            .by_symbol
            .get(symbol)
            .cloned()
            .ok_or_else(|| AmountError::UnknownUnit(symbol.to_string()))
    }

    /// Parses a unit expression against this registry.
    pub fn parse_unit(&self, s: &str) -> Result<Unit, AmountError> {
        parse::parse_unit(s, self)
    }

    /// All registered units, in registration order.
    pub fn units(&self) -> Vec<Unit> {
        self.read_tables().all_units.clone()
    }

    /// All registered units of the given unit type.
    pub fn units_of_type(&self, unit_type: &UnitType) -> Vec<Unit> {
        self.read_tables()
            .by_type
            .get(unit_type)
            .cloned()
            .unwrap_or_default()
    }

    /// The unit types for which at least one unit is registered.
    pub fn unit_types(&self) -> Vec<UnitType> {
        self.read_tables().by_type.keys().cloned().collect()
    }

    /// Whether a unit equal to the given one (by factor and unit type) is
    /// registered.
    pub fn is_registered(&self, unit: &Unit) -> bool {
        self.read_tables().all_units.iter().any(|u| u == unit)
    }

    /// Returns a registered named unit matching the given unit's factor and
    /// unit type.
    ///
    /// A unit that is already named is returned as-is without a registry
    /// check. Otherwise the by-type index is scanned for the first unit with
    /// an equal factor; failing that, `self_if_none` selects between echoing
    /// the input and returning `None`.
    pub fn resolve_to_named_unit(&self, unit: &Unit, self_if_none: bool) -> Option<Unit> {
        if unit.is_named() {
            return Some(unit.clone());
        }
        let tables = self.read_tables();
        if let Some(candidates) = tables.by_type.get(unit.unit_type()) {
            if let Some(found) = candidates.iter().find(|u| u.factor() == unit.factor()) {
                return Some(found.clone());
            }
        }
        if self_if_none {
            Some(unit.clone())
        } else {
            None
        }
    }

    /// Converts an amount to the given unit.
    ///
    /// Compatible units convert by pure factor scaling. Otherwise the
    /// conversion-function table is consulted for the unit-type pair: the
    /// amount is aligned to the entry's `from` unit, transformed, and the
    /// result rescaled to the requested unit. No entry means the conversion
    /// fails with [`AmountError::Conversion`].
    pub fn convert_to(&self, amount: &Amount, to_unit: &Unit) -> Result<Amount, AmountError> {
        // Identical unit: nothing to do. Structural identity, not numeric
        // equality: converting to an equal-factor unit with a different name
        // must still hand back the target unit.
        let unit = amount.unit();
        if unit == to_unit && unit.name() == to_unit.name() && unit.symbol() == to_unit.symbol() {
            return Ok(amount.clone());
        }

        if amount.unit().is_compatible_to(to_unit) {
            let value = amount.value() * amount.unit().factor() / to_unit.factor();
            return Ok(Amount::new(value, to_unit.clone()));
        }

        // Clone the slot out of the lock: conversion functions are free to
        // call back into this manager.
        let slot = {
            let tables = self.read_tables();
            let key = (amount.unit().unit_type().clone(), to_unit.unit_type().clone());
            tables
                .conversions
                .get(&key)
                .map(|slot| (slot.from.clone(), slot.convert.clone()))
        };

        match slot {
            Some((from, convert)) => {
                let aligned = self.convert_to(amount, &from)?;
                let transformed = convert(self, &aligned)?;
                self.convert_to(&transformed, to_unit)
            }
            None => Err(AmountError::conversion(amount.unit(), to_unit)),
        }
    }

    fn read_tables(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_tables(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for UnitManager {
    fn default() -> Self {
        UnitManager::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length() -> UnitType {
        UnitType::base("test-registry-length").unwrap()
    }

    fn temperature_a() -> UnitType {
        UnitType::base("test-registry-temp-a").unwrap()
    }

    fn temperature_b() -> UnitType {
        UnitType::base("test-registry-temp-b").unwrap()
    }

    fn meter() -> Unit {
        Unit::new("meter", "m", length())
    }

    fn kilometer() -> Unit {
        Unit::from_base("kilometer", "km", &(1000.0 * &meter()))
    }

    #[test]
    fn test_register_and_lookup() {
        let manager = UnitManager::new();
        manager.register_unit(meter());

        assert_eq!(manager.get_unit_by_name("meter").unwrap(), meter());
        assert_eq!(manager.get_unit_by_symbol("m").unwrap(), meter());
        assert!(manager.get_unit_by_name("nope").is_err());
        assert!(manager.get_unit_by_symbol("nope").is_err());
    }

    #[test]
    fn test_registration_is_idempotent() {
        let manager = UnitManager::new();
        manager.register_unit(meter());
        manager.register_unit(meter());

        assert_eq!(manager.units().len(), 1);
        assert_eq!(manager.units_of_type(&length()).len(), 1);
    }

    #[test]
    fn test_is_registered() {
        let manager = UnitManager::new();
        manager.register_unit(meter());

        assert!(manager.is_registered(&meter()));
        assert!(!manager.is_registered(&kilometer()));
    }

    #[test]
    fn test_resolver_fallback_registers_unit() {
        let manager = UnitManager::new();
        manager.add_resolver(|name| {
            (name == "fathom").then(|| {
                Unit::from_base(
                    "fathom",
                    "fm",
                    &(1.8288 * &Unit::new("meter", "m", UnitType::base("test-registry-length").unwrap())),
                )
            })
        });

        assert!(manager.try_get_unit_by_name("furlong").is_none());
        let fathom = manager.get_unit_by_name("fathom").unwrap();
        assert_eq!(fathom.symbol(), "fm");
        // The resolved unit was auto-registered.
        assert!(manager.is_registered(&fathom));
        assert_eq!(manager.get_unit_by_symbol("fm").unwrap(), fathom);
    }

    #[test]
    fn test_resolve_to_named_unit() {
        let manager = UnitManager::new();
        manager.register_unit(meter());
        manager.register_unit(kilometer());

        // Named units resolve to themselves.
        assert_eq!(
            manager.resolve_to_named_unit(&meter(), false).unwrap(),
            meter()
        );

        // An unnamed unit with a registered factor resolves to the match.
        let derived = 1000.0 * &meter();
        assert!(!derived.is_named());
        let resolved = manager.resolve_to_named_unit(&derived, false).unwrap();
        assert_eq!(resolved.name(), "kilometer");

        // No match: echo or absent, per the flag.
        let odd = 123.0 * &meter();
        assert!(manager.resolve_to_named_unit(&odd, false).is_none());
        assert_eq!(manager.resolve_to_named_unit(&odd, true).unwrap(), odd);
    }

    #[test]
    fn test_factor_conversion() {
        let manager = UnitManager::new();
        let amount = Amount::new(2.5, kilometer());
        let converted = manager.convert_to(&amount, &meter()).unwrap();
        assert_eq!(converted.value(), 2500.0);
        assert_eq!(converted.unit(), &meter());
    }

    #[test]
    fn test_conversion_function_applies_to_whole_family() {
        let manager = UnitManager::new();
        let celsius = Unit::new("celsius", "degC", temperature_a());
        let kelvin = Unit::new("kelvin", "K", temperature_b());
        let millikelvin = Unit::from_base("millikelvin", "mK", &(0.001 * &kelvin));
        manager.register_unit(celsius.clone());
        manager.register_unit(kelvin.clone());
        manager.register_unit(millikelvin.clone());

        let target = kelvin.clone();
        manager.register_conversion(&celsius, &kelvin, move |_, amount| {
            Ok(Amount::new(amount.value() + 273.15, target.clone()))
        });

        let boiling = Amount::new(100.0, celsius.clone());
        let in_kelvin = manager.convert_to(&boiling, &kelvin).unwrap();
        assert_eq!(in_kelvin.value(), 373.15);

        // The same entry serves any unit of the target family.
        let in_millikelvin = manager.convert_to(&boiling, &millikelvin).unwrap();
        assert_eq!(in_millikelvin.value(), 373150.0);

        // Directional: the reverse was never registered.
        let back = manager.convert_to(&in_kelvin, &celsius);
        assert!(matches!(back, Err(AmountError::Conversion { .. })));
    }

    #[test]
    fn test_incompatible_without_conversion_fails() {
        let manager = UnitManager::new();
        let second = Unit::new("second", "s", UnitType::base("test-registry-time").unwrap());
        let amount = Amount::new(1.0, meter());
        assert!(manager.convert_to(&amount, &second).is_err());
    }
}
