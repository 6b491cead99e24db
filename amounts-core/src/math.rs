//! Aggregate helpers over amounts
//!
//! Counterparts of the usual scalar helpers, dimension-checked: every
//! function converts through the given registry and fails on incompatible
//! units instead of mixing them.

use std::cmp::Ordering;

use crate::{Amount, AmountError, Unit, UnitManager};

/// The larger of two amounts, compared after conversion.
pub fn max(a: &Amount, b: &Amount, manager: &UnitManager) -> Result<Amount, AmountError> {
    Ok(match a.compare_to(b, manager)? {
        Ordering::Less => b.clone(),
        _ => a.clone(),
    })
}

/// The smaller of two amounts, compared after conversion.
pub fn min(a: &Amount, b: &Amount, manager: &UnitManager) -> Result<Amount, AmountError> {
    Ok(match a.compare_to(b, manager)? {
        Ordering::Greater => b.clone(),
        _ => a.clone(),
    })
}

/// Clamps an amount between two bounds of compatible units.
pub fn clamp(
    amount: &Amount,
    minimum: &Amount,
    maximum: &Amount,
    manager: &UnitManager,
) -> Result<Amount, AmountError> {
    max(minimum, &min(amount, maximum, manager)?, manager)
}

/// Sums amounts, expressed in the unit of the first; an empty sequence sums
/// to zero of [`Unit::none`].
pub fn sum<I>(amounts: I, manager: &UnitManager) -> Result<Amount, AmountError>
where
    I: IntoIterator<Item = Amount>,
{
    let mut iter = amounts.into_iter();
    let mut total = match iter.next() {
        Some(first) => first,
        None => return Ok(Amount::zero(Unit::none())),
    };
    for amount in iter {
        total = total.add(&amount, manager)?;
    }
    Ok(total)
}

/// Arithmetic mean of amounts, expressed in the unit of the first.
///
/// An empty sequence yields a NaN-valued dimensionless amount, consistent
/// with the division-by-zero policy.
pub fn average<I>(amounts: I, manager: &UnitManager) -> Result<Amount, AmountError>
where
    I: IntoIterator<Item = Amount>,
{
    let mut iter = amounts.into_iter();
    let mut total = match iter.next() {
        Some(first) => first,
        None => return Ok(Amount::new(f64::NAN, Unit::none())),
    };
    let mut count = 1usize;
    for amount in iter {
        total = total.add(&amount, manager)?;
        count += 1;
    }
    Ok(total / count as f64)
}
