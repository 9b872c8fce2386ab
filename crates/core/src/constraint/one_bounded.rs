use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing a finite value strictly greater than one.
///
/// Compression ratios and heat-capacity ratios live here: a ratio of exactly
/// one means no compression, or an isentropic exponent with no temperature
/// change, and both make the cycle formulas degenerate.
///
/// # Examples
///
/// ```
/// use cycles_core::constraint::GreaterThanOne;
///
/// assert!(GreaterThanOne::new(1.4).is_ok());
/// assert!(GreaterThanOne::new(1.0).is_err());
/// assert!(GreaterThanOne::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// Constructs `Constrained<T, GreaterThanOne>` if `1 < value < ∞`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to one.
    /// - [`ConstraintError::NotFinite`] if infinite.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, GreaterThanOne>, ConstraintError> {
        Constrained::<T, GreaterThanOne>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less | Ordering::Equal) => Err(ConstraintError::BelowMinimum),
            Some(Ordering::Greater) if !value.is_finite() => Err(ConstraintError::NotFinite),
            Some(Ordering::Greater) => Ok(()),
        }
    }
}

/// Marker type enforcing a finite value of at least one.
///
/// Cutoff ratios and peak pressure ratios live here: exactly one is the
/// valid "no heat added at this step" limit.
///
/// # Examples
///
/// ```
/// use cycles_core::constraint::AtLeastOne;
///
/// assert!(AtLeastOne::new(1.0).is_ok());
/// assert!(AtLeastOne::new(2.0).is_ok());
/// assert!(AtLeastOne::new(0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastOne;

impl AtLeastOne {
    /// Constructs `Constrained<T, AtLeastOne>` if `1 ≤ value < ∞`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than one.
    /// - [`ConstraintError::NotFinite`] if infinite.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, AtLeastOne>, ConstraintError> {
        Constrained::<T, AtLeastOne>::new(value)
    }

    /// Returns one as a constrained value.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, AtLeastOne> {
        Constrained::new_unchecked(T::one())
    }
}

impl<T: UnitBounds> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            Some(_) if !value.is_finite() => Err(ConstraintError::NotFinite),
            Some(_) => Ok(()),
        }
    }
}
