//! Numeric domains checked once, at construction.
//!
//! Cycle inputs live on restricted domains: a compression ratio must exceed
//! one, a heat-release split must lie in `[0, 1]`, a pressure rise cannot be
//! negative. Wrapping a value in [`Constrained<T, C>`] records that its
//! domain check `C` has passed, so code holding the wrapper never repeats it.
//!
//! Markers provided here:
//!
//! - [`NonNegative`]: `x ≥ 0`
//! - [`AtLeastOne`]: `x ≥ 1`, finite
//! - [`GreaterThanOne`]: `x > 1`, finite
//! - [`UnitInterval`]: `0 ≤ x ≤ 1`
//!
//! New domains are zero-sized types implementing [`Constraint<T>`].

mod non_negative;
mod one_bounded;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use one_bounded::{AtLeastOne, GreaterThanOne};
pub use unit_interval::{UnitBounds, UnitInterval};

/// A domain check on values of type `T`.
pub trait Constraint<T> {
    /// Checks that `value` lies in the domain.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing why `value` is outside it.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value of type `T` known to satisfy constraint `C`.
///
/// # Example
///
/// ```
/// use cycles_core::constraint::{Constrained, GreaterThanOne};
///
/// let r = Constrained::<_, GreaterThanOne>::new(18.0).unwrap();
/// assert_eq!(r.into_inner(), 18.0);
///
/// assert!(Constrained::<_, GreaterThanOne>::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the constraint's error if `value` is outside its domain.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self::new_unchecked(value))
    }

    /// Wraps a value that satisfies `C` by construction, such as `0` or `1`.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
