use std::fmt;

use cycles_core::constraint::{Constrained, Constraint, ConstraintError};
use thiserror::Error;

/// Errors that may occur when evaluating a cycle.
///
/// Every failure is a domain error on one input. Nothing is retried or
/// recovered internally, and no partial result is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CycleError {
    /// An input lies outside its physical or numeric domain.
    #[error("invalid {field} ({value}): {reason}")]
    InvalidParameter {
        field: Field,
        value: f64,
        reason: ConstraintError,
    },
}

impl CycleError {
    /// Returns the offending field.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidParameter { field, .. } => *field,
        }
    }

    pub(crate) fn invalid(field: Field, value: f64, reason: ConstraintError) -> Self {
        Self::InvalidParameter {
            field,
            value,
            reason,
        }
    }
}

/// Names the input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Compression ratio `r = V1 / V2`.
    CompressionRatio,
    /// Cutoff ratio `ρ = V3 / V2`.
    CutoffRatio,
    /// Seliger heat-release split `α`.
    HeatReleaseSplit,
    /// Heat-capacity ratio `κ = cp / cv`.
    HeatCapacityRatio,
    /// Samples per curved or isobaric leg.
    Samples,
    /// Samples per isochoric leg.
    IsochoricSamples,
    /// Otto peak-to-compression pressure ratio.
    PeakPressureRatio,
    /// Seliger constant-volume pressure rise at `α = 1`.
    SeligerPressureRise,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CompressionRatio => "compression ratio r",
            Self::CutoffRatio => "cutoff ratio ρ",
            Self::HeatReleaseSplit => "heat-release split α",
            Self::HeatCapacityRatio => "heat-capacity ratio κ",
            Self::Samples => "sample count",
            Self::IsochoricSamples => "isochoric sample count",
            Self::PeakPressureRatio => "peak pressure ratio",
            Self::SeligerPressureRise => "Seliger pressure rise",
        };
        f.write_str(name)
    }
}

/// Wraps `value` in constraint `C`, tagging a violation with `field`.
pub(crate) fn constrain<C: Constraint<f64>>(
    field: Field,
    value: f64,
) -> Result<Constrained<f64, C>, CycleError> {
    Constrained::new(value).map_err(|reason| CycleError::invalid(field, value, reason))
}

/// Fails with [`ConstraintError::NotFinite`] if a derived quantity overflowed.
pub(crate) fn ensure_finite(field: Field, input: f64, derived: f64) -> Result<f64, CycleError> {
    if derived.is_finite() {
        Ok(derived)
    } else {
        Err(CycleError::invalid(field, input, ConstraintError::NotFinite))
    }
}
