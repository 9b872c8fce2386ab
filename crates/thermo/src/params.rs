//! Validated cycle parameters.

use std::ops::RangeInclusive;

use cycles_core::constraint::{AtLeastOne, Constrained, GreaterThanOne, UnitInterval};

use crate::error::{CycleError, Field, constrain};

/// The physical inputs shared by all three cycles.
///
/// A `CycleParameters` value always satisfies its domain:
///
/// - compression ratio `r > 1`
/// - cutoff ratio `ρ ≥ 1`
/// - heat-release split `0 ≤ α ≤ 1` (Seliger only)
/// - heat-capacity ratio `κ > 1`
///
/// All values are finite.
/// Construct with [`CycleParameters::new`]; there is no way to build an
/// out-of-domain instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawParameters", into = "RawParameters")
)]
pub struct CycleParameters {
    compression_ratio: Constrained<f64, GreaterThanOne>,
    cutoff_ratio: Constrained<f64, AtLeastOne>,
    heat_release_split: Constrained<f64, UnitInterval>,
    heat_capacity_ratio: Constrained<f64, GreaterThanOne>,
}

impl CycleParameters {
    /// Creates validated parameters.
    ///
    /// Fields are checked in argument order and the first violation is reported.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameter`] if any value is outside its domain.
    pub fn new(
        compression_ratio: f64,
        cutoff_ratio: f64,
        heat_release_split: f64,
        heat_capacity_ratio: f64,
    ) -> Result<Self, CycleError> {
        Ok(Self {
            compression_ratio: check_compression_ratio(compression_ratio)?,
            cutoff_ratio: check_cutoff_ratio(cutoff_ratio)?,
            heat_release_split: check_heat_release_split(heat_release_split)?,
            heat_capacity_ratio: check_heat_capacity_ratio(heat_capacity_ratio)?,
        })
    }

    /// Returns the compression ratio `r`.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        *self.compression_ratio.as_ref()
    }

    /// Returns the cutoff ratio `ρ`.
    #[must_use]
    pub fn cutoff_ratio(&self) -> f64 {
        *self.cutoff_ratio.as_ref()
    }

    /// Returns the heat-release split `α`.
    #[must_use]
    pub fn heat_release_split(&self) -> f64 {
        *self.heat_release_split.as_ref()
    }

    /// Returns the heat-capacity ratio `κ`.
    #[must_use]
    pub fn heat_capacity_ratio(&self) -> f64 {
        *self.heat_capacity_ratio.as_ref()
    }

    /// Returns a copy with a different heat-release split.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameter`] if `α` is outside `[0, 1]`.
    pub fn with_heat_release_split(self, heat_release_split: f64) -> Result<Self, CycleError> {
        Ok(Self {
            heat_release_split: check_heat_release_split(heat_release_split)?,
            ..self
        })
    }
}

impl Default for CycleParameters {
    /// Typical Diesel-range values: `r = 18`, `ρ = 2`, `α = 0.5`, `κ = 1.4`.
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(18.0, 2.0, 0.5, 1.4).unwrap()
    }
}

/// Conventional slider ranges for each parameter in an interactive front end.
///
/// These are UI conventions only. The core accepts any value in the physical
/// domain documented on [`CycleParameters`].
#[derive(Debug, Clone, PartialEq)]
pub struct UiRanges {
    pub compression_ratio: RangeInclusive<f64>,
    pub cutoff_ratio: RangeInclusive<f64>,
    pub heat_capacity_ratio: RangeInclusive<f64>,
    pub heat_release_split: RangeInclusive<f64>,
}

/// Slider ranges: `r ∈ [10, 25]`, `ρ ∈ [1.1, 3]`, `κ ∈ [1.2, 1.67]`, `α ∈ [0, 1]`.
pub const UI_RANGES: UiRanges = UiRanges {
    compression_ratio: 10.0..=25.0,
    cutoff_ratio: 1.1..=3.0,
    heat_capacity_ratio: 1.2..=1.67,
    heat_release_split: 0.0..=1.0,
};

/// Values seen in real engines, shown as hints beside the sliders.
///
/// Every range lies inside the matching [`UI_RANGES`] bound.
#[derive(Debug, Clone, PartialEq)]
pub struct TypicalRanges {
    /// Modern diesel engines.
    pub diesel_compression_ratio: RangeInclusive<f64>,
    /// Spark-ignition engines.
    pub otto_compression_ratio: RangeInclusive<f64>,
    /// Direct-injection engines.
    pub cutoff_ratio: RangeInclusive<f64>,
    /// Air near room temperature.
    pub heat_capacity_ratio: RangeInclusive<f64>,
    pub heat_release_split: RangeInclusive<f64>,
}

/// Typical values: diesel `r ∈ [16, 20]`, Otto `r ∈ [10, 14]`, `ρ ∈ [1.8, 2.5]`,
/// `κ ∈ [1.3, 1.4]`, `α ∈ [0.3, 0.6]`.
pub const TYPICAL_RANGES: TypicalRanges = TypicalRanges {
    diesel_compression_ratio: 16.0..=20.0,
    otto_compression_ratio: 10.0..=14.0,
    cutoff_ratio: 1.8..=2.5,
    heat_capacity_ratio: 1.3..=1.4,
    heat_release_split: 0.3..=0.6,
};

pub(crate) fn check_compression_ratio(
    r: f64,
) -> Result<Constrained<f64, GreaterThanOne>, CycleError> {
    constrain(Field::CompressionRatio, r)
}

pub(crate) fn check_cutoff_ratio(rho: f64) -> Result<Constrained<f64, AtLeastOne>, CycleError> {
    constrain(Field::CutoffRatio, rho)
}

pub(crate) fn check_heat_release_split(
    alpha: f64,
) -> Result<Constrained<f64, UnitInterval>, CycleError> {
    constrain(Field::HeatReleaseSplit, alpha)
}

pub(crate) fn check_heat_capacity_ratio(
    kappa: f64,
) -> Result<Constrained<f64, GreaterThanOne>, CycleError> {
    constrain(Field::HeatCapacityRatio, kappa)
}

/// Unvalidated mirror of [`CycleParameters`] used for deserialization.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParameters {
    compression_ratio: f64,
    cutoff_ratio: f64,
    heat_release_split: f64,
    heat_capacity_ratio: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParameters> for CycleParameters {
    type Error = CycleError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(
            raw.compression_ratio,
            raw.cutoff_ratio,
            raw.heat_release_split,
            raw.heat_capacity_ratio,
        )
    }
}

#[cfg(feature = "serde")]
impl From<CycleParameters> for RawParameters {
    fn from(params: CycleParameters) -> Self {
        Self {
            compression_ratio: params.compression_ratio(),
            cutoff_ratio: params.cutoff_ratio(),
            heat_release_split: params.heat_release_split(),
            heat_capacity_ratio: params.heat_capacity_ratio(),
        }
    }
}
