use cycles_core::constraint::{AtLeastOne, Constrained, ConstraintError, NonNegative};

use crate::error::{CycleError, Field, constrain};

/// Rendering and presentation inputs for diagram construction.
///
/// None of these change the physics of a cycle:
///
/// - `samples` and `isochoric_samples` set how many points each leg carries.
///   Any count of two or more is valid; more points give smoother curves.
/// - `peak_pressure_ratio` sets how far Otto combustion raises pressure,
///   as `p3 / p2`.
/// - `seliger_pressure_rise` sets the Seliger constant-volume rise at
///   `α = 1`. The split pressure is `p2 · (1 + α · rise)`.
///
/// Without a heat-input parameter the peak pressures are display choices.
/// The defaults reproduce the classic textbook look: Otto triples the
/// compression pressure and Seliger rises by `2.5 α`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSettings", into = "RawSettings")
)]
pub struct DiagramSettings {
    samples: usize,
    isochoric_samples: usize,
    peak_pressure_ratio: Constrained<f64, AtLeastOne>,
    seliger_pressure_rise: Constrained<f64, NonNegative>,
}

const DEFAULT_SAMPLES: usize = 100;
const DEFAULT_ISOCHORIC_SAMPLES: usize = 20;
const DEFAULT_PEAK_PRESSURE_RATIO: f64 = 3.0;
const DEFAULT_SELIGER_PRESSURE_RISE: f64 = 2.5;

impl Default for DiagramSettings {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(
            DEFAULT_SAMPLES,
            DEFAULT_ISOCHORIC_SAMPLES,
            DEFAULT_PEAK_PRESSURE_RATIO,
            DEFAULT_SELIGER_PRESSURE_RISE,
        )
        .unwrap()
    }
}

impl DiagramSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameter`] if a sample count is below
    /// two, if `peak_pressure_ratio < 1`, if `seliger_pressure_rise < 0`,
    /// or if either ratio is not finite.
    pub fn new(
        samples: usize,
        isochoric_samples: usize,
        peak_pressure_ratio: f64,
        seliger_pressure_rise: f64,
    ) -> Result<Self, CycleError> {
        Ok(Self {
            samples: check_samples(Field::Samples, samples)?,
            isochoric_samples: check_samples(Field::IsochoricSamples, isochoric_samples)?,
            peak_pressure_ratio: constrain(Field::PeakPressureRatio, peak_pressure_ratio)?,
            seliger_pressure_rise: check_pressure_rise(seliger_pressure_rise)?,
        })
    }

    /// Returns the number of points on curved and isobaric legs.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns the number of points on isochoric legs.
    #[must_use]
    pub fn isochoric_samples(&self) -> usize {
        self.isochoric_samples
    }

    /// Returns the Otto combustion pressure ratio `p3 / p2`.
    #[must_use]
    pub fn peak_pressure_ratio(&self) -> f64 {
        *self.peak_pressure_ratio.as_ref()
    }

    /// Returns the Seliger constant-volume pressure rise at `α = 1`.
    #[must_use]
    pub fn seliger_pressure_rise(&self) -> f64 {
        *self.seliger_pressure_rise.as_ref()
    }

    /// Returns settings with a different sample count for curved and isobaric legs.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameter`] if `samples < 2`.
    pub fn with_samples(self, samples: usize) -> Result<Self, CycleError> {
        Ok(Self {
            samples: check_samples(Field::Samples, samples)?,
            ..self
        })
    }

    /// Returns settings with a different sample count for isochoric legs.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameter`] if `isochoric_samples < 2`.
    pub fn with_isochoric_samples(self, isochoric_samples: usize) -> Result<Self, CycleError> {
        Ok(Self {
            isochoric_samples: check_samples(Field::IsochoricSamples, isochoric_samples)?,
            ..self
        })
    }

    /// Returns settings with a different Otto peak pressure ratio.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameter`] if the ratio is below one or not finite.
    pub fn with_peak_pressure_ratio(self, peak_pressure_ratio: f64) -> Result<Self, CycleError> {
        Self::new(
            self.samples,
            self.isochoric_samples,
            peak_pressure_ratio,
            self.seliger_pressure_rise(),
        )
    }

    /// Returns settings with a different Seliger pressure rise.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameter`] if the rise is negative or not finite.
    pub fn with_seliger_pressure_rise(
        self,
        seliger_pressure_rise: f64,
    ) -> Result<Self, CycleError> {
        Self::new(
            self.samples,
            self.isochoric_samples,
            self.peak_pressure_ratio(),
            seliger_pressure_rise,
        )
    }
}

#[allow(clippy::cast_precision_loss)]
fn check_samples(field: Field, samples: usize) -> Result<usize, CycleError> {
    if samples < 2 {
        return Err(CycleError::invalid(
            field,
            samples as f64,
            ConstraintError::BelowMinimum,
        ));
    }
    Ok(samples)
}

fn check_pressure_rise(rise: f64) -> Result<Constrained<f64, NonNegative>, CycleError> {
    let rise = constrain::<NonNegative>(Field::SeligerPressureRise, rise)?;
    if !rise.as_ref().is_finite() {
        return Err(CycleError::invalid(
            Field::SeligerPressureRise,
            rise.into_inner(),
            ConstraintError::NotFinite,
        ));
    }
    Ok(rise)
}

/// Unvalidated mirror of [`DiagramSettings`] used for deserialization.
///
/// Missing fields take their default values.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSettings {
    samples: usize,
    isochoric_samples: usize,
    peak_pressure_ratio: f64,
    seliger_pressure_rise: f64,
}

#[cfg(feature = "serde")]
impl Default for RawSettings {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            isochoric_samples: DEFAULT_ISOCHORIC_SAMPLES,
            peak_pressure_ratio: DEFAULT_PEAK_PRESSURE_RATIO,
            seliger_pressure_rise: DEFAULT_SELIGER_PRESSURE_RISE,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawSettings> for DiagramSettings {
    type Error = CycleError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        Self::new(
            raw.samples,
            raw.isochoric_samples,
            raw.peak_pressure_ratio,
            raw.seliger_pressure_rise,
        )
    }
}

#[cfg(feature = "serde")]
impl From<DiagramSettings> for RawSettings {
    fn from(settings: DiagramSettings) -> Self {
        Self {
            samples: settings.samples(),
            isochoric_samples: settings.isochoric_samples(),
            peak_pressure_ratio: settings.peak_pressure_ratio(),
            seliger_pressure_rise: settings.seliger_pressure_rise(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn defaults() {
        let settings = DiagramSettings::default();
        assert_eq!(settings.samples(), 100);
        assert_eq!(settings.isochoric_samples(), 20);
        assert_eq!(settings.peak_pressure_ratio(), 3.0);
        assert_eq!(settings.seliger_pressure_rise(), 2.5);
    }

    #[test]
    fn minimum_sample_count_is_two() {
        assert!(DiagramSettings::default().with_samples(2).is_ok());
        assert_eq!(
            DiagramSettings::default().with_samples(1).unwrap_err().field(),
            Field::Samples
        );
        assert_eq!(
            DiagramSettings::default()
                .with_isochoric_samples(0)
                .unwrap_err()
                .field(),
            Field::IsochoricSamples
        );
    }

    #[test]
    fn pressure_ratios_are_validated() {
        assert!(DiagramSettings::default().with_peak_pressure_ratio(1.0).is_ok());
        assert_eq!(
            DiagramSettings::default()
                .with_peak_pressure_ratio(0.9)
                .unwrap_err()
                .field(),
            Field::PeakPressureRatio
        );
        assert!(DiagramSettings::default().with_seliger_pressure_rise(0.0).is_ok());
        assert_eq!(
            DiagramSettings::default()
                .with_seliger_pressure_rise(-1.0)
                .unwrap_err()
                .field(),
            Field::SeligerPressureRise
        );
        assert_eq!(
            DiagramSettings::default()
                .with_seliger_pressure_rise(f64::INFINITY)
                .unwrap_err(),
            CycleError::InvalidParameter {
                field: Field::SeligerPressureRise,
                value: f64::INFINITY,
                reason: ConstraintError::NotFinite,
            }
        );
    }
}
