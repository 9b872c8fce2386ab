//! Closed-form thermal efficiencies of the ideal cycles.
//!
//! All functions are pure and total over the physical domain.
//! Inputs outside that domain fail with [`CycleError::InvalidParameter`]
//! instead of producing NaN or infinity.

use std::fmt;

use uom::si::{
    f64::Ratio,
    ratio::{percent, ratio},
};

use crate::{
    Cycle, CycleParameters,
    error::{CycleError, Field, ensure_finite},
    params::{
        check_compression_ratio, check_cutoff_ratio, check_heat_capacity_ratio,
        check_heat_release_split,
    },
};

/// The thermal efficiency of one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyResult {
    /// The cycle this efficiency belongs to.
    pub cycle: Cycle,

    /// Thermal efficiency `η`, within `[0, 1)` for valid inputs.
    pub eta: f64,
}

impl EfficiencyResult {
    /// Returns the efficiency as a dimensionless quantity.
    #[must_use]
    pub fn ratio(&self) -> Ratio {
        Ratio::new::<ratio>(self.eta)
    }

    /// Returns the efficiency in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.ratio().get::<percent>()
    }
}

impl fmt::Display for EfficiencyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} %", self.cycle, self.percent())
    }
}

/// Computes the efficiency of `cycle` for the given parameters.
///
/// The heat-release split only affects [`Cycle::Seliger`], and the cutoff
/// ratio is ignored by [`Cycle::Otto`].
///
/// # Errors
///
/// Returns [`CycleError::InvalidParameter`] if a derived quantity overflows,
/// which only happens for extreme cutoff ratios.
pub fn compute_efficiency(
    cycle: Cycle,
    params: &CycleParameters,
) -> Result<EfficiencyResult, CycleError> {
    let r = params.compression_ratio();
    let rho = params.cutoff_ratio();
    let alpha = params.heat_release_split();
    let kappa = params.heat_capacity_ratio();

    let eta = match cycle {
        Cycle::Otto => otto_eta(r, kappa),
        Cycle::Diesel => diesel_eta(r, rho, kappa),
        Cycle::Seliger => seliger_eta(r, rho, alpha, kappa),
    };
    let eta = ensure_finite(Field::CutoffRatio, rho, eta)?;

    Ok(EfficiencyResult { cycle, eta })
}

/// Computes the Otto efficiency `η = 1 − r^−(κ−1)`.
///
/// # Errors
///
/// Returns [`CycleError::InvalidParameter`] if `r ≤ 1` or `κ ≤ 1`.
pub fn otto(r: f64, kappa: f64) -> Result<f64, CycleError> {
    let r = check_compression_ratio(r)?.into_inner();
    let kappa = check_heat_capacity_ratio(kappa)?.into_inner();

    Ok(otto_eta(r, kappa))
}

/// Computes the Diesel efficiency `η = 1 − r^−(κ−1) · (ρ^κ − 1) / (κ(ρ − 1))`.
///
/// At `ρ = 1` the cutoff term has a removable singularity with limit one,
/// and the result equals [`otto`] exactly.
///
/// # Errors
///
/// Returns [`CycleError::InvalidParameter`] if `r ≤ 1`, `ρ < 1`, `κ ≤ 1`,
/// or if the cutoff ratio so far exceeds `r` that the result overflows.
pub fn diesel(r: f64, rho: f64, kappa: f64) -> Result<f64, CycleError> {
    let r = check_compression_ratio(r)?.into_inner();
    let rho = check_cutoff_ratio(rho)?.into_inner();
    let kappa = check_heat_capacity_ratio(kappa)?.into_inner();

    ensure_finite(Field::CutoffRatio, rho, diesel_eta(r, rho, kappa))
}

/// Computes the Seliger efficiency as `(1 − α)·η_Diesel + α·η_Otto`.
///
/// The result is affine in `α`: exactly the Diesel efficiency at `α = 0`
/// and exactly the Otto efficiency at `α = 1`.
///
/// # Errors
///
/// Returns [`CycleError::InvalidParameter`] if `r ≤ 1`, `ρ < 1`, `κ ≤ 1`,
/// `α ∉ [0, 1]`, or if the cutoff ratio so far exceeds `r` that the result
/// overflows.
pub fn seliger(r: f64, rho: f64, alpha: f64, kappa: f64) -> Result<f64, CycleError> {
    let r = check_compression_ratio(r)?.into_inner();
    let rho = check_cutoff_ratio(rho)?.into_inner();
    let alpha = check_heat_release_split(alpha)?.into_inner();
    let kappa = check_heat_capacity_ratio(kappa)?.into_inner();

    ensure_finite(Field::CutoffRatio, rho, seliger_eta(r, rho, alpha, kappa))
}

/// Computes the logarithmic "explicit" Seliger expression
/// `η = 1 − r^−(κ−1) · [(ρ^κ − 1) / (κ(ρ − 1)) + α·((ρ^κ − 1) / ρ^κ − ln ρ)]`.
///
/// This is the form some textbooks quote alongside the affine formula. It
/// agrees with [`seliger`] only at `α = 0` or `ρ = 1` and is not
/// used by [`compute_efficiency`]. It is kept so callers can compare the two.
///
/// # Errors
///
/// Returns [`CycleError::InvalidParameter`] under the same conditions as [`seliger`].
pub fn seliger_explicit(r: f64, rho: f64, alpha: f64, kappa: f64) -> Result<f64, CycleError> {
    let r = check_compression_ratio(r)?.into_inner();
    let rho = check_cutoff_ratio(rho)?.into_inner();
    let alpha = check_heat_release_split(alpha)?.into_inner();
    let kappa = check_heat_capacity_ratio(kappa)?.into_inner();

    // (ρ^κ − 1) / ρ^κ, without forming ρ^κ.
    let released = -(-kappa * rho.ln()).exp_m1();
    let correction = released - rho.ln();
    let eta = diesel_eta(r, rho, kappa) - alpha * r.powf(1.0 - kappa) * correction;

    ensure_finite(Field::CutoffRatio, rho, eta)
}

fn otto_eta(r: f64, kappa: f64) -> f64 {
    1.0 - r.powf(1.0 - kappa)
}

fn diesel_eta(r: f64, rho: f64, kappa: f64) -> f64 {
    if rho == 1.0 {
        return otto_eta(r, kappa);
    }
    1.0 - ((1.0 - kappa) * r.ln() + ln_cutoff_term(rho, kappa)).exp()
}

fn seliger_eta(r: f64, rho: f64, alpha: f64, kappa: f64) -> f64 {
    (1.0 - alpha) * diesel_eta(r, rho, kappa) + alpha * otto_eta(r, kappa)
}

/// Evaluates `ln[(ρ^κ − 1) / (κ(ρ − 1))]`, which tends to zero as `ρ → 1`.
///
/// Near `ρ = 1` the ratio is formed with `exp_m1` and `ln_1p` so the
/// difference stays accurate. For large `κ·ln ρ` the logarithm is taken term
/// by term, so `ρ^κ` is never formed and cannot overflow.
fn ln_cutoff_term(rho: f64, kappa: f64) -> f64 {
    let excess = rho - 1.0;
    if excess == 0.0 {
        return 0.0;
    }
    let exponent = kappa * excess.ln_1p();
    if exponent <= 1.0 {
        (exponent.exp_m1() / (kappa * excess)).ln()
    } else {
        exponent + (-(-exponent).exp()).ln_1p() - (kappa * excess).ln()
    }
}
