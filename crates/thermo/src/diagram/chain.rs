//! Corner states and leg order for each cycle.
//!
//! A cycle is planned in two phases. [`plan`] derives every corner state and
//! fails on the first out-of-domain quantity, so no leg is ever sampled for
//! an invalid input. [`Step::sample`] then fills in the curve between two
//! corners and cannot fail.

use cycles_core::constraint::ConstraintError;

use crate::{
    Cycle, CycleParameters,
    error::{CycleError, Field, ensure_finite},
};

use super::{
    DiagramSettings, ProcessKind, ProcessLeg, StatePoint,
    sample::{isentropic, isentropic_pressure, isobaric, isochoric},
};

/// Normalized bottom-dead-center volume `V1`.
pub(super) const V1: f64 = 1.0;

/// Normalized intake pressure `p1`.
pub(super) const P1: f64 = 1.0;

/// One leg of a planned cycle, between two corner states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Step {
    pub(super) kind: ProcessKind,
    pub(super) from: StatePoint,
    pub(super) to: StatePoint,
}

impl Step {
    fn new(kind: ProcessKind, from: StatePoint, to: StatePoint) -> Self {
        Self { kind, from, to }
    }

    /// Returns `true` if the step starts and ends at the same state.
    pub(super) fn is_degenerate(&self) -> bool {
        self.from == self.to
    }

    /// Samples the path between the step's corner states.
    ///
    /// The first and last points are the corner states themselves. Volumes
    /// along an isentropic or isobaric leg are strictly monotonic, so a leg
    /// spanning only a few ulps keeps fewer samples than requested.
    pub(super) fn sample(&self, kappa: f64, settings: &DiagramSettings) -> ProcessLeg {
        let mut points = match self.kind {
            ProcessKind::Compression | ProcessKind::Expansion => {
                isentropic(self.from, self.to.volume, kappa, settings.samples())
            }
            ProcessKind::IsochoricHeating | ProcessKind::HeatRejection => isochoric(
                self.from.volume,
                self.from.pressure,
                self.to.pressure,
                settings.isochoric_samples(),
            ),
            ProcessKind::IsobaricHeating => isobaric(
                self.from.pressure,
                self.from.volume,
                self.to.volume,
                settings.samples(),
            ),
        };

        let end = self.to;
        points.pop();
        if !self.kind.is_isochoric() {
            let rising = end.volume > self.from.volume;
            points.dedup_by(|next, prev| next.volume == prev.volume);
            points.retain(|point| {
                if rising {
                    point.volume < end.volume
                } else {
                    point.volume > end.volume
                }
            });
        }
        points.push(end);

        ProcessLeg::new(self.kind, points)
    }
}

/// Derives the ordered, non-degenerate steps of `cycle`.
///
/// Steps whose start and end coincide are dropped. This happens for the
/// Seliger sub-legs at `α = 0` and `α = 1`, for Diesel combustion at `ρ = 1`,
/// and for Otto combustion at a peak pressure ratio of one.
///
/// # Errors
///
/// Returns [`CycleError::InvalidParameter`] if expansion would start at or
/// past `V1`, or if any corner pressure overflows. The Diesel cutoff volume
/// is `ρ·V2`, so Diesel rejects `ρ ≥ r`. The Seliger cycle only burns the
/// `1 − α` share at constant pressure and rejects `1 + (1 − α)(ρ − 1) ≥ r`.
pub(super) fn plan(
    cycle: Cycle,
    params: &CycleParameters,
    settings: &DiagramSettings,
) -> Result<Vec<Step>, CycleError> {
    let r = params.compression_ratio();
    let rho = params.cutoff_ratio();
    let alpha = params.heat_release_split();
    let kappa = params.heat_capacity_ratio();

    let state_1 = StatePoint::new(V1, P1);
    let v2 = V1 / r;
    let p2 = ensure_finite(
        Field::CompressionRatio,
        r,
        isentropic_pressure(state_1, v2, kappa),
    )?;
    let state_2 = StatePoint::new(v2, p2);

    let mut steps = vec![Step::new(ProcessKind::Compression, state_1, state_2)];

    let heated = match cycle {
        Cycle::Otto => {
            let ratio = settings.peak_pressure_ratio();
            let p3 = ensure_finite(Field::PeakPressureRatio, ratio, p2 * ratio)?;
            let state_3 = StatePoint::new(v2, p3);
            steps.push(Step::new(ProcessKind::IsochoricHeating, state_2, state_3));
            state_3
        }
        Cycle::Diesel => {
            check_cutoff(rho, r, rho)?;
            let state_3 = StatePoint::new(v2 * rho, p2);
            steps.push(Step::new(ProcessKind::IsobaricHeating, state_2, state_3));
            state_3
        }
        Cycle::Seliger => {
            let rise = settings.seliger_pressure_rise();
            let p_split = ensure_finite(
                Field::SeligerPressureRise,
                rise,
                p2 * (1.0 + alpha * rise),
            )?;
            let cutoff = 1.0 + (1.0 - alpha) * (rho - 1.0);
            check_cutoff(cutoff, r, rho)?;
            let state_3 = StatePoint::new(v2, p_split);
            let state_4 = StatePoint::new(v2 * cutoff, p_split);
            steps.push(Step::new(ProcessKind::IsochoricHeating, state_2, state_3));
            steps.push(Step::new(ProcessKind::IsobaricHeating, state_3, state_4));
            state_4
        }
    };

    let expanded = StatePoint::new(V1, isentropic_pressure(heated, V1, kappa));
    steps.push(Step::new(ProcessKind::Expansion, heated, expanded));
    steps.push(Step::new(ProcessKind::HeatRejection, expanded, state_1));

    steps.retain(|step| {
        if step.is_degenerate() {
            log::trace!("{cycle}: dropping zero-length {} leg", step.kind);
        }
        !step.is_degenerate()
    });

    Ok(steps)
}

/// Fails unless the isobaric burn, growing `V2` by `cutoff`, ends short of `V1`.
///
/// Compared as ratios, since `V1 = r·V2`, so `ρ = r` is caught exactly.
fn check_cutoff(cutoff: f64, r: f64, rho: f64) -> Result<(), CycleError> {
    if cutoff >= r {
        return Err(CycleError::invalid(
            Field::CutoffRatio,
            rho,
            ConstraintError::AboveMaximum,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn kinds(steps: &[Step]) -> Vec<ProcessKind> {
        steps.iter().map(|step| step.kind).collect()
    }

    fn plan_default(cycle: Cycle, params: &CycleParameters) -> Vec<Step> {
        plan(cycle, params, &DiagramSettings::default()).unwrap()
    }

    #[test]
    fn corner_states_of_the_otto_cycle() {
        let params = CycleParameters::default();
        let steps = plan_default(Cycle::Otto, &params);

        assert_eq!(
            kinds(&steps),
            vec![
                ProcessKind::Compression,
                ProcessKind::IsochoricHeating,
                ProcessKind::Expansion,
                ProcessKind::HeatRejection,
            ]
        );

        let p2 = 18.0_f64.powf(1.4);
        assert_relative_eq!(steps[0].to.volume, 1.0 / 18.0);
        assert_relative_eq!(steps[0].to.pressure, p2, max_relative = 1e-12);
        assert_relative_eq!(steps[1].to.pressure, 3.0 * p2, max_relative = 1e-12);
        // Expansion ends on the isentrope through state 3: p4 = 3·p1.
        assert_relative_eq!(steps[2].to.pressure, 3.0, max_relative = 1e-12);
        assert_eq!(steps[3].to, StatePoint::new(V1, P1));
    }

    #[test]
    fn diesel_combustion_ends_at_cutoff_volume() {
        let params = CycleParameters::default();
        let steps = plan_default(Cycle::Diesel, &params);

        assert_eq!(steps[1].kind, ProcessKind::IsobaricHeating);
        assert_relative_eq!(steps[1].to.volume, 2.0 / 18.0);
        assert_relative_eq!(steps[1].from.pressure, steps[1].to.pressure);
        // p4 = ρ^κ for the Diesel cycle.
        assert_relative_eq!(steps[2].to.pressure, 2.0_f64.powf(1.4), max_relative = 1e-12);
    }

    #[test]
    fn seliger_split_follows_alpha() {
        let params = CycleParameters::new(18.0, 2.0, 0.4, 1.4).unwrap();
        let steps = plan_default(Cycle::Seliger, &params);
        let p2 = steps[0].to.pressure;
        let v2 = steps[0].to.volume;

        assert_eq!(steps.len(), 5);
        assert_relative_eq!(steps[1].to.pressure, p2 * 2.0, max_relative = 1e-12);
        assert_relative_eq!(steps[2].to.volume, v2 * 1.6, max_relative = 1e-12);
    }

    #[test]
    fn seliger_drops_degenerate_sub_legs_at_the_ends() {
        let diesel_like = CycleParameters::new(18.0, 2.0, 0.0, 1.4).unwrap();
        assert_eq!(
            kinds(&plan_default(Cycle::Seliger, &diesel_like)),
            vec![
                ProcessKind::Compression,
                ProcessKind::IsobaricHeating,
                ProcessKind::Expansion,
                ProcessKind::HeatRejection,
            ]
        );

        let otto_like = CycleParameters::new(18.0, 2.0, 1.0, 1.4).unwrap();
        assert_eq!(
            kinds(&plan_default(Cycle::Seliger, &otto_like)),
            vec![
                ProcessKind::Compression,
                ProcessKind::IsochoricHeating,
                ProcessKind::Expansion,
                ProcessKind::HeatRejection,
            ]
        );
    }

    #[test]
    fn seliger_split_is_continuous_in_alpha() {
        let near = |alpha: f64| {
            let params = CycleParameters::new(18.0, 2.0, alpha, 1.4).unwrap();
            plan_default(Cycle::Seliger, &params)
        };

        let at_zero = near(0.0);
        let above_zero = near(1e-9);
        assert_relative_eq!(
            at_zero[1].from.pressure,
            above_zero[2].from.pressure,
            max_relative = 1e-8
        );

        let at_one = near(1.0);
        let below_one = near(1.0 - 1e-9);
        assert_relative_eq!(
            at_one[1].to.pressure,
            below_one[1].to.pressure,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            at_one[1].to.volume,
            below_one[2].to.volume,
            max_relative = 1e-8
        );
    }

    #[test]
    fn diesel_without_cutoff_has_no_combustion_leg() {
        let params = CycleParameters::new(18.0, 1.0, 0.5, 1.4).unwrap();
        let steps = plan_default(Cycle::Diesel, &params);
        assert!(!kinds(&steps).contains(&ProcessKind::IsobaricHeating));
        assert_eq!(steps[1].kind, ProcessKind::Expansion);
        assert_eq!(steps[1].from, steps[0].to);
    }

    #[test]
    fn cutoff_beyond_stroke_is_rejected() {
        let params = CycleParameters::new(2.0, 2.5, 0.5, 1.4).unwrap();
        let err = plan(Cycle::Diesel, &params, &DiagramSettings::default()).unwrap_err();
        assert_eq!(
            err,
            CycleError::InvalidParameter {
                field: Field::CutoffRatio,
                value: 2.5,
                reason: ConstraintError::AboveMaximum,
            }
        );

        // Otto ignores the cutoff ratio.
        assert!(plan(Cycle::Otto, &params, &DiagramSettings::default()).is_ok());
    }

    #[test]
    fn seliger_cutoff_is_bounded_by_its_isobaric_share() {
        // V4 = V2·(1 + 0.1·2) = 0.6 stays inside the stroke although ρ > r.
        let params = CycleParameters::new(2.0, 3.0, 0.9, 1.4).unwrap();
        let steps = plan_default(Cycle::Seliger, &params);
        assert_relative_eq!(steps[2].to.volume, 0.6, max_relative = 1e-12);
        assert!(plan(Cycle::Diesel, &params, &DiagramSettings::default()).is_err());

        // With no constant-volume share the burn reaches V4 = V1.
        let params = CycleParameters::new(2.0, 2.0, 0.0, 1.4).unwrap();
        let err = plan(Cycle::Seliger, &params, &DiagramSettings::default()).unwrap_err();
        assert_eq!(
            err,
            CycleError::InvalidParameter {
                field: Field::CutoffRatio,
                value: 2.0,
                reason: ConstraintError::AboveMaximum,
            }
        );
    }

    #[test]
    fn overflowing_compression_is_rejected() {
        let params = CycleParameters::new(1e300, 2.0, 0.5, 1.67).unwrap();
        let err = plan(Cycle::Otto, &params, &DiagramSettings::default()).unwrap_err();
        assert_eq!(err.field(), Field::CompressionRatio);
    }

    #[test]
    fn sampling_a_few_ulps_keeps_volumes_strictly_monotonic() {
        let from = StatePoint::new(0.1, 5.0);
        let to = StatePoint::new(0.1 + 4.0 * f64::EPSILON * 0.1, 5.0);
        let step = Step::new(ProcessKind::IsobaricHeating, from, to);
        let leg = step.sample(1.4, &DiagramSettings::default());

        let points = leg.points();
        assert!(points.len() >= 2);
        assert!(points.len() < DiagramSettings::default().samples());
        assert!(points.windows(2).all(|w| w[0].volume < w[1].volume));
        assert_eq!(leg.start(), from);
        assert_eq!(leg.end(), to);
    }

    #[test]
    fn sampled_leg_starts_and_ends_on_its_corners() {
        let params = CycleParameters::default();
        let settings = DiagramSettings::default();
        for step in plan(Cycle::Seliger, &params, &settings).unwrap() {
            let leg = step.sample(1.4, &settings);
            assert_eq!(leg.start(), step.from);
            assert_eq!(leg.end(), step.to);
        }
    }
}
