//! Pressure–volume diagrams of the ideal cycles.
//!
//! All quantities are normalized to the intake state, `V1 = 1` and `p1 = 1`,
//! so volumes are fractions of the displaced volume and pressures are
//! multiples of the intake pressure.
//!
//! A diagram is a closed chain of [`ProcessLeg`]s starting and ending at
//! `(V1, p1)`. Every leg of the chain is always computed; a [`LegFilter`]
//! only chooses which of them are returned.

mod chain;
mod filter;
mod leg;
mod point;
mod sample;
mod settings;

#[cfg(test)]
mod tests;

use cycles_core::Model;

use crate::{Cycle, CycleError, CycleParameters, EfficiencyResult, compute_efficiency};

pub use filter::LegFilter;
pub use leg::{ProcessKind, ProcessLeg};
pub use point::StatePoint;
pub use settings::DiagramSettings;

/// A cycle's p–V diagram together with its efficiency.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleDiagram {
    /// The cycle this diagram describes.
    pub cycle: Cycle,
    /// The legs selected by the filter, in cycle order.
    pub legs: Vec<ProcessLeg>,
    /// The numbered corner states `1..n` of the complete cycle.
    ///
    /// `states[0]` is state 1, the intake state `(V1, p1)`.
    pub states: Vec<StatePoint>,
    /// The cycle's thermal efficiency.
    pub efficiency: EfficiencyResult,
    net_work: f64,
}

impl CycleDiagram {
    /// Iterates over every point of the returned legs, in order.
    ///
    /// Adjacent legs share their joining state, so it appears twice.
    pub fn points(&self) -> impl Iterator<Item = StatePoint> + '_ {
        self.legs.iter().flat_map(|leg| leg.points().iter().copied())
    }

    /// Returns the leg following `kind`, if it was returned.
    #[must_use]
    pub fn leg(&self, kind: ProcessKind) -> Option<&ProcessLeg> {
        self.legs.iter().find(|leg| leg.kind() == kind)
    }

    /// Returns the net work of the cycle, the area enclosed by the loop.
    ///
    /// The area is integrated over the complete chain by the trapezoidal rule,
    /// so it does not depend on the filter and converges to the exact value as
    /// the sample count grows.
    #[must_use]
    pub fn work(&self) -> f64 {
        self.net_work
    }
}

/// Builds the diagram of `cycle` with [`DiagramSettings::default`].
///
/// # Errors
///
/// Returns [`CycleError::InvalidParameter`] if the parameters give no
/// physical diagram (see [`build_diagram_with`]).
pub fn build_diagram(
    cycle: Cycle,
    params: &CycleParameters,
    filter: &LegFilter,
) -> Result<CycleDiagram, CycleError> {
    build_diagram_with(cycle, params, filter, &DiagramSettings::default())
}

/// Builds the diagram of `cycle`, returning only the legs `filter` selects.
///
/// The corner states, efficiency and net work always describe the complete
/// cycle.
///
/// # Errors
///
/// Returns [`CycleError::InvalidParameter`] before any leg is sampled if:
///
/// - the isobaric burn of a Diesel or Seliger cycle would end at or past
///   `V1`, that is `ρ ≥ r` for Diesel or `1 + (1 − α)(ρ − 1) ≥ r` for Seliger
/// - a corner pressure overflows
/// - the efficiency is not finite
pub fn build_diagram_with(
    cycle: Cycle,
    params: &CycleParameters,
    filter: &LegFilter,
    settings: &DiagramSettings,
) -> Result<CycleDiagram, CycleError> {
    let steps = chain::plan(cycle, params, settings)?;
    let efficiency = compute_efficiency(cycle, params)?;

    let kappa = params.heat_capacity_ratio();
    let legs: Vec<ProcessLeg> = steps
        .iter()
        .map(|step| step.sample(kappa, settings))
        .collect();

    let states = steps.iter().map(|step| step.from).collect();
    let net_work = legs.iter().map(ProcessLeg::boundary_work).sum();

    let legs: Vec<ProcessLeg> = legs
        .into_iter()
        .filter(|leg| filter.contains(leg.kind()))
        .collect();

    log::debug!(
        "built {cycle} diagram: {} of {} legs, eta = {:.4}",
        legs.len(),
        steps.len(),
        efficiency.eta,
    );

    Ok(CycleDiagram {
        cycle,
        legs,
        states,
        efficiency,
        net_work,
    })
}

/// Builds diagrams of one cycle as a [`Model`] over [`CycleParameters`].
///
/// # Example
///
/// ```
/// use cycles_core::Model;
/// use cycles_thermo::{Cycle, CycleParameters, DiagramBuilder, LegFilter, ProcessKind};
///
/// let builder = DiagramBuilder::new(Cycle::Otto)
///     .with_filter(LegFilter::none().with(ProcessKind::Expansion));
///
/// let diagram = builder.call(&CycleParameters::default()).unwrap();
/// assert_eq!(diagram.legs.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramBuilder {
    cycle: Cycle,
    settings: DiagramSettings,
    filter: LegFilter,
}

impl DiagramBuilder {
    /// Creates a builder with default settings that returns every leg.
    #[must_use]
    pub fn new(cycle: Cycle) -> Self {
        Self {
            cycle,
            settings: DiagramSettings::default(),
            filter: LegFilter::all(),
        }
    }

    #[must_use]
    pub fn with_settings(self, settings: DiagramSettings) -> Self {
        Self { settings, ..self }
    }

    #[must_use]
    pub fn with_filter(self, filter: LegFilter) -> Self {
        Self { filter, ..self }
    }

    /// Returns the cycle this builder draws.
    #[must_use]
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }
}

impl Model for DiagramBuilder {
    type Input = CycleParameters;
    type Output = CycleDiagram;
    type Error = CycleError;

    fn call(&self, input: &CycleParameters) -> Result<CycleDiagram, CycleError> {
        build_diagram_with(self.cycle, input, &self.filter, &self.settings)
    }
}
