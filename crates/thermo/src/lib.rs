//! Efficiency formulas and pressure–volume diagrams for ideal engine cycles.
//!
//! Three air-standard cycles are modeled:
//!
//! - [`Cycle::Otto`]: heat added at constant volume
//! - [`Cycle::Diesel`]: heat added at constant pressure
//! - [`Cycle::Seliger`]: heat split between constant volume and constant
//!   pressure by the heat-release split `α`
//!
//! Everything here is a pure function of a [`CycleParameters`] value:
//!
//! - [`compute_efficiency`] returns the closed-form thermal efficiency.
//! - [`build_diagram`] returns the cycle's legs as sampled p–V curves,
//!   normalized so the cycle starts and ends at `V1 = 1`, `p1 = 1`.
//!
//! ```
//! use cycles_thermo::{Cycle, CycleParameters, LegFilter, build_diagram, compute_efficiency};
//!
//! let params = CycleParameters::new(18.0, 2.0, 0.5, 1.4)?;
//!
//! let otto = compute_efficiency(Cycle::Otto, &params)?;
//! let diesel = compute_efficiency(Cycle::Diesel, &params)?;
//! assert!(diesel.eta < otto.eta);
//!
//! let diagram = build_diagram(Cycle::Seliger, &params, &LegFilter::all())?;
//! assert_eq!(diagram.legs.len(), 5);
//! # Ok::<(), cycles_thermo::CycleError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize`/`Deserialize` for the public value types.
//!   Parameters and settings deserialize through their validating
//!   constructors, so a config file can never yield an out-of-domain value.

mod cycle;
mod error;

pub mod diagram;
pub mod efficiency;
pub mod params;

pub use cycle::Cycle;
pub use diagram::{
    CycleDiagram, DiagramBuilder, DiagramSettings, LegFilter, ProcessKind, ProcessLeg,
    StatePoint, build_diagram, build_diagram_with,
};
pub use efficiency::{EfficiencyResult, compute_efficiency};
pub use error::{CycleError, Field};
pub use params::CycleParameters;
