//! Presentation of ideal-cycle p–V diagrams.
//!
//! The [`style`] module maps each process kind to a label and color and turns
//! a [`CycleDiagram`] into drawable traces. It has no GUI dependencies.
//!
//! # Features
//!
//! - `plot`: Enables [`DiagramPlot`] for showing diagrams in an egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`CycleDiagram`]: cycles_thermo::CycleDiagram

pub mod style;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{DiagramPlot, ShowConfig};

pub use style::LegStyle;
