//! Shared fixtures for the cross-crate tests.

use serde::{Deserialize, Serialize};

use cycles_thermo::{
    Cycle, CycleDiagram, CycleError, CycleParameters, DiagramSettings, LegFilter, ProcessKind,
    build_diagram_with,
};

/// A batch of diagrams described in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Study {
    /// The engine parameters shared by every cycle.
    pub parameters: CycleParameters,

    /// Rendering settings; omitted fields take their defaults.
    #[serde(default)]
    pub settings: DiagramSettings,

    /// Cycles to draw, in order. Defaults to all three.
    #[serde(default = "all_cycles")]
    pub cycles: Vec<Cycle>,

    /// Legs to return. `None` returns every leg.
    #[serde(default)]
    pub legs: Option<Vec<ProcessKind>>,
}

fn all_cycles() -> Vec<Cycle> {
    Cycle::ALL.to_vec()
}

impl Study {
    /// Returns the leg filter this study asks for.
    #[must_use]
    pub fn filter(&self) -> LegFilter {
        self.legs
            .as_ref()
            .map_or_else(LegFilter::all, |kinds| kinds.iter().copied().collect())
    }

    /// Builds the diagram of every requested cycle.
    ///
    /// # Errors
    ///
    /// Returns the first [`CycleError`] raised by any cycle.
    pub fn run(&self) -> Result<Vec<CycleDiagram>, CycleError> {
        let filter = self.filter();
        self.cycles
            .iter()
            .map(|&cycle| build_diagram_with(cycle, &self.parameters, &filter, &self.settings))
            .collect()
    }
}
