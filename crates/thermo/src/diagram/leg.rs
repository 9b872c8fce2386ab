use std::fmt;

use super::StatePoint;

/// The thermodynamic process a leg follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProcessKind {
    /// Isentropic compression from `V1` to `V2`.
    Compression,
    /// Heat addition at constant volume.
    IsochoricHeating,
    /// Heat addition at constant pressure.
    IsobaricHeating,
    /// Isentropic expansion back to `V1`.
    Expansion,
    /// Heat rejection at constant volume `V1`.
    HeatRejection,
}

impl ProcessKind {
    /// The number of process kinds.
    pub const COUNT: usize = 5;

    /// All process kinds, in the order they can appear in a cycle.
    pub const ALL: [ProcessKind; Self::COUNT] = [
        ProcessKind::Compression,
        ProcessKind::IsochoricHeating,
        ProcessKind::IsobaricHeating,
        ProcessKind::Expansion,
        ProcessKind::HeatRejection,
    ];

    /// Returns a human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Compression => "Compression",
            Self::IsochoricHeating => "Isochoric heating",
            Self::IsobaricHeating => "Isobaric heating",
            Self::Expansion => "Expansion",
            Self::HeatRejection => "Heat rejection",
        }
    }

    /// Returns `true` if the process holds volume constant.
    #[must_use]
    pub fn is_isochoric(self) -> bool {
        matches!(self, Self::IsochoricHeating | Self::HeatRejection)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One leg of a cycle, sampled as an ordered sequence of state points.
///
/// A leg always holds at least two points: the first is the leg's start
/// state and the last is its end state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessLeg {
    kind: ProcessKind,
    points: Vec<StatePoint>,
}

impl ProcessLeg {
    pub(crate) fn new(kind: ProcessKind, points: Vec<StatePoint>) -> Self {
        debug_assert!(points.len() >= 2, "a leg needs a start and an end");
        Self { kind, points }
    }

    /// Returns the process this leg follows.
    #[must_use]
    pub fn kind(&self) -> ProcessKind {
        self.kind
    }

    /// Returns the sampled points, start to end.
    #[must_use]
    pub fn points(&self) -> &[StatePoint] {
        &self.points
    }

    /// Returns the leg's start state.
    #[must_use]
    pub fn start(&self) -> StatePoint {
        self.points[0]
    }

    /// Returns the leg's end state.
    #[must_use]
    pub fn end(&self) -> StatePoint {
        self.points[self.points.len() - 1]
    }

    /// Returns `true` if the leg starts and ends at the same state.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start() == self.end()
    }

    /// Returns `∫ p dV` along the leg by the trapezoidal rule.
    #[must_use]
    pub fn boundary_work(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| {
                let [a, b] = [pair[0], pair[1]];
                (b.volume - a.volume) * 0.5 * (a.pressure + b.pressure)
            })
            .sum()
    }

    /// Returns the points as `[volume, pressure]` pairs for plotting.
    #[must_use]
    pub fn to_xy(&self) -> Vec<[f64; 2]> {
        self.points.iter().copied().map(Into::into).collect()
    }
}
