//! Presentation data for p–V diagrams, independent of any GUI toolkit.

use cycles_thermo::{CycleDiagram, ProcessKind};

/// How a leg of a given kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegStyle {
    /// The legend label.
    pub label: &'static str,
    /// Line color as `[r, g, b]`.
    pub color: [u8; 3],
}

impl LegStyle {
    /// Returns the style for legs of `kind`.
    ///
    /// Compression is blue, isochoric heating orange, isobaric heating red,
    /// expansion green and heat rejection gray.
    #[must_use]
    pub fn of(kind: ProcessKind) -> Self {
        let color = match kind {
            ProcessKind::Compression => [31, 119, 180],
            ProcessKind::IsochoricHeating => [255, 127, 14],
            ProcessKind::IsobaricHeating => [214, 39, 40],
            ProcessKind::Expansion => [44, 160, 44],
            ProcessKind::HeatRejection => [127, 127, 127],
        };
        Self {
            label: kind.label(),
            color,
        }
    }
}

/// One drawable line of a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub kind: ProcessKind,
    pub style: LegStyle,
    /// `[volume, pressure]` pairs, start to end.
    pub points: Vec<[f64; 2]>,
}

/// Returns one trace per leg of `diagram`, in cycle order.
#[must_use]
pub fn traces(diagram: &CycleDiagram) -> Vec<Trace> {
    diagram
        .legs
        .iter()
        .map(|leg| Trace {
            kind: leg.kind(),
            style: LegStyle::of(leg.kind()),
            points: leg.to_xy(),
        })
        .collect()
}

/// Returns the heading shown above a diagram, such as `"Otto: 68.53 %"`.
#[must_use]
pub fn heading(diagram: &CycleDiagram) -> String {
    diagram.efficiency.to_string()
}
