/// One thermodynamic state on a p–V diagram, in normalized units.
///
/// Volumes are relative to the bottom-dead-center volume `V1 = 1` and
/// pressures to the intake pressure `p1 = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatePoint {
    pub volume: f64,
    pub pressure: f64,
}

impl StatePoint {
    /// Creates a state point.
    #[must_use]
    pub fn new(volume: f64, pressure: f64) -> Self {
        Self { volume, pressure }
    }
}

impl From<StatePoint> for [f64; 2] {
    fn from(point: StatePoint) -> Self {
        [point.volume, point.pressure]
    }
}
