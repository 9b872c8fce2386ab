//! Sampling of the three elementary ideal-gas paths.

use super::StatePoint;

/// Returns `n ≥ 2` evenly spaced values from `start` to `end`.
///
/// Both endpoints are reproduced exactly.
#[allow(clippy::cast_precision_loss)]
pub(super) fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    debug_assert!(n >= 2, "need at least two samples");
    let last = n - 1;
    let step = (end - start) / last as f64;

    (0..n).map(move |i| if i == last { end } else { start + step * i as f64 })
}

/// Samples the isentrope `p·V^κ = const` through `from`, ending at `to_volume`.
pub(super) fn isentropic(
    from: StatePoint,
    to_volume: f64,
    kappa: f64,
    n: usize,
) -> Vec<StatePoint> {
    linspace(from.volume, to_volume, n)
        .map(|volume| StatePoint::new(volume, isentropic_pressure(from, volume, kappa)))
        .collect()
}

/// Samples a constant-volume path from `from_pressure` to `to_pressure`.
pub(super) fn isochoric(
    volume: f64,
    from_pressure: f64,
    to_pressure: f64,
    n: usize,
) -> Vec<StatePoint> {
    linspace(from_pressure, to_pressure, n)
        .map(|pressure| StatePoint::new(volume, pressure))
        .collect()
}

/// Samples a constant-pressure path from `from_volume` to `to_volume`.
pub(super) fn isobaric(
    pressure: f64,
    from_volume: f64,
    to_volume: f64,
    n: usize,
) -> Vec<StatePoint> {
    linspace(from_volume, to_volume, n)
        .map(|volume| StatePoint::new(volume, pressure))
        .collect()
}

/// Returns the pressure at `volume` on the isentrope through `through`.
pub(super) fn isentropic_pressure(through: StatePoint, volume: f64, kappa: f64) -> f64 {
    through.pressure * (through.volume / volume).powf(kappa)
}
