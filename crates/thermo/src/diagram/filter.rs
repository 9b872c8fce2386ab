use super::ProcessKind;

/// The set of leg kinds a caller wants returned in a diagram.
///
/// Filtering happens after every leg has been built, so the numbered states
/// and efficiency of a diagram are the same whichever legs are shown.
///
/// # Example
///
/// ```
/// use cycles_thermo::{LegFilter, ProcessKind};
///
/// let combustion = LegFilter::none()
///     .with(ProcessKind::IsochoricHeating)
///     .with(ProcessKind::IsobaricHeating);
/// assert!(combustion.contains(ProcessKind::IsobaricHeating));
/// assert!(!combustion.contains(ProcessKind::Expansion));
///
/// let no_rejection = LegFilter::all().without(ProcessKind::HeatRejection);
/// assert!(!no_rejection.contains(ProcessKind::HeatRejection));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegFilter {
    shown: [bool; ProcessKind::COUNT],
}

impl LegFilter {
    /// A filter that shows every leg.
    #[must_use]
    pub fn all() -> Self {
        Self {
            shown: [true; ProcessKind::COUNT],
        }
    }

    /// A filter that hides every leg.
    #[must_use]
    pub fn none() -> Self {
        Self {
            shown: [false; ProcessKind::COUNT],
        }
    }

    /// Returns the filter with `kind` shown.
    #[must_use]
    pub fn with(mut self, kind: ProcessKind) -> Self {
        self.shown[kind.index()] = true;
        self
    }

    /// Returns the filter with `kind` hidden.
    #[must_use]
    pub fn without(mut self, kind: ProcessKind) -> Self {
        self.shown[kind.index()] = false;
        self
    }

    /// Returns `true` if legs of `kind` are shown.
    #[must_use]
    pub fn contains(&self, kind: ProcessKind) -> bool {
        self.shown[kind.index()]
    }

    /// Iterates over the shown kinds in cycle order.
    pub fn iter(&self) -> impl Iterator<Item = ProcessKind> + '_ {
        ProcessKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
    }
}

impl Default for LegFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<ProcessKind> for LegFilter {
    fn from_iter<I: IntoIterator<Item = ProcessKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}
