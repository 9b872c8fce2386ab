use std::fmt;

/// An ideal air-standard engine cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cycle {
    /// Constant-volume heat addition.
    Otto,
    /// Constant-pressure heat addition.
    Diesel,
    /// Dual combustion: part constant volume, part constant pressure.
    Seliger,
}

impl Cycle {
    /// All cycles, in display order.
    pub const ALL: [Cycle; 3] = [Cycle::Otto, Cycle::Diesel, Cycle::Seliger];

    /// Returns the cycle's name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Otto => "Otto",
            Self::Diesel => "Diesel",
            Self::Seliger => "Seliger",
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
