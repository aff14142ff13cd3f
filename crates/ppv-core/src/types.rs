//! Instrument and target-type enums, plus the per-instrument pair container.

use std::fmt;
use std::ops::{Index, IndexMut};

// ── Instrument ────────────────────────────────────────────────────────────────

/// The spectrograph a fiber feeds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instrument {
    Apogee,
    Boss,
}

impl Instrument {
    pub const ALL: [Instrument; 2] = [Instrument::Apogee, Instrument::Boss];

    /// Parse the lowercase label used in target lists and order files.
    pub fn parse(s: &str) -> Option<Instrument> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apogee" => Some(Instrument::Apogee),
            "boss" => Some(Instrument::Boss),
            _ => None,
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instrument::Apogee => write!(f, "apogee"),
            Instrument::Boss => write!(f, "boss"),
        }
    }
}

// ── TargetType ────────────────────────────────────────────────────────────────

/// What a candidate row is for.  Only `Science` rows compete for fibers in
/// the allocation simulator; standards and skies are filled elsewhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetType {
    Science,
    Standard,
    Sky,
}

impl TargetType {
    #[inline]
    pub fn is_science(self) -> bool {
        matches!(self, TargetType::Science)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Science => write!(f, "science"),
            TargetType::Standard => write!(f, "standard"),
            TargetType::Sky => write!(f, "sky"),
        }
    }
}

// ── PerInstrument ─────────────────────────────────────────────────────────────

/// A value per instrument, indexable by [`Instrument`].
///
/// Replaces stringly-keyed maps for fiber capacities and running budgets:
/// the instrument set is closed, so a struct is both cheaper and exhaustive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerInstrument<T> {
    pub apogee: T,
    pub boss: T,
}

impl<T> PerInstrument<T> {
    pub fn new(apogee: T, boss: T) -> Self {
        Self { apogee, boss }
    }

    /// Iterator over `(instrument, value)` pairs in fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Instrument, &T)> {
        [(Instrument::Apogee, &self.apogee), (Instrument::Boss, &self.boss)].into_iter()
    }
}

impl<T: Copy> PerInstrument<T> {
    /// Both slots set to the same value.
    pub fn splat(value: T) -> Self {
        Self { apogee: value, boss: value }
    }
}

impl<T> Index<Instrument> for PerInstrument<T> {
    type Output = T;

    #[inline]
    fn index(&self, inst: Instrument) -> &T {
        match inst {
            Instrument::Apogee => &self.apogee,
            Instrument::Boss => &self.boss,
        }
    }
}

impl<T> IndexMut<Instrument> for PerInstrument<T> {
    #[inline]
    fn index_mut(&mut self, inst: Instrument) -> &mut T {
        match inst {
            Instrument::Apogee => &mut self.apogee,
            Instrument::Boss => &mut self.boss,
        }
    }
}
