//! Program ordering and the rank index built from it.

use rustc_hash::FxHashMap;

use ppv_core::Instrument;

use crate::{PriorityError, PriorityResult};

// ── ProgramOrdering ───────────────────────────────────────────────────────────

/// A totally-ordered list of `(instrument, program)` entries, as read from a
/// platerun's fiber-filling order file.  Position in the list is the rank.
#[derive(Clone, Debug, Default)]
pub struct ProgramOrdering {
    entries: Vec<(Instrument, String)>,
}

impl ProgramOrdering {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry at the next rank.
    pub fn push(&mut self, instrument: Instrument, program: impl Into<String>) {
        self.entries.push((instrument, program.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Instrument, &str)> {
        self.entries.iter().map(|(i, p)| (*i, p.as_str()))
    }
}

impl FromIterator<(Instrument, String)> for ProgramOrdering {
    fn from_iter<T: IntoIterator<Item = (Instrument, String)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

// ── PriorityIndex ─────────────────────────────────────────────────────────────

/// Rank lookup built once per platerun from a [`ProgramOrdering`].
///
/// Construction is O(n) in the number of programs; lookups are O(1).
/// Duplicate entries keep their **first** rank (ties are not expected in
/// real order files, but first-occurrence-wins makes re-listed programs
/// harmless rather than rank-shifting).
#[derive(Clone, Debug)]
pub struct PriorityIndex {
    /// `(instrument, program)` → zero-based allocation rank.
    by_program: FxHashMap<(Instrument, String), u32>,
    /// Number of distinct entries (highest rank + 1).
    len: usize,
}

impl PriorityIndex {
    pub fn from_ordering(ordering: &ProgramOrdering) -> Self {
        let mut by_program = FxHashMap::default();
        let mut rank = 0u32;
        for (instrument, program) in ordering.iter() {
            let key = (instrument, program.to_owned());
            if !by_program.contains_key(&key) {
                by_program.insert(key, rank);
                rank += 1;
            }
        }
        Self { by_program, len: rank as usize }
    }

    /// Zero-based allocation rank of `program` on `instrument`.
    ///
    /// A miss means the candidate table references a program the order file
    /// never listed — fatal, surface it to the caller.
    pub fn rank_of(&self, instrument: Instrument, program: &str) -> PriorityResult<u32> {
        self.by_program
            .get(&(instrument, program.to_owned()))
            .copied()
            .ok_or_else(|| PriorityError::ProgramNotFound {
                instrument,
                program: program.to_owned(),
            })
    }

    /// Non-failing variant for membership probes.
    pub fn contains(&self, instrument: Instrument, program: &str) -> bool {
        self.by_program.contains_key(&(instrument, program.to_owned()))
    }

    /// Number of distinct ranked programs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
