//! CSV ordering loader.
//!
//! # CSV format
//!
//! One row per program, **in priority order** (row position = rank):
//!
//! ```csv
//! instrument,program
//! apogee,mwm_yso_cluster
//! boss,bhm_aqmes_med
//! apogee,mwm_rv_long
//! ```
//!
//! This is the generic interchange form of a platerun's fiber-filling order
//! file.  The domain-specific formats the survey actually ships (yanny
//! parameter files, FITS plate plans) are parsed by an external layer and
//! handed to this crate as CSV or as an in-memory [`ProgramOrdering`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ppv_core::Instrument;

use crate::{PriorityError, PriorityResult, ProgramOrdering};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OrderingRecord {
    instrument: String,
    program: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ProgramOrdering`] from a CSV file.
pub fn load_ordering_csv(path: &Path) -> PriorityResult<ProgramOrdering> {
    let file = std::fs::File::open(path).map_err(PriorityError::Io)?;
    load_ordering_reader(file)
}

/// Like [`load_ordering_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for order files already
/// held in memory.
pub fn load_ordering_reader<R: Read>(reader: R) -> PriorityResult<ProgramOrdering> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut ordering = ProgramOrdering::new();

    for (row, result) in csv_reader.deserialize::<OrderingRecord>().enumerate() {
        let record = result.map_err(|e| PriorityError::Parse(e.to_string()))?;
        let instrument = Instrument::parse(&record.instrument).ok_or_else(|| {
            PriorityError::Parse(format!(
                "row {}: unknown instrument {:?}: expected \"apogee\" or \"boss\"",
                row + 1,
                record.instrument
            ))
        })?;
        ordering.push(instrument, record.program);
    }

    Ok(ordering)
}
