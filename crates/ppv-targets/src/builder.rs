//! Incremental construction of a [`TargetSet`].

use ppv_core::{CatalogId, Instrument, SkyPoint, TargetType};

use crate::set::{TableId, TargetSet};

/// One candidate row as supplied by the catalog loader.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetRow {
    pub catalog_id: CatalogId,
    pub ra: f64,
    pub dec: f64,
    pub instrument: Instrument,
    pub program: String,
    pub target_type: TargetType,
}

/// Construct a [`TargetSet`] incrementally, then call [`build`](Self::build).
///
/// Rows may be pushed in any order — typically in whatever order the input
/// target lists concatenate.  `build()` sorts by ascending `catalog_id` and
/// stamps a fresh [`TableId`].
#[derive(Default)]
pub struct TargetSetBuilder {
    rows: Vec<TargetRow>,
}

impl TargetSetBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Pre-allocate for the expected number of rows.
    pub fn with_capacity(rows: usize) -> Self {
        Self { rows: Vec::with_capacity(rows) }
    }

    pub fn push(&mut self, row: TargetRow) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Convenience for synthetic tables in tests and demos.
    pub fn push_target(
        &mut self,
        catalog_id: u64,
        pos: SkyPoint,
        instrument: Instrument,
        program: impl Into<String>,
        target_type: TargetType,
    ) -> &mut Self {
        self.push(TargetRow {
            catalog_id: CatalogId(catalog_id),
            ra: pos.ra,
            dec: pos.dec,
            instrument,
            program: program.into(),
            target_type,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the builder and produce a [`TargetSet`] sorted by ascending
    /// `catalog_id` (stable, so duplicate IDs keep their push order).
    pub fn build(self) -> TargetSet {
        let mut rows = self.rows;
        rows.sort_by_key(|r| r.catalog_id);

        let n = rows.len();
        let mut catalog_id = Vec::with_capacity(n);
        let mut ra = Vec::with_capacity(n);
        let mut dec = Vec::with_capacity(n);
        let mut instrument = Vec::with_capacity(n);
        let mut program = Vec::with_capacity(n);
        let mut target_type = Vec::with_capacity(n);

        for row in rows {
            catalog_id.push(row.catalog_id);
            ra.push(row.ra);
            dec.push(row.dec);
            instrument.push(row.instrument);
            program.push(row.program);
            target_type.push(row.target_type);
        }

        TargetSet {
            table_id: TableId::next(),
            catalog_id,
            ra,
            dec,
            instrument,
            program,
            target_type,
            priority_rank: None,
        }
    }
}
