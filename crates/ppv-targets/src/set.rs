//! `TargetSet` — the columnar target table — and its identity stamp.

use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashSet;

use ppv_core::{CatalogId, Instrument, Mask, SkyPoint, TargetType};
use ppv_priority::PriorityIndex;

use crate::{TargetError, TargetResult};

// ── TableId ───────────────────────────────────────────────────────────────────

static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of one built [`TargetSet`].
///
/// Stamped at build time and by every table-producing operation
/// (`with_priorities`, `select`).  Spatial caches key on this value, so a
/// mask computed from one table can never be served for another — including
/// a table reloaded from the same file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableId(u64);

impl TableId {
    pub(crate) fn next() -> Self {
        TableId(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TableId({})", self.0)
    }
}

// ── TargetSet ─────────────────────────────────────────────────────────────────

/// Structure-of-Arrays candidate target table.
///
/// Every column `Vec` has exactly `len()` elements; a row index addresses the
/// same target in all of them.  Rows are sorted by ascending `catalog_id`
/// (duplicate IDs are allowed — the same object can appear in several input
/// lists).  Construct via [`TargetSetBuilder`](crate::TargetSetBuilder).
#[derive(Clone, Debug)]
pub struct TargetSet {
    pub(crate) table_id: TableId,
    pub(crate) catalog_id: Vec<CatalogId>,
    pub(crate) ra: Vec<f64>,
    pub(crate) dec: Vec<f64>,
    pub(crate) instrument: Vec<Instrument>,
    pub(crate) program: Vec<String>,
    pub(crate) target_type: Vec<TargetType>,
    /// Derived column: zero-based allocation rank per row.  `None` until
    /// [`with_priorities`](Self::with_priorities) has run.
    pub(crate) priority_rank: Option<Vec<u32>>,
}

impl TargetSet {
    // ── Dimensions & identity ─────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.catalog_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog_id.is_empty()
    }

    /// Cache identity of this table.
    #[inline]
    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    // ── Column access ─────────────────────────────────────────────────────

    pub fn catalog_ids(&self) -> &[CatalogId] {
        &self.catalog_id
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instrument
    }

    pub fn programs(&self) -> &[String] {
        &self.program
    }

    pub fn target_types(&self) -> &[TargetType] {
        &self.target_type
    }

    /// Priority rank column, if the table has been annotated.
    pub fn priority_ranks(&self) -> Option<&[u32]> {
        self.priority_rank.as_deref()
    }

    /// Sky coordinate of row `i`.
    #[inline]
    pub fn sky_point(&self, i: usize) -> SkyPoint {
        SkyPoint::new(self.ra[i], self.dec[i])
    }

    /// Sky coordinates of all rows, in row order.
    pub fn sky_points(&self) -> impl Iterator<Item = SkyPoint> + '_ {
        self.ra.iter().zip(&self.dec).map(|(&ra, &dec)| SkyPoint::new(ra, dec))
    }

    // ── Derived tables ────────────────────────────────────────────────────

    /// Append the priority rank column by looking every row's
    /// `(instrument, program)` up in `index`.
    ///
    /// Returns a new table (fresh [`TableId`]); the receiver is unchanged.
    /// Fails with [`TargetError::AlreadyAnnotated`] if the column exists, or
    /// propagates the lookup miss if a row references an unlisted program —
    /// missing programs are a hard error, never silently defaulted.
    pub fn with_priorities(&self, index: &PriorityIndex) -> TargetResult<TargetSet> {
        if self.priority_rank.is_some() {
            return Err(TargetError::AlreadyAnnotated);
        }

        let mut ranks = Vec::with_capacity(self.len());
        for (inst, program) in self.instrument.iter().zip(&self.program) {
            ranks.push(index.rank_of(*inst, program)?);
        }

        let mut out = self.clone();
        out.table_id = TableId::next();
        out.priority_rank = Some(ranks);
        Ok(out)
    }

    /// Append an externally computed rank column (same append-once rule).
    ///
    /// For callers whose order files carry explicit order numbers instead of
    /// positional ranks — equal numbers across lists produce shared groups,
    /// which the allocation simulator then validates for homogeneity.
    pub fn with_priority_ranks(&self, ranks: Vec<u32>) -> TargetResult<TargetSet> {
        if self.priority_rank.is_some() {
            return Err(TargetError::AlreadyAnnotated);
        }
        if ranks.len() != self.len() {
            return Err(TargetError::RankColumnLength { expected: self.len(), got: ranks.len() });
        }

        let mut out = self.clone();
        out.table_id = TableId::next();
        out.priority_rank = Some(ranks);
        Ok(out)
    }

    /// Project the given rows into a new table (fresh [`TableId`]).
    ///
    /// Row order in the output follows `rows`; the priority column, when
    /// present, is carried along.
    ///
    /// # Panics
    ///
    /// Panics if any index in `rows` is out of bounds.
    pub fn select(&self, rows: &[usize]) -> TargetSet {
        TargetSet {
            table_id: TableId::next(),
            catalog_id: rows.iter().map(|&r| self.catalog_id[r]).collect(),
            ra: rows.iter().map(|&r| self.ra[r]).collect(),
            dec: rows.iter().map(|&r| self.dec[r]).collect(),
            instrument: rows.iter().map(|&r| self.instrument[r]).collect(),
            program: rows.iter().map(|&r| self.program[r].clone()).collect(),
            target_type: rows.iter().map(|&r| self.target_type[r]).collect(),
            priority_rank: self
                .priority_rank
                .as_ref()
                .map(|ranks| rows.iter().map(|&r| ranks[r]).collect()),
        }
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Membership mask: `true` for every row whose `catalog_id` appears in
    /// `ids`.
    pub fn contains(&self, ids: &[CatalogId]) -> Mask {
        let wanted: FxHashSet<CatalogId> = ids.iter().copied().collect();
        Mask::from_vec(self.catalog_id.iter().map(|id| wanted.contains(id)).collect())
    }
}
