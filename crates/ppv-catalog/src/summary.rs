//! The all-plate summary table and its query context.

use rustc_hash::FxHashMap;

use ppv_core::{PlateId, SkyPoint};
use ppv_spatial::Region;

use crate::{CatalogError, CatalogResult};

/// One row of the all-plate summary: a drilled plate, the field it points
/// at, and the platerun that produced it.  Supplied by the external summary
/// loader.
#[derive(Clone, Debug)]
pub struct SummaryRow {
    pub plate: PlateId,
    pub field: String,
    pub platerun: String,
    /// Field center, degrees.
    pub ra_cen: f64,
    pub dec_cen: f64,
    /// Survey program label for the field (reporting only).
    pub program: String,
}

/// Queryable view of the loaded plate summary.
///
/// Explicit lifecycle: built once with [`init`](Self::init), refreshed with
/// [`reload`](Self::reload) when the summary file changes on disk.  Holds no
/// global state — callers own the context and pass it where it is needed.
pub struct SummaryContext {
    rows: Vec<SummaryRow>,
    by_field: FxHashMap<String, Vec<usize>>,
    by_platerun: FxHashMap<String, Vec<usize>>,
    by_plate: FxHashMap<PlateId, usize>,
}

impl SummaryContext {
    /// Build the context and its lookup indexes from loaded summary rows.
    pub fn init(rows: Vec<SummaryRow>) -> Self {
        let mut ctx = SummaryContext {
            rows: Vec::new(),
            by_field: FxHashMap::default(),
            by_platerun: FxHashMap::default(),
            by_plate: FxHashMap::default(),
        };
        ctx.reload(rows);
        ctx
    }

    /// Replace the summary wholesale (e.g. after the external layer fetched
    /// a newer file).  All indexes are rebuilt; nothing from the previous
    /// load survives.
    pub fn reload(&mut self, rows: Vec<SummaryRow>) {
        self.by_field.clear();
        self.by_platerun.clear();
        self.by_plate.clear();
        for (i, row) in rows.iter().enumerate() {
            self.by_field.entry(row.field.clone()).or_default().push(i);
            self.by_platerun.entry(row.platerun.clone()).or_default().push(i);
            self.by_plate.insert(row.plate, i);
        }
        self.rows = rows;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ── Grouping queries ──────────────────────────────────────────────────

    /// All platerun names in the summary, sorted, without repeats.
    pub fn plateruns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_platerun.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Field names of one platerun, sorted, without repeats.
    pub fn fields_of(&self, platerun: &str) -> CatalogResult<Vec<&str>> {
        let rows = self
            .by_platerun
            .get(platerun)
            .ok_or_else(|| CatalogError::PlateRunMissing(platerun.to_owned()))?;
        let mut names: Vec<&str> = rows.iter().map(|&i| self.rows[i].field.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        Ok(names)
    }

    /// Plates drilled for one field.
    pub fn plates_of(&self, field: &str) -> CatalogResult<Vec<PlateId>> {
        let rows = self
            .by_field
            .get(field)
            .ok_or_else(|| CatalogError::FieldNotFound(field.to_owned()))?;
        Ok(rows.iter().map(|&i| self.rows[i].plate).collect())
    }

    // ── Region construction ───────────────────────────────────────────────

    /// Observable region of a field: its summary center with the standard
    /// APO plate radius.
    pub fn field_region(&self, field: &str) -> CatalogResult<Region> {
        let rows = self
            .by_field
            .get(field)
            .ok_or_else(|| CatalogError::FieldNotFound(field.to_owned()))?;
        let row = &self.rows[rows[0]];
        Ok(Region::apo(field, SkyPoint::new(row.ra_cen, row.dec_cen))?)
    }

    /// Observable region of a single plate.  Plates share their field's
    /// center and radius; the region is named after the plate so spatial
    /// caches keep plate- and field-level masks apart.
    pub fn plate_region(&self, plate: PlateId) -> CatalogResult<Region> {
        let &i = self
            .by_plate
            .get(&plate)
            .ok_or(CatalogError::PlateNotFound(plate))?;
        let row = &self.rows[i];
        Ok(Region::apo(plate.to_string(), SkyPoint::new(row.ra_cen, row.dec_cen))?)
    }

    /// Regions of every field in a platerun, for union-availability queries.
    pub fn platerun_regions(&self, platerun: &str) -> CatalogResult<Vec<Region>> {
        self.fields_of(platerun)?
            .into_iter()
            .map(|f| self.field_region(f))
            .collect()
    }
}
