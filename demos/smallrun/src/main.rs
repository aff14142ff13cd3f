//! smallrun — smallest end-to-end example for the ppv toolkit.
//!
//! Builds one synthetic field, runs the plate-design allocation simulator
//! over a three-program candidate list, then plays the resolver's role in
//! pre-validation: compare what *could* be observed in the field against
//! what the (simulated) drilled plate actually assigned.

use std::io::Cursor;

use anyhow::Result;
use rand::Rng;

use ppv_alloc::simulate_design;
use ppv_catalog::{HoleSource, HoleTable, SummaryContext, SummaryRow};
use ppv_core::{DrawRng, Instrument, PerInstrument, PlateId, SkyPoint, TargetType, DEFAULT_SEED};
use ppv_priority::{load_ordering_reader, PriorityIndex};
use ppv_spatial::{AvailabilityResolver, MatchTolerance};
use ppv_targets::{TargetSet, TargetSetBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = DEFAULT_SEED;
const FIELD_NAME: &str = "AQM_demo";
const FIELD_CENTER: SkyPoint = SkyPoint { ra: 180.0, dec: 0.0 };
const APOGEE_FIBERS: usize = 30;
const BOSS_FIBERS: usize = 50;

// ── Fiber-filling order (rank = row position) ─────────────────────────────────

const ORDER_CSV: &str = "\
instrument,program\n\
apogee,mwm_yso_cluster\n\
boss,bhm_aqmes_med\n\
apogee,mwm_rv_long\n\
";

// ── Synthetic candidate list ──────────────────────────────────────────────────

/// Scatter `count` candidates of one program uniformly within ~1.2 deg of
/// the field center (all available; seeded, so the demo is reproducible).
fn scatter(
    b: &mut TargetSetBuilder,
    rng: &mut DrawRng,
    first_id: u64,
    count: usize,
    instrument: Instrument,
    program: &str,
) {
    for i in 0..count {
        let d_ra = rng.inner().gen_range(-1.2..1.2);
        let d_dec = rng.inner().gen_range(-1.2..1.2);
        b.push_target(
            first_id + i as u64,
            SkyPoint::new(FIELD_CENTER.ra + d_ra, FIELD_CENTER.dec + d_dec),
            instrument,
            program,
            TargetType::Science,
        );
    }
}

fn build_candidates(rng: &mut DrawRng) -> TargetSet {
    let mut b = TargetSetBuilder::with_capacity(170);
    scatter(&mut b, rng, 1_000, 50, Instrument::Apogee, "mwm_yso_cluster");
    scatter(&mut b, rng, 2_000, 80, Instrument::Boss, "bhm_aqmes_med");
    scatter(&mut b, rng, 3_000, 40, Instrument::Apogee, "mwm_rv_long");
    b.build()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== smallrun — ppv plate pre-validation ===");
    println!("Field: {FIELD_NAME}  |  Fibers: apogee {APOGEE_FIBERS}, boss {BOSS_FIBERS}  |  Seed: {SEED}");
    println!();

    // 1. Plate summary context (normally parsed from the summary file).
    let summary = SummaryContext::init(vec![SummaryRow {
        plate: PlateId(15_998),
        field: FIELD_NAME.to_owned(),
        platerun: "2021.01.x.demo".to_owned(),
        ra_cen: FIELD_CENTER.ra,
        dec_cen: FIELD_CENTER.dec,
        program: "demo".to_owned(),
    }]);
    let field = summary.field_region(FIELD_NAME)?;
    println!("Region: {field}");

    // 2. Program priority index from the embedded order file.
    let ordering = load_ordering_reader(Cursor::new(ORDER_CSV))?;
    let index = PriorityIndex::from_ordering(&ordering);
    println!("Priority index: {} ranked programs", index.len());

    // 3. Candidate table, annotated with allocation ranks.
    let mut rng = DrawRng::new(SEED);
    let candidates = build_candidates(&mut rng).with_priorities(&index)?;
    println!("Candidates: {} rows", candidates.len());

    // 4. Simulate plate design.
    let capacities = PerInstrument::new(APOGEE_FIBERS, BOSS_FIBERS);
    let alloc = simulate_design(&candidates, capacities, SEED)?;
    println!(
        "Allocated: {} fibers (apogee {}, boss {})",
        alloc.targets.len(),
        alloc.assigned[Instrument::Apogee],
        alloc.assigned[Instrument::Boss],
    );

    // 5. Pretend the plate was drilled exactly as simulated: one hole per
    //    allocated target, plus two sky holes that match no candidate.
    let mut holes: Vec<SkyPoint> = alloc.targets.sky_points().collect();
    holes.push(SkyPoint::new(FIELD_CENTER.ra + 0.9, FIELD_CENTER.dec + 0.9));
    holes.push(SkyPoint::new(FIELD_CENTER.ra - 0.9, FIELD_CENTER.dec - 0.9));
    let mut hole_table = HoleTable::new();
    hole_table.insert(FIELD_NAME, holes);

    // 6. Resolve availability vs. assignment for the candidate list.
    let mut resolver = AvailabilityResolver::new();
    let drilled = hole_table.holes_for(FIELD_NAME).expect("holes registered above");

    let available = resolver.available_in(&candidates, &field).clone();
    let assigned = resolver
        .assigned_in(&candidates, &field, drilled, MatchTolerance::default())
        .clone();
    let missed = resolver.not_assigned_in(&candidates, &field, drilled, MatchTolerance::default());

    println!();
    println!("Available in {FIELD_NAME}:   {:>4}", available.count());
    println!("Assigned a fiber:       {:>4}", assigned.count());
    println!("Available, not drilled: {:>4}", missed.count());

    Ok(())
}
