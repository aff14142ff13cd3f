//! The greedy allocation walk.

use std::collections::BTreeMap;

use ppv_core::{DrawRng, Instrument, PerInstrument, TargetType};
use ppv_targets::TargetSet;

use crate::{AllocError, AllocResult, FiberBudget};

/// Result of one allocation run.
#[derive(Debug)]
pub struct Allocation {
    /// The rows predicted to receive a fiber, sorted by ascending
    /// `catalog_id` (a fresh table with its own `TableId`).
    pub targets: TargetSet,
    /// Fibers consumed per instrument.
    pub assigned: PerInstrument<usize>,
}

/// Approximate which SCIENCE candidates will be awarded a fiber.
///
/// Walks the priority groups of `candidates` in ascending rank, maintaining
/// one running [`FiberBudget`] per instrument across the whole call:
///
/// - groups whose target type is not SCIENCE are skipped (standards and
///   skies are filled by a separate pass in the real design code);
/// - a group that fits the instrument's remaining budget is taken whole;
/// - a group that does not fit is down-sampled **without replacement** with
///   a generator seeded from `seed`, so a run is reproducible anywhere;
/// - a group on an exhausted instrument contributes nothing, but the walk
///   continues — later groups may feed the other instrument.
///
/// `candidates` must carry the priority rank column
/// (see `TargetSet::with_priorities`); every group must be homogeneous in
/// instrument and target type or the run fails fast with the corresponding
/// data-integrity error.
///
/// Pass [`ppv_core::DEFAULT_SEED`] unless the caller needs an alternative
/// realisation of the random draws.
pub fn simulate_design(
    candidates: &TargetSet,
    capacities: PerInstrument<usize>,
    seed: u64,
) -> AllocResult<Allocation> {
    let Some(ranks) = candidates.priority_ranks() else {
        // An empty table never needs the column; everything else does.
        if candidates.is_empty() {
            return Ok(Allocation {
                targets: candidates.select(&[]),
                assigned: PerInstrument::splat(0),
            });
        }
        return Err(AllocError::MissingPriorities);
    };

    // Partition row indices into priority groups, ascending by rank.
    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (row, &rank) in ranks.iter().enumerate() {
        groups.entry(rank).or_default().push(row);
    }

    let mut budgets = PerInstrument::new(
        FiberBudget::new(capacities[Instrument::Apogee]),
        FiberBudget::new(capacities[Instrument::Boss]),
    );
    let mut rng = DrawRng::new(seed);
    let mut taken: Vec<usize> = Vec::new();

    let instruments = candidates.instruments();
    let types = candidates.target_types();

    for (&rank, rows) in &groups {
        let instrument = group_instrument(instruments, rows, rank)?;
        let target_type = group_target_type(types, rows, rank)?;

        if target_type != TargetType::Science {
            continue; // standards and skies are pre-allocated elsewhere
        }

        let needed = budgets[instrument].needed();
        if needed == 0 {
            continue; // this instrument is full; the other may not be
        }

        if rows.len() <= needed {
            taken.extend_from_slice(rows);
            budgets[instrument].take(rows.len());
        } else {
            let picked = rng.sample_indices(rows.len(), needed);
            taken.extend(picked.into_iter().map(|i| rows[i]));
            budgets[instrument].take(needed);
        }
    }

    // Final table is ordered by catalog ID, not by the walk order.
    let catalog_ids = candidates.catalog_ids();
    taken.sort_by_key(|&row| (catalog_ids[row], row));

    Ok(Allocation {
        targets: candidates.select(&taken),
        assigned: PerInstrument::new(
            budgets[Instrument::Apogee].assigned(),
            budgets[Instrument::Boss].assigned(),
        ),
    })
}

// ── Group homogeneity checks ──────────────────────────────────────────────────

fn group_instrument(
    instruments: &[Instrument],
    rows: &[usize],
    rank: u32,
) -> AllocResult<Instrument> {
    let first = instruments[rows[0]];
    if rows.iter().any(|&r| instruments[r] != first) {
        return Err(AllocError::MixedInstrumentGroup { rank });
    }
    Ok(first)
}

fn group_target_type(
    types: &[TargetType],
    rows: &[usize],
    rank: u32,
) -> AllocResult<TargetType> {
    let first = types[rows[0]];
    if rows.iter().any(|&r| types[r] != first) {
        return Err(AllocError::MixedTargetTypeGroup { rank });
    }
    Ok(first)
}
