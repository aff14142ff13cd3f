//! Unit tests for the allocation simulator.
//!
//! All fixtures are hand-built tables; ranks are attached directly through
//! a synthetic ordering so the tests stay independent of any order file.

#[cfg(test)]
mod helpers {
    use ppv_core::{Instrument, SkyPoint, TargetType};
    use ppv_priority::{PriorityIndex, ProgramOrdering};
    use ppv_targets::{TargetSet, TargetSetBuilder};

    /// Build an annotated table from `(count, instrument, program, type)`
    /// group specs.  Catalog IDs are sequential from 1, coordinates are
    /// irrelevant to allocation and set to a fixed point.
    pub fn table(groups: &[(usize, Instrument, &str, TargetType)]) -> TargetSet {
        let mut ordering = ProgramOrdering::new();
        for &(_, instrument, program, _) in groups {
            ordering.push(instrument, program);
        }
        let index = PriorityIndex::from_ordering(&ordering);

        let mut b = TargetSetBuilder::new();
        let mut next_id = 1u64;
        for &(count, instrument, program, target_type) in groups {
            for _ in 0..count {
                b.push_target(next_id, SkyPoint::new(180.0, 0.0), instrument, program, target_type);
                next_id += 1;
            }
        }
        b.build().with_priorities(&index).unwrap()
    }
}

#[cfg(test)]
mod capacity {
    use ppv_core::{Instrument, PerInstrument, TargetType, DEFAULT_SEED};

    use super::helpers::table;
    use crate::simulate_design;

    #[test]
    fn oversubscribed_group_is_down_sampled() {
        // 150 candidates, 100 fibers: exactly 100 selected, budget consumed,
        // and a lower-priority group on the same instrument gets nothing.
        let t = table(&[
            (150, Instrument::Apogee, "mwm_first", TargetType::Science),
            (40, Instrument::Apogee, "mwm_second", TargetType::Science),
        ]);
        let caps = PerInstrument::new(100, 0);

        let alloc = simulate_design(&t, caps, DEFAULT_SEED).unwrap();
        assert_eq!(alloc.targets.len(), 100);
        assert_eq!(alloc.assigned[Instrument::Apogee], 100);
        // Group 2 occupies IDs 151..=190; none may appear.
        assert!(alloc.targets.catalog_ids().iter().all(|id| id.0 <= 150));
    }

    #[test]
    fn total_never_exceeds_capacity_sum() {
        let t = table(&[
            (80, Instrument::Apogee, "a1", TargetType::Science),
            (200, Instrument::Boss, "b1", TargetType::Science),
            (90, Instrument::Apogee, "a2", TargetType::Science),
        ]);
        let caps = PerInstrument::new(100, 150);
        let alloc = simulate_design(&t, caps, DEFAULT_SEED).unwrap();

        assert!(alloc.targets.len() <= 250);
        assert!(alloc.assigned[Instrument::Apogee] <= 100);
        assert!(alloc.assigned[Instrument::Boss] <= 150);
        // 80 + 20 apogee, 150 boss
        assert_eq!(alloc.assigned[Instrument::Apogee], 100);
        assert_eq!(alloc.assigned[Instrument::Boss], 150);
    }

    #[test]
    fn zero_capacity_skips_every_group_of_that_instrument() {
        let t = table(&[
            (10, Instrument::Apogee, "a1", TargetType::Science),
            (10, Instrument::Boss, "b1", TargetType::Science),
        ]);
        let caps = PerInstrument::new(0, 500);
        let alloc = simulate_design(&t, caps, DEFAULT_SEED).unwrap();
        assert_eq!(alloc.assigned[Instrument::Apogee], 0);
        assert_eq!(alloc.assigned[Instrument::Boss], 10);
        assert_eq!(alloc.targets.len(), 10);
    }

    #[test]
    fn exhausted_instrument_does_not_stop_the_walk() {
        // Apogee fills at rank 0; the boss group at rank 2 must still land.
        let t = table(&[
            (100, Instrument::Apogee, "a1", TargetType::Science),
            (50, Instrument::Apogee, "a2", TargetType::Science),
            (30, Instrument::Boss, "b1", TargetType::Science),
        ]);
        let caps = PerInstrument::new(100, 300);
        let alloc = simulate_design(&t, caps, DEFAULT_SEED).unwrap();
        assert_eq!(alloc.assigned[Instrument::Apogee], 100);
        assert_eq!(alloc.assigned[Instrument::Boss], 30);
    }
}

#[cfg(test)]
mod priority {
    use ppv_core::{Instrument, PerInstrument, TargetType, DEFAULT_SEED};

    use super::helpers::table;
    use crate::simulate_design;

    #[test]
    fn higher_rank_starves_lower_rank() {
        let t = table(&[
            (60, Instrument::Boss, "b_high", TargetType::Science),
            (60, Instrument::Boss, "b_low", TargetType::Science),
        ]);
        let caps = PerInstrument::new(0, 60);
        let alloc = simulate_design(&t, caps, DEFAULT_SEED).unwrap();

        // Capacity exhausted during the rank-0 group: every selected row is
        // from it (IDs 1..=60), none from rank 1.
        assert_eq!(alloc.targets.len(), 60);
        assert!(alloc.targets.catalog_ids().iter().all(|id| id.0 <= 60));
    }

    #[test]
    fn partial_budget_spills_into_next_group() {
        let t = table(&[
            (40, Instrument::Boss, "b_high", TargetType::Science),
            (40, Instrument::Boss, "b_low", TargetType::Science),
        ]);
        let caps = PerInstrument::new(0, 60);
        let alloc = simulate_design(&t, caps, DEFAULT_SEED).unwrap();

        assert_eq!(alloc.targets.len(), 60);
        let from_high = alloc.targets.catalog_ids().iter().filter(|id| id.0 <= 40).count();
        assert_eq!(from_high, 40, "whole higher group taken before sampling the lower");
    }

    #[test]
    fn non_science_groups_are_skipped() {
        let t = table(&[
            (20, Instrument::Apogee, "a_std", TargetType::Standard),
            (20, Instrument::Apogee, "a_sky", TargetType::Sky),
            (20, Instrument::Apogee, "a_sci", TargetType::Science),
        ]);
        let caps = PerInstrument::new(100, 0);
        let alloc = simulate_design(&t, caps, DEFAULT_SEED).unwrap();

        assert_eq!(alloc.targets.len(), 20);
        assert!(alloc.targets.target_types().iter().all(|t| t.is_science()));
        assert_eq!(alloc.assigned[Instrument::Apogee], 20);
    }
}

#[cfg(test)]
mod determinism {
    use ppv_core::{Instrument, PerInstrument, TargetType};

    use super::helpers::table;
    use crate::simulate_design;

    #[test]
    fn same_seed_same_selection() {
        let t = table(&[(500, Instrument::Boss, "b1", TargetType::Science)]);
        let caps = PerInstrument::new(0, 123);

        let a = simulate_design(&t, caps, 42).unwrap();
        let b = simulate_design(&t, caps, 42).unwrap();
        assert_eq!(a.targets.catalog_ids(), b.targets.catalog_ids());
    }

    #[test]
    fn different_seed_different_selection() {
        let t = table(&[(500, Instrument::Boss, "b1", TargetType::Science)]);
        let caps = PerInstrument::new(0, 123);

        let a = simulate_design(&t, caps, 42).unwrap();
        let b = simulate_design(&t, caps, 43).unwrap();
        assert_ne!(a.targets.catalog_ids(), b.targets.catalog_ids());
    }

    #[test]
    fn output_sorted_by_catalog_id() {
        let t = table(&[
            (100, Instrument::Boss, "b1", TargetType::Science),
            (100, Instrument::Apogee, "a1", TargetType::Science),
        ]);
        let alloc = simulate_design(&t, PerInstrument::new(50, 50), 7).unwrap();
        let ids = alloc.targets.catalog_ids();
        assert!(ids.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[cfg(test)]
mod failures {
    use ppv_core::{Instrument, PerInstrument, SkyPoint, TargetType, DEFAULT_SEED};
    use ppv_priority::{PriorityIndex, ProgramOrdering};
    use ppv_targets::TargetSetBuilder;

    use crate::{simulate_design, AllocError};

    #[test]
    fn empty_table_returns_empty_allocation() {
        let t = TargetSetBuilder::new().build();
        let alloc = simulate_design(&t, PerInstrument::new(300, 500), DEFAULT_SEED).unwrap();
        assert!(alloc.targets.is_empty());
        assert_eq!(alloc.assigned[Instrument::Apogee], 0);
        assert_eq!(alloc.assigned[Instrument::Boss], 0);
    }

    #[test]
    fn missing_priority_column_is_an_error() {
        let mut b = TargetSetBuilder::new();
        b.push_target(1, SkyPoint::new(0.0, 0.0), Instrument::Boss, "p", TargetType::Science);
        let t = b.build();
        assert!(matches!(
            simulate_design(&t, PerInstrument::splat(10), DEFAULT_SEED),
            Err(AllocError::MissingPriorities)
        ));
    }

    #[test]
    fn mixed_instrument_group_is_an_error() {
        // Explicit order numbers (as real order files carry) can place two
        // instruments in the same rank; the simulator must reject the group.
        let mut b = TargetSetBuilder::new();
        b.push_target(1, SkyPoint::new(0.0, 0.0), Instrument::Apogee, "a1", TargetType::Science);
        b.push_target(2, SkyPoint::new(0.0, 0.0), Instrument::Boss, "b1", TargetType::Science);
        let t = b.build().with_priority_ranks(vec![0, 0]).unwrap();

        assert!(matches!(
            simulate_design(&t, PerInstrument::splat(10), DEFAULT_SEED),
            Err(AllocError::MixedInstrumentGroup { rank: 0 })
        ));
    }

    #[test]
    fn mixed_target_type_group_is_an_error() {
        let mut ordering = ProgramOrdering::new();
        ordering.push(Instrument::Boss, "b1");
        let index = PriorityIndex::from_ordering(&ordering);

        let mut b = TargetSetBuilder::new();
        b.push_target(1, SkyPoint::new(0.0, 0.0), Instrument::Boss, "b1", TargetType::Science);
        b.push_target(2, SkyPoint::new(0.0, 0.0), Instrument::Boss, "b1", TargetType::Sky);
        let t = b.build().with_priorities(&index).unwrap();

        assert!(matches!(
            simulate_design(&t, PerInstrument::splat(10), DEFAULT_SEED),
            Err(AllocError::MixedTargetTypeGroup { rank: 0 })
        ));
    }
}
