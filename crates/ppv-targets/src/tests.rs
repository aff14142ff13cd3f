//! Unit tests for ppv-targets.

#[cfg(test)]
mod helpers {
    use ppv_core::{Instrument, SkyPoint, TargetType};
    use ppv_priority::{PriorityIndex, ProgramOrdering};

    use crate::{TargetSet, TargetSetBuilder};

    /// Two-program candidate table, pushed deliberately out of ID order.
    pub fn small_table() -> TargetSet {
        let mut b = TargetSetBuilder::new();
        b.push_target(30, SkyPoint::new(10.0, 0.0), Instrument::Boss, "bhm_spiders", TargetType::Science);
        b.push_target(10, SkyPoint::new(10.1, 0.1), Instrument::Apogee, "mwm_rv_long", TargetType::Science);
        b.push_target(20, SkyPoint::new(10.2, -0.1), Instrument::Apogee, "mwm_rv_long", TargetType::Standard);
        b.build()
    }

    pub fn index() -> PriorityIndex {
        let mut o = ProgramOrdering::new();
        o.push(Instrument::Apogee, "mwm_rv_long");
        o.push(Instrument::Boss, "bhm_spiders");
        PriorityIndex::from_ordering(&o)
    }
}

#[cfg(test)]
mod build {
    use ppv_core::CatalogId;

    use super::helpers::small_table;

    #[test]
    fn rows_sorted_by_catalog_id() {
        let t = small_table();
        let ids: Vec<u64> = t.catalog_ids().iter().map(|id| id.0).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn fresh_table_ids() {
        let a = small_table();
        let b = small_table();
        assert_ne!(a.table_id(), b.table_id(), "every build stamps a new identity");
    }

    #[test]
    fn membership_mask() {
        let t = small_table();
        let m = t.contains(&[CatalogId(20), CatalogId(99)]);
        assert_eq!(m.indices(), vec![1]);
    }

    #[test]
    fn empty_build() {
        let t = crate::TargetSetBuilder::new().build();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }
}

#[cfg(test)]
mod priorities {
    use crate::TargetError;

    use super::helpers::{index, small_table};

    #[test]
    fn annotation_appends_rank_column() {
        let t = small_table();
        assert!(t.priority_ranks().is_none());

        let annotated = t.with_priorities(&index()).unwrap();
        assert_eq!(annotated.priority_ranks().unwrap(), &[0, 0, 1]);
        // Source table untouched, new identity stamped.
        assert!(t.priority_ranks().is_none());
        assert_ne!(t.table_id(), annotated.table_id());
    }

    #[test]
    fn double_annotation_is_rejected() {
        let annotated = small_table().with_priorities(&index()).unwrap();
        assert!(matches!(
            annotated.with_priorities(&index()),
            Err(TargetError::AlreadyAnnotated)
        ));
    }

    #[test]
    fn external_rank_column() {
        let t = small_table();
        let annotated = t.with_priority_ranks(vec![2, 0, 1]).unwrap();
        assert_eq!(annotated.priority_ranks().unwrap(), &[2, 0, 1]);

        let wrong_len = t.with_priority_ranks(vec![0, 1]);
        assert!(matches!(wrong_len, Err(TargetError::RankColumnLength { expected: 3, got: 2 })));
    }

    #[test]
    fn unlisted_program_is_fatal() {
        use ppv_core::{Instrument, SkyPoint, TargetType};

        let mut b = crate::TargetSetBuilder::new();
        b.push_target(1, SkyPoint::new(0.0, 0.0), Instrument::Boss, "not_in_ordering", TargetType::Science);
        let t = b.build();
        assert!(matches!(
            t.with_priorities(&index()),
            Err(TargetError::Priority(_))
        ));
    }
}

#[cfg(test)]
mod select {
    use super::helpers::{index, small_table};

    #[test]
    fn projection_keeps_columns_aligned() {
        let t = small_table().with_priorities(&index()).unwrap();
        let sub = t.select(&[2, 0]);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.catalog_ids()[0].0, 30);
        assert_eq!(sub.catalog_ids()[1].0, 10);
        assert_eq!(sub.priority_ranks().unwrap(), &[1, 0]);
        assert_ne!(sub.table_id(), t.table_id());
    }

    #[test]
    fn empty_selection() {
        let sub = small_table().select(&[]);
        assert!(sub.is_empty());
    }
}
