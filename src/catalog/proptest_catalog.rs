//! Property-based tests for catalog state management using proptest.
//!
//! These tests drive random sequences of user events through the catalog and
//! check that per-body state stays consistent with the global speed factor.

use proptest::prelude::*;

use super::OrbitCatalog;
use crate::category::Category;
use crate::mechanics::rotation_period_seconds;
use crate::test_utils::fixtures;

#[derive(Clone, Debug)]
enum Op {
    Speed(f64),
    Toggle(usize),
    Select(u32),
    Fade(f32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::sample::select(vec![100.0, 200.0, 500.0, 1000.0]).prop_map(Op::Speed),
        (0usize..4).prop_map(Op::Toggle),
        (0u32..8).prop_map(Op::Select),
        (0.0f32..2.0).prop_map(Op::Fade),
    ]
}

fn populated() -> OrbitCatalog {
    let mut catalog = OrbitCatalog::default();
    catalog.load_str(fixtures::ACTIVE_CSV, Category::Active);
    catalog.load_str(fixtures::STATIONS_CSV, Category::SpaceStation);
    catalog.load_str(fixtures::SIXTEEN_REV_CSV, Category::Weather);
    catalog
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Whatever happened before, every period equals the formula at the
    /// latest factor, with no residue from earlier factors.
    #[test]
    fn prop_periods_track_latest_factor(ops in prop::collection::vec(op(), 1..40)) {
        let mut catalog = populated();

        for op in ops {
            match op {
                Op::Speed(f) => catalog.set_global_speed_factor(f).unwrap(),
                Op::Toggle(i) => { catalog.toggle_category(Category::STARTUP[i]); }
                Op::Select(k) => { let _ = catalog.select(crate::body::BodyKey(k)); }
                Op::Fade(dt) => { catalog.advance_fades(dt, 1.0); }
            }
        }

        let factor = catalog.speed_factor();
        for body in catalog.iter() {
            let expected = rotation_period_seconds(body.elements().rotations_per_day, factor);
            prop_assert_eq!(body.rotation().period_seconds, expected);
        }
        prop_assert_eq!(
            catalog.world().rotation().period_seconds,
            rotation_period_seconds(1.0, factor)
        );
    }

    /// Toggling a category twice restores every body's state, mid-fade or not.
    #[test]
    fn prop_double_toggle_restores(
        ops in prop::collection::vec(op(), 0..20),
        category in 0usize..4,
        fade in 0.0f32..1.0,
    ) {
        let mut catalog = populated();
        for op in ops {
            match op {
                Op::Speed(f) => catalog.set_global_speed_factor(f).unwrap(),
                Op::Toggle(i) => { catalog.toggle_category(Category::STARTUP[i]); }
                Op::Select(_) => {}
                Op::Fade(dt) => { catalog.advance_fades(dt, 1.0); }
            }
        }

        let category = Category::STARTUP[category];
        let before: Vec<bool> = catalog.bodies(category).iter().map(|b| b.is_shown()).collect();

        catalog.toggle_category(category);
        catalog.advance_fades(fade, 1.0);
        catalog.toggle_category(category);

        let after: Vec<bool> = catalog.bodies(category).iter().map(|b| b.is_shown()).collect();
        prop_assert_eq!(before, after);
    }

    /// Opacity never leaves [0, 1].
    #[test]
    fn prop_opacity_bounded(ops in prop::collection::vec(op(), 1..40)) {
        let mut catalog = populated();
        for op in ops {
            match op {
                Op::Toggle(i) => { catalog.toggle_category(Category::STARTUP[i]); }
                Op::Fade(dt) => { catalog.advance_fades(dt, 0.5); }
                _ => {}
            }
            for body in catalog.iter() {
                prop_assert!((0.0..=1.0).contains(&body.opacity()));
            }
        }
    }
}
