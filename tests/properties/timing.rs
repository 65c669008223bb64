//! Property tests for rotation, stagger and the loading schedule.

use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use folio::loading::LoadingSchedule;
use folio::motion::{stagger, STAGGER_STEP};
use folio::rotation::{RoleRotator, ROTATION_INTERVAL};

proptest! {
    /// PROPERTY: the role on screen after n intervals is role n mod len.
    #[test]
    fn property_rotation_wraps(len in 1usize..6, ticks in 0u64..50) {
        let roles: Vec<String> = (0..len).map(|i| format!("role-{i}")).collect();
        let rotator = RoleRotator::new(&roles);
        let elapsed = ROTATION_INTERVAL * ticks as u32 + Duration::from_millis(1);
        let expected = format!("role-{}", ticks as usize % len);
        prop_assert_eq!(rotator.at(elapsed), Some(expected.as_str()));
    }

    /// PROPERTY: stagger delays grow by one step per index.
    #[test]
    fn property_stagger_is_monotonic(base in 0u32..20, index in 0usize..30) {
        let base = base as f64 / 10.0;
        let here = stagger(base, STAGGER_STEP, index);
        let next = stagger(base, STAGGER_STEP, index + 1);
        prop_assert!(next > here);
        prop_assert!((next - here - STAGGER_STEP).abs() < 1e-6);
    }

    /// PROPERTY: loading widths never decrease and never exceed 100.
    #[test]
    fn property_loading_schedule_is_monotonic(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let schedule = LoadingSchedule::generate(&mut rng);
        prop_assert_eq!(schedule.samples[0].width, 0.0);
        for pair in schedule.samples.windows(2) {
            prop_assert!(pair[1].at_ms > pair[0].at_ms);
            prop_assert!(pair[1].width >= pair[0].width);
            prop_assert!(pair[1].width <= 100.0);
        }
        prop_assert!(schedule.samples.last().unwrap().at_ms <= schedule.hide_after_ms);
    }

    /// PROPERTY: the same seed gives the same schedule.
    #[test]
    fn property_loading_schedule_is_seeded(seed in any::<u64>()) {
        let a = LoadingSchedule::generate(&mut StdRng::seed_from_u64(seed));
        let b = LoadingSchedule::generate(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}
