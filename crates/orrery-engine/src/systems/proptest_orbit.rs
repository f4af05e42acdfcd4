//! Property tests for orbit advancement and follow smoothing.

use glam::Vec3;
use proptest::prelude::*;

use crate::bodies::{orbit_position, BodyDescriptor, BodyRegistry};
use crate::renderer::camera::OrbitCamera;
use crate::systems::orbit::OrbitUpdater;
use crate::test_utils::RecordingSink;

fn single_planet(base: f64, orbit_radius: f32) -> BodyRegistry {
    BodyRegistry::create([
        BodyDescriptor::star("Sun", 10.0),
        BodyDescriptor::planet("P", 1.0, orbit_radius, base).with_rotation_speed(0.01),
    ])
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// n unpaused ticks add exactly n steps of base × multiplier × global.
    #[test]
    fn prop_angle_accumulates_linearly(
        base in 0.0f64..0.05,
        multiplier in 0.0f64..5.0,
        global in 0.0f64..5.0,
        n in 0usize..400,
    ) {
        let mut reg = single_planet(base, 30.0);
        reg.set_speed_multiplier("P", multiplier);
        let mut updater = OrbitUpdater::new();
        let mut sink = RecordingSink::default();

        for _ in 0..n {
            updater.tick(&mut reg, global, false, 0.016, &mut sink);
        }

        let expected = n as f64 * base * multiplier * global;
        let angle = reg.find("P").unwrap().state.orbital_angle;
        prop_assert!((angle - expected).abs() <= 1e-9 * expected.max(1.0),
            "angle {angle} expected {expected}");
        prop_assert_eq!(updater.ticks(), n as u64);
    }

    /// Paused ticks are skipped entirely; only unpaused ones count.
    #[test]
    fn prop_pause_loses_and_duplicates_nothing(
        base in 0.001f64..0.05,
        pattern in prop::collection::vec(any::<bool>(), 0..200),
    ) {
        let mut reg = single_planet(base, 30.0);
        let mut updater = OrbitUpdater::new();
        let mut sink = RecordingSink::default();

        for &paused in &pattern {
            let before = reg.find("P").unwrap().state;
            updater.tick(&mut reg, 1.0, paused, 0.02, &mut sink);
            if paused {
                prop_assert_eq!(reg.find("P").unwrap().state, before);
            }
        }

        let running = pattern.iter().filter(|p| !**p).count();
        let state = reg.find("P").unwrap().state;
        prop_assert!((state.orbital_angle - running as f64 * base).abs() < 1e-9);
        prop_assert!((state.spin_angle - running as f64 * 0.01).abs() < 1e-9);
        prop_assert!((updater.decor_time() - running as f32 * 0.02).abs() < 1e-3);
    }

    /// Positions stay on the circle of the orbit radius in the y = 0 plane.
    #[test]
    fn prop_orbit_is_planar_circle(
        angle in -1.0e4f64..1.0e4,
        radius in 0.0f32..200.0,
    ) {
        let p = orbit_position(angle, radius);
        prop_assert_eq!(p.y, 0.0);
        prop_assert!((p.length() - radius).abs() <= 1e-4 * radius.max(1.0));
    }

    /// Exponential follow never overshoots and closes in on the target.
    #[test]
    fn prop_follow_smoothing_converges(
        sx in -300.0f32..300.0, sy in -300.0f32..300.0, sz in -300.0f32..300.0,
        tx in -300.0f32..300.0, ty in -300.0f32..300.0, tz in -300.0f32..300.0,
        factor in 0.02f32..1.0,
    ) {
        let mut cam = OrbitCamera::default();
        cam.pose.eye = Vec3::new(sx, sy, sz);
        let target = Vec3::new(tx, ty, tz);

        let mut last = cam.pose.eye.distance(target);
        for _ in 0..1000 {
            cam.smooth_toward(target, factor);
            let d = cam.pose.eye.distance(target);
            prop_assert!(d <= last + 1e-3, "distance grew from {last} to {d}");
            last = d;
        }
        prop_assert!(last < 1e-2, "still {last} away");
    }
}
