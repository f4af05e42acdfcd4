//! Orbit/rotation updater: advances every body once per rendered frame.
//!
//! Bodies are independent (no gravity, no collisions), so each one is
//! advanced by a pure function of its own descriptor and state.

use crate::api::collaborators::SceneSink;
use crate::bodies::{Body, BodyDescriptor, BodyRegistry, BodyState};

/// Next state of one body after a single tick.
#[inline]
pub fn advance(descriptor: &BodyDescriptor, state: BodyState, global_multiplier: f64) -> BodyState {
    BodyState {
        orbital_angle: state.orbital_angle
            + descriptor.base_angular_speed * state.speed_multiplier * global_multiplier,
        spin_angle: state.spin_angle + descriptor.rotation_speed,
        speed_multiplier: state.speed_multiplier,
    }
}

/// Push every body's current transform to the scene graph.
pub fn push_transforms<S: SceneSink + ?Sized>(registry: &BodyRegistry, sink: &mut S) {
    for body in registry.iter() {
        push_body(body, sink);
    }
}

#[inline]
fn push_body<S: SceneSink + ?Sized>(body: &Body, sink: &mut S) {
    sink.set_body_transform(body.id, body.position(), body.state.spin_angle as f32);
}

/// Per-frame driver. Also owns the decorative time uniform handed to shaders,
/// which freezes together with the bodies.
#[derive(Debug, Default)]
pub struct OrbitUpdater {
    decor_time: f32,
    ticks: u64,
}

impl OrbitUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all bodies in insertion order and push their transforms.
    /// When paused, nothing changes and nothing is written.
    pub fn tick<S: SceneSink + ?Sized>(
        &mut self,
        registry: &mut BodyRegistry,
        global_multiplier: f64,
        paused: bool,
        dt: f32,
        sink: &mut S,
    ) {
        if paused {
            return;
        }

        for body in registry.iter_mut() {
            body.state = advance(&body.descriptor, body.state, global_multiplier);
            push_body(body, sink);
        }

        self.decor_time += dt;
        self.ticks += 1;
    }

    /// Elapsed unpaused time, seconds.
    pub fn decor_time(&self) -> f32 {
        self.decor_time
    }

    /// Number of unpaused ticks so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyDescriptor;
    use crate::test_utils::{tiny_system, RecordingSink};
    use approx::assert_relative_eq;

    #[test]
    fn earth_at_double_speed_single_tick() {
        let mut reg = BodyRegistry::create([
            BodyDescriptor::star("Sun", 10.0),
            BodyDescriptor::planet("Earth", 1.6, 36.0, 0.01),
        ])
        .unwrap();
        reg.set_speed_multiplier("Earth", 2.0);

        let mut sink = RecordingSink::default();
        OrbitUpdater::new().tick(&mut reg, 1.0, false, 1.0 / 60.0, &mut sink);

        let earth = reg.find("Earth").unwrap();
        assert_relative_eq!(earth.state.orbital_angle, 0.02, epsilon = 1e-12);
        let pos = earth.position();
        assert_relative_eq!(pos.x, (0.02f64.cos() * 36.0) as f32, epsilon = 1e-5);
        assert_eq!(pos.y, 0.0);
        assert_relative_eq!(pos.z, (0.02f64.sin() * 36.0) as f32, epsilon = 1e-5);
        assert_eq!(sink.transform(earth.id).map(|t| t.0), Some(pos));
    }

    #[test]
    fn global_multiplier_scales_orbit_not_spin() {
        let mut reg = tiny_system();
        let mut sink = RecordingSink::default();
        OrbitUpdater::new().tick(&mut reg, 3.0, false, 0.016, &mut sink);

        let earth = reg.find("Earth").unwrap();
        assert_relative_eq!(earth.state.orbital_angle, 0.03, epsilon = 1e-12);
        assert_relative_eq!(earth.state.spin_angle, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn paused_tick_changes_nothing() {
        let mut reg = tiny_system();
        let before: Vec<BodyState> = reg.iter().map(|b| b.state).collect();
        let mut updater = OrbitUpdater::new();
        let mut sink = RecordingSink::default();

        for _ in 0..10 {
            updater.tick(&mut reg, 1.0, true, 0.016, &mut sink);
        }

        let after: Vec<BodyState> = reg.iter().map(|b| b.state).collect();
        assert_eq!(before, after);
        assert_eq!(updater.decor_time(), 0.0);
        assert_eq!(updater.ticks(), 0);
        assert_eq!(sink.transform_writes, 0);
    }

    #[test]
    fn spin_is_written_as_node_rotation() {
        let mut reg = tiny_system();
        let mut sink = RecordingSink::default();
        let mut updater = OrbitUpdater::new();
        updater.tick(&mut reg, 1.0, false, 0.016, &mut sink);
        updater.tick(&mut reg, 1.0, false, 0.016, &mut sink);

        let jupiter = reg.find("Jupiter").unwrap();
        let (_, spin) = sink.transform(jupiter.id).unwrap();
        assert_relative_eq!(spin, 0.08, epsilon = 1e-6);
    }

    #[test]
    fn sun_stays_at_origin() {
        let mut reg = tiny_system();
        let mut sink = RecordingSink::default();
        let mut updater = OrbitUpdater::new();
        for _ in 0..100 {
            updater.tick(&mut reg, 1.0, false, 0.016, &mut sink);
        }
        assert_eq!(reg.star().position(), glam::Vec3::ZERO);
        assert!(reg.star().state.spin_angle > 0.0);
    }

    #[test]
    fn push_transforms_writes_every_body() {
        let reg = tiny_system();
        let mut sink = RecordingSink::default();
        push_transforms(&reg, &mut sink);
        assert_eq!(sink.transform_writes, reg.len());
    }
}
