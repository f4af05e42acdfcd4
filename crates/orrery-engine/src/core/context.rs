//! The simulation context: every piece of mutable state, driven once per
//! rendered frame.
//!
//! Frame order is fixed: input, bodies, body transforms, camera, camera push.
//! Because input is drained at the top of the frame, a drag and a focus
//! transition can never write the camera out of order.

use crate::api::collaborators::{InfoOverlay, RayPicker, SceneSink};
use crate::api::config::SimConfig;
use crate::bodies::BodyRegistry;
use crate::error::Result;
use crate::extensions::tween::CameraTransitions;
use crate::input::{InputEvent, InputQueue, InputRouter, Intent};
use crate::renderer::camera::OrbitCamera;
use crate::systems::focus::{FocusMachine, FocusState};
use crate::systems::orbit::{push_transforms, OrbitUpdater};

pub struct SimContext<S: SceneSink, O: InfoOverlay, P: RayPicker> {
    config: SimConfig,
    registry: BodyRegistry,
    orbit: OrbitUpdater,
    focus: FocusMachine,
    camera: OrbitCamera,
    transitions: CameraTransitions,
    router: InputRouter,
    input: InputQueue,
    global_speed: f64,
    paused: bool,
    sink: S,
    overlay: O,
    picker: P,
}

impl<S: SceneSink, O: InfoOverlay, P: RayPicker> SimContext<S, O, P> {
    /// Validate the config and push the initial transforms and camera.
    pub fn new(config: SimConfig, registry: BodyRegistry, sink: S, overlay: O, picker: P) -> Result<Self> {
        config.validate()?;

        let mut ctx = Self {
            registry,
            orbit: OrbitUpdater::new(),
            focus: FocusMachine::from_config(&config),
            camera: OrbitCamera::from_config(&config),
            transitions: CameraTransitions::new(),
            router: InputRouter::from_config(&config),
            input: InputQueue::new(),
            global_speed: config.global_speed,
            paused: false,
            sink,
            overlay,
            picker,
            config,
        };

        push_transforms(&ctx.registry, &mut ctx.sink);
        ctx.sink.set_camera(&ctx.camera.pose);

        log::info!(
            "orrery: {} bodies, camera radius {}",
            ctx.registry.len(),
            ctx.camera.radius
        );
        Ok(ctx)
    }

    /// Run one rendered frame. `dt` is wall-clock seconds since the last frame.
    pub fn frame(&mut self, dt: f32) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_frame_dt)
        } else {
            0.0
        };

        for event in self.input.drain() {
            if let InputEvent::Resize { width, height } = event {
                self.camera.set_viewport(width, height);
            }
            if let Some(intent) = self.router.route(&event) {
                self.apply(intent);
            }
        }

        self.orbit
            .tick(&mut self.registry, self.global_speed, self.paused, dt, &mut self.sink);

        let owned = self.transitions.tick(dt, &mut self.camera);
        self.focus.track(owned, &self.registry, &mut self.camera);
        self.sink.set_camera(&self.camera.pose);
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Drag { dx, dy } => {
                if self.free_orbit_enabled() {
                    self.camera.orbit(dx, dy);
                }
            }
            Intent::Zoom { factor } => {
                if self.free_orbit_enabled() {
                    self.camera.zoom(factor);
                }
            }
            Intent::Select { ndc } => {
                if let Some(id) = self.picker.pick(ndc, &self.camera, &self.registry) {
                    self.focus
                        .select(id, &self.registry, &self.camera, &mut self.transitions, &mut self.overlay);
                }
            }
        }
    }

    /// Drag and zoom act only on an unfocused camera that nothing is animating.
    fn free_orbit_enabled(&self) -> bool {
        self.focus.state().is_idle() && !self.transitions.is_active()
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn set_speed_multiplier(&mut self, name: &str, value: f64) {
        self.registry.set_speed_multiplier(name, value);
    }

    pub fn set_global_speed(&mut self, value: f64) {
        self.global_speed = value;
    }

    pub fn set_global_pause(&mut self, paused: bool) {
        if self.paused != paused {
            log::debug!("simulation {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    /// Close the overlay and return to the overview.
    pub fn request_focus_reset(&mut self) {
        self.focus
            .reset(&mut self.camera, &mut self.transitions, &mut self.overlay);
    }

    /// Focus a body by name, as if it had been clicked. False if unknown.
    pub fn select_body(&mut self, name: &str) -> bool {
        let Some(id) = self.registry.find(name).map(|b| b.id) else {
            log::debug!("select_body: no body named `{name}`");
            return false;
        };
        self.focus
            .select(id, &self.registry, &self.camera, &mut self.transitions, &mut self.overlay);
        true
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn transitions(&self) -> &CameraTransitions {
        &self.transitions
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn global_speed(&self) -> f64 {
        self.global_speed
    }

    pub fn decor_time(&self) -> f32 {
        self.orbit.decor_time()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }
}
