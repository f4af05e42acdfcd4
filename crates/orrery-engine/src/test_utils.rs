//! Recording fakes for the collaborator traits.

use glam::{Vec2, Vec3};

use crate::api::collaborators::{InfoOverlay, RayPicker, SceneSink};
use crate::api::types::{BodyId, CameraPose};
use crate::bodies::{BodyDescriptor, BodyRegistry};
use crate::renderer::camera::OrbitCamera;

/// Keeps the latest transform per body and counts writes.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub transforms: Vec<Option<(Vec3, f32)>>,
    pub camera: Option<CameraPose>,
    pub transform_writes: usize,
    pub camera_writes: usize,
}

impl RecordingSink {
    pub fn transform(&self, id: BodyId) -> Option<(Vec3, f32)> {
        self.transforms.get(id.index()).copied().flatten()
    }
}

impl SceneSink for RecordingSink {
    fn set_body_transform(&mut self, id: BodyId, position: Vec3, spin: f32) {
        if self.transforms.len() <= id.index() {
            self.transforms.resize(id.index() + 1, None);
        }
        self.transforms[id.index()] = Some((position, spin));
        self.transform_writes += 1;
    }

    fn set_camera(&mut self, pose: &CameraPose) {
        self.camera = Some(*pose);
        self.camera_writes += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCall {
    Show(String),
    Hide,
}

/// Records every show/hide call in order.
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    pub calls: Vec<OverlayCall>,
    pub showing: Option<String>,
}

impl InfoOverlay for RecordingOverlay {
    fn show_info(&mut self, body: &BodyDescriptor) {
        self.calls.push(OverlayCall::Show(body.name.clone()));
        self.showing = Some(body.name.clone());
    }

    fn hide_info(&mut self) {
        self.calls.push(OverlayCall::Hide);
        self.showing = None;
    }
}

/// Answers picks from a script, regardless of geometry.
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    pub answers: Vec<Option<BodyId>>,
    pub queries: Vec<Vec2>,
}

impl ScriptedPicker {
    pub fn always(answer: Option<BodyId>) -> Self {
        Self {
            answers: vec![answer],
            queries: Vec::new(),
        }
    }
}

impl RayPicker for ScriptedPicker {
    fn pick(&mut self, ndc: Vec2, _camera: &OrbitCamera, _registry: &BodyRegistry) -> Option<BodyId> {
        self.queries.push(ndc);
        match self.answers.len() {
            0 => None,
            1 => self.answers[0],
            _ => self.answers.remove(0),
        }
    }
}

/// Sun plus two planets with round-number parameters.
pub fn tiny_system() -> BodyRegistry {
    BodyRegistry::create([
        BodyDescriptor::star("Sun", 10.0).with_rotation_speed(0.002),
        BodyDescriptor::planet("Earth", 1.6, 36.0, 0.01).with_rotation_speed(0.02),
        BodyDescriptor::planet("Jupiter", 5.0, 64.0, 0.002).with_rotation_speed(0.04),
    ])
    .expect("valid test system")
}
