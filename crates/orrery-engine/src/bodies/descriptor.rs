use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Whether a body sits at the origin or circles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Planet,
}

/// One labelled line of the informational overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Static parameters of a body, authored once.
///
/// Optional presentation fields carry explicit defaults: `color` is white,
/// `emissive` is `None` (no glow), `has_rings` is false, `facts` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    pub kind: BodyKind,
    /// Visual size, not to physical scale.
    pub display_radius: f32,
    /// Distance from the origin (0 for the Sun).
    #[serde(default)]
    pub orbit_radius: f32,
    /// Orbital advance per tick at multiplier 1.0, radians.
    #[serde(default)]
    pub base_angular_speed: f64,
    /// Self-rotation per tick, radians.
    #[serde(default)]
    pub rotation_speed: f64,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    #[serde(default)]
    pub emissive: Option<[f32; 3]>,
    #[serde(default)]
    pub has_rings: bool,
    #[serde(default)]
    pub facts: Vec<Fact>,
}

impl BodyDescriptor {
    pub fn star(name: impl Into<String>, display_radius: f32) -> Self {
        Self {
            name: name.into(),
            kind: BodyKind::Star,
            display_radius,
            orbit_radius: 0.0,
            base_angular_speed: 0.0,
            rotation_speed: 0.0,
            color: default_color(),
            emissive: None,
            has_rings: false,
            facts: Vec::new(),
        }
    }

    pub fn planet(
        name: impl Into<String>,
        display_radius: f32,
        orbit_radius: f32,
        base_angular_speed: f64,
    ) -> Self {
        Self {
            kind: BodyKind::Planet,
            orbit_radius,
            base_angular_speed,
            ..Self::star(name, display_radius)
        }
    }

    // -- Builder methods --

    pub fn with_rotation_speed(mut self, rotation_speed: f64) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = [r, g, b];
        self
    }

    pub fn with_emissive(mut self, r: f32, g: f32, b: f32) -> Self {
        self.emissive = Some([r, g, b]);
        self
    }

    pub fn with_rings(mut self) -> Self {
        self.has_rings = true;
        self
    }

    pub fn with_fact(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.facts.push(Fact {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    /// Emissive colour, black when the body does not glow.
    pub fn emissive_or_default(&self) -> [f32; 3] {
        self.emissive.unwrap_or([0.0; 3])
    }
}

/// Mutable per-body state, alive for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Angular position on the circular path. Never wrapped explicitly.
    pub orbital_angle: f64,
    /// Rotation about the vertical axis. Never wrapped explicitly.
    pub spin_angle: f64,
    /// User-controlled per-body multiplier.
    pub speed_multiplier: f64,
}

impl BodyState {
    pub fn at_angle(orbital_angle: f64) -> Self {
        Self {
            orbital_angle,
            spin_angle: 0.0,
            speed_multiplier: 1.0,
        }
    }
}

impl Default for BodyState {
    fn default() -> Self {
        Self::at_angle(0.0)
    }
}

/// Point on the planar circular orbit for `angle` at distance `orbit_radius`.
#[inline]
pub fn orbit_position(angle: f64, orbit_radius: f32) -> Vec3 {
    let r = orbit_radius as f64;
    Vec3::new((angle.cos() * r) as f32, 0.0, (angle.sin() * r) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let json = r#"{ "name": "Mars", "kind": "planet", "display_radius": 1.1, "orbit_radius": 46.0 }"#;
        let body: BodyDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(body.color, [1.0, 1.0, 1.0]);
        assert_eq!(body.emissive, None);
        assert_eq!(body.emissive_or_default(), [0.0, 0.0, 0.0]);
        assert!(!body.has_rings);
        assert!(body.facts.is_empty());
        assert_eq!(body.base_angular_speed, 0.0);
    }

    #[test]
    fn facts_keep_authored_order() {
        let body = BodyDescriptor::star("Sun", 10.0)
            .with_fact("Type", "G2V")
            .with_fact("Age", "4.6 billion years");
        let labels: Vec<&str> = body.facts.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["Type", "Age"]);
    }

    #[test]
    fn orbit_position_lies_on_plane() {
        let p = orbit_position(std::f64::consts::FRAC_PI_2, 10.0);
        assert!(p.x.abs() < 1e-5);
        assert_eq!(p.y, 0.0);
        assert!((p.z - 10.0).abs() < 1e-5);
    }
}
