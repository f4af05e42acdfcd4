use std::collections::HashSet;
use std::f64::consts::TAU;

use glam::Vec3;

use crate::api::types::BodyId;
use crate::error::{OrreryError, Result};
use super::descriptor::{orbit_position, BodyDescriptor, BodyState};

/// Divisor of the initial angular spacing between planets.
/// Fixed at 8 whatever the planet count, so other counts space unevenly.
pub const INITIAL_SPACING_DIVISOR: f64 = 8.0;

/// A descriptor paired with its live state.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub descriptor: BodyDescriptor,
    pub state: BodyState,
}

impl Body {
    /// Current position, derived from the orbital angle every time.
    pub fn position(&self) -> Vec3 {
        orbit_position(self.state.orbital_angle, self.descriptor.orbit_radius)
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

/// Fixed, ordered set of bodies. No removal; ids are insertion indices.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    star: BodyId,
}

impl BodyRegistry {
    /// Build the registry. Exactly one star is required and names must be unique.
    ///
    /// The n-th planet (counting planets only, from 0) starts at `n * 2π / 8`.
    pub fn create(descriptors: impl IntoIterator<Item = BodyDescriptor>) -> Result<Self> {
        let descriptors: Vec<BodyDescriptor> = descriptors.into_iter().collect();

        let star_count = descriptors.iter().filter(|d| d.is_star()).count();
        if star_count != 1 {
            return Err(OrreryError::StarCount(star_count));
        }

        let mut seen = HashSet::with_capacity(descriptors.len());
        for d in &descriptors {
            if !seen.insert(d.name.as_str()) {
                return Err(OrreryError::DuplicateBody(d.name.clone()));
            }
            if !(d.display_radius > 0.0) {
                return Err(OrreryError::InvalidBody {
                    name: d.name.clone(),
                    field: "display_radius",
                    value: d.display_radius as f64,
                });
            }
            if !(d.orbit_radius >= 0.0) {
                return Err(OrreryError::InvalidBody {
                    name: d.name.clone(),
                    field: "orbit_radius",
                    value: d.orbit_radius as f64,
                });
            }
        }

        let mut star = BodyId(0);
        let mut planet_ordinal = 0u32;
        let bodies = descriptors
            .into_iter()
            .enumerate()
            .map(|(i, descriptor)| {
                let id = BodyId(i as u32);
                let angle = if descriptor.is_star() {
                    star = id;
                    0.0
                } else {
                    let a = planet_ordinal as f64 * TAU / INITIAL_SPACING_DIVISOR;
                    planet_ordinal += 1;
                    a
                };
                Body {
                    id,
                    descriptor,
                    state: BodyState::at_angle(angle),
                }
            })
            .collect();

        Ok(Self { bodies, star })
    }

    /// Set a body's speed multiplier. Unknown names are ignored; values are not clamped.
    pub fn set_speed_multiplier(&mut self, name: &str, value: f64) {
        match self.bodies.iter_mut().find(|b| b.descriptor.name == name) {
            Some(body) => body.state.speed_multiplier = value,
            None => log::debug!("speed multiplier for unknown body `{name}` ignored"),
        }
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.descriptor.name == name)
    }

    pub fn star(&self) -> &Body {
        &self.bodies[self.star.index()]
    }

    pub fn star_id(&self) -> BodyId {
        self.star
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
