//! Authored body data.
//!
//! Sizes, distances and speeds are chosen for readability on screen, not
//! physical accuracy. Speeds are per tick at a 1.0 multiplier.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use super::descriptor::BodyDescriptor;
use super::registry::BodyRegistry;

/// An ordered list of descriptors, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalog {
    pub bodies: Vec<BodyDescriptor>,
}

impl BodyCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn into_registry(self) -> Result<BodyRegistry> {
        BodyRegistry::create(self.bodies)
    }
}

/// The Sun and the eight planets, innermost first.
pub fn default_solar_system() -> BodyCatalog {
    let bodies = vec![
        BodyDescriptor::star("Sun", 10.0)
            .with_rotation_speed(0.002)
            .with_color(1.0, 0.85, 0.4)
            .with_emissive(1.0, 0.7, 0.2)
            .with_fact("Type", "G-type main-sequence star")
            .with_fact("Diameter", "1,392,700 km")
            .with_fact("Surface temperature", "5,500 °C")
            .with_fact("Age", "4.6 billion years")
            .with_fact("Share of system mass", "99.86%"),
        BodyDescriptor::planet("Mercury", 0.8, 18.0, 0.04)
            .with_rotation_speed(0.004)
            .with_color(0.6, 0.55, 0.5)
            .with_fact("Diameter", "4,879 km")
            .with_fact("Distance from Sun", "57.9 million km")
            .with_fact("Orbital period", "88 days")
            .with_fact("Day length", "59 Earth days")
            .with_fact("Moons", "0"),
        BodyDescriptor::planet("Venus", 1.5, 26.0, 0.015)
            .with_rotation_speed(0.002)
            .with_color(0.9, 0.75, 0.45)
            .with_fact("Diameter", "12,104 km")
            .with_fact("Distance from Sun", "108.2 million km")
            .with_fact("Orbital period", "225 days")
            .with_fact("Day length", "243 Earth days")
            .with_fact("Moons", "0"),
        BodyDescriptor::planet("Earth", 1.6, 36.0, 0.01)
            .with_rotation_speed(0.02)
            .with_color(0.25, 0.45, 0.85)
            .with_fact("Diameter", "12,742 km")
            .with_fact("Distance from Sun", "149.6 million km")
            .with_fact("Orbital period", "365.25 days")
            .with_fact("Day length", "24 hours")
            .with_fact("Moons", "1"),
        BodyDescriptor::planet("Mars", 1.1, 46.0, 0.008)
            .with_rotation_speed(0.018)
            .with_color(0.75, 0.35, 0.2)
            .with_fact("Diameter", "6,779 km")
            .with_fact("Distance from Sun", "227.9 million km")
            .with_fact("Orbital period", "687 days")
            .with_fact("Day length", "24.6 hours")
            .with_fact("Moons", "2"),
        BodyDescriptor::planet("Jupiter", 5.0, 64.0, 0.002)
            .with_rotation_speed(0.04)
            .with_color(0.8, 0.65, 0.45)
            .with_fact("Diameter", "139,820 km")
            .with_fact("Distance from Sun", "778.5 million km")
            .with_fact("Orbital period", "11.9 years")
            .with_fact("Day length", "9.9 hours")
            .with_fact("Moons", "95"),
        BodyDescriptor::planet("Saturn", 4.2, 84.0, 0.0009)
            .with_rotation_speed(0.038)
            .with_color(0.85, 0.75, 0.5)
            .with_rings()
            .with_fact("Diameter", "116,460 km")
            .with_fact("Distance from Sun", "1.43 billion km")
            .with_fact("Orbital period", "29.5 years")
            .with_fact("Day length", "10.7 hours")
            .with_fact("Moons", "146"),
        BodyDescriptor::planet("Uranus", 2.6, 102.0, 0.0004)
            .with_rotation_speed(0.03)
            .with_color(0.55, 0.8, 0.85)
            .with_fact("Diameter", "50,724 km")
            .with_fact("Distance from Sun", "2.87 billion km")
            .with_fact("Orbital period", "84 years")
            .with_fact("Day length", "17.2 hours")
            .with_fact("Moons", "28"),
        BodyDescriptor::planet("Neptune", 2.5, 118.0, 0.0001)
            .with_rotation_speed(0.032)
            .with_color(0.3, 0.4, 0.85)
            .with_fact("Diameter", "49,244 km")
            .with_fact("Distance from Sun", "4.5 billion km")
            .with_fact("Orbital period", "165 years")
            .with_fact("Day length", "16.1 hours")
            .with_fact("Moons", "16"),
    ];
    BodyCatalog { bodies }
}
