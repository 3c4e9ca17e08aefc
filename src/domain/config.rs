//! World construction configuration
//!
//! Loaded from JSON the same way content bundles are, then validated once.
//! Every field has a default so partial documents are accepted.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

use super::force::Force;

/// What happens when a body reaches a world edge
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Solid wall: bodies bounce off it
    #[default]
    Hard,
    /// Bodies leaving here re-enter from the opposite edge
    Wrap,
    /// No edge at all
    Open,
}

/// Independent policy per edge. `top` is `y = 0`, `bottom` is `y = height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Boundaries {
    pub top: Boundary,
    pub bottom: Boundary,
    pub left: Boundary,
    pub right: Boundary,
}

impl Boundaries {
    pub const fn uniform(policy: Boundary) -> Self {
        Self { top: policy, bottom: policy, left: policy, right: policy }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub gravitational_constant: f64,
    /// Uniform pull applied to every body, scaled by `G` and the body's mass
    pub gravity: Option<Force>,
    pub boundaries: Boundaries,
    /// Pairwise Newtonian attraction between bodies
    pub bodies_attract: bool,
    /// Bodies lighter than this exert no mutual gravity
    pub gravity_mass_threshold: f64,
    /// Density of the surrounding medium, drives drag outside fluids
    pub medium_density: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            gravitational_constant: 1.0,
            gravity: None,
            boundaries: Boundaries::default(),
            bodies_attract: false,
            gravity_mass_threshold: 0.0,
            medium_density: 0.0,
        }
    }
}

impl WorldConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(EngineError::config(format!("width must be positive, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(EngineError::config(format!("height must be positive, got {}", self.height)));
        }
        if !self.gravitational_constant.is_finite() {
            return Err(EngineError::config("gravitational constant must be finite"));
        }
        if let Some(g) = self.gravity {
            if !(g.magnitude.is_finite() && g.direction.is_finite()) {
                return Err(EngineError::config("gravity must be finite"));
            }
        }
        if !(self.gravity_mass_threshold.is_finite() && self.gravity_mass_threshold >= 0.0) {
            return Err(EngineError::config("gravity mass threshold must be non-negative"));
        }
        if !(self.medium_density.is_finite() && self.medium_density >= 0.0) {
            return Err(EngineError::config("medium density must be non-negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg = WorldConfig::from_json(r#"{"width": 640, "boundaries": {"left": "wrap"}}"#).unwrap();
        assert_eq!(cfg.width, 640.0);
        assert_eq!(cfg.height, 1000.0);
        assert_eq!(cfg.boundaries.left, Boundary::Wrap);
        assert_eq!(cfg.boundaries.right, Boundary::Hard);
        assert!(cfg.gravity.is_none());
    }

    #[test]
    fn gravity_parses_as_force() {
        let cfg = WorldConfig::from_json(r#"{"gravity": {"magnitude": 0.5, "direction": 0}}"#).unwrap();
        assert_eq!(cfg.gravity, Some(Force::new(0.5, 0.0)));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            WorldConfig::from_json(r#"{"width": 0}"#),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert!(matches!(
            WorldConfig::from_json(r#"{"medium_density": -1}"#),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert!(matches!(WorldConfig::from_json("{"), Err(EngineError::ConfigParse(_))));
    }

    #[test]
    fn round_trips_through_json() {
        let mut cfg = WorldConfig::new(300.0, 200.0);
        cfg.boundaries = Boundaries::uniform(Boundary::Open);
        let back = WorldConfig::from_json(&cfg.to_json()).unwrap();
        assert_eq!(back, cfg);
    }
}
