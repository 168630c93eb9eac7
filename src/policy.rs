//! Compiler policy: the knobs that steer transform resolution.
//!
//! A [`CompilerPolicy`] is built once at process start (defaults, then an optional JSON file, then
//! environment overrides) and passed by reference into every compile entry point. Nothing in the
//! pipeline reads the environment on its own.

use crate::foundation::error::{ScenemarkError, ScenemarkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`CompilerPolicy::position_scale`].
pub const ENV_POSITION_SCALE: &str = "SCENEMARK_POSITION_SCALE";
/// Environment variable overriding [`CompilerPolicy::enforce_top_down`].
pub const ENV_ENFORCE_TOP_DOWN: &str = "SCENEMARK_ENFORCE_TOP_DOWN";
/// Environment variable overriding [`CompilerPolicy::visibility_y_offset`].
pub const ENV_VISIBILITY_Y_OFFSET: &str = "SCENEMARK_VISIBILITY_Y_OFFSET";
/// Environment variable overriding [`CompilerPolicy::light_min_y`].
pub const ENV_LIGHT_MIN_Y: &str = "SCENEMARK_LIGHT_MIN_Y";
/// Environment variable overriding [`CompilerPolicy::preserve_user_transforms`].
pub const ENV_PRESERVE_USER_TRANSFORMS: &str = "SCENEMARK_PRESERVE_USER_TRANSFORMS";

/// Transform policy applied by [`crate::resolve_placement`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompilerPolicy {
    /// Uniform factor applied to every position axis.
    pub position_scale: f64,
    /// Apply the top-down (marker lies flat, viewer looks down) orientation rules.
    pub enforce_top_down: bool,
    /// Minimum height for content that would otherwise sit in the marker plane.
    pub visibility_y_offset: f64,
    /// Minimum height for lights.
    pub light_min_y: f64,
    /// Carried for compatibility with stored settings; no resolution rule reads it.
    pub preserve_user_transforms: bool,
    /// Rotations with every axis below this magnitude count as "not authored" for models.
    pub rotation_epsilon: f64,
    /// Vertical positions below this magnitude are raised to `visibility_y_offset`.
    pub position_epsilon: f64,
}

impl Default for CompilerPolicy {
    fn default() -> Self {
        Self {
            position_scale: 1.0,
            enforce_top_down: true,
            visibility_y_offset: 0.02,
            light_min_y: 1.0,
            preserve_user_transforms: false,
            rotation_epsilon: 0.01,
            position_epsilon: 0.001,
        }
    }
}

impl CompilerPolicy {
    /// Load a (possibly partial) JSON policy file; missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> ScenemarkResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            ScenemarkError::config(format!("read policy file '{}': {e}", path.display()))
        })?;
        let policy: Self = serde_json::from_slice(&bytes).map_err(|e| {
            ScenemarkError::config(format!("parse policy file '{}': {e}", path.display()))
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> ScenemarkResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (the environment in production).
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ScenemarkResult<Self> {
        if let Some(v) = lookup(ENV_POSITION_SCALE) {
            self.position_scale = parse_f64(ENV_POSITION_SCALE, &v)?;
        }
        if let Some(v) = lookup(ENV_ENFORCE_TOP_DOWN) {
            self.enforce_top_down = parse_bool(ENV_ENFORCE_TOP_DOWN, &v)?;
        }
        if let Some(v) = lookup(ENV_VISIBILITY_Y_OFFSET) {
            self.visibility_y_offset = parse_f64(ENV_VISIBILITY_Y_OFFSET, &v)?;
        }
        if let Some(v) = lookup(ENV_LIGHT_MIN_Y) {
            self.light_min_y = parse_f64(ENV_LIGHT_MIN_Y, &v)?;
        }
        if let Some(v) = lookup(ENV_PRESERVE_USER_TRANSFORMS) {
            self.preserve_user_transforms = parse_bool(ENV_PRESERVE_USER_TRANSFORMS, &v)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject policies that would make resolution meaningless.
    pub fn validate(&self) -> ScenemarkResult<()> {
        let finite = [
            ("positionScale", self.position_scale),
            ("visibilityYOffset", self.visibility_y_offset),
            ("lightMinY", self.light_min_y),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(ScenemarkError::config(format!("{name} must be finite")));
            }
        }
        let eps = [
            ("rotationEpsilon", self.rotation_epsilon),
            ("positionEpsilon", self.position_epsilon),
        ];
        for (name, v) in eps {
            if !(v.is_finite() && v > 0.0) {
                return Err(ScenemarkError::config(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

fn parse_f64(key: &str, raw: &str) -> ScenemarkResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ScenemarkError::config(format!("{key}='{raw}' is not a number: {e}")))
}

fn parse_bool(key: &str, raw: &str) -> ScenemarkResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ScenemarkError::config(format!(
            "{key}='{raw}' is not a boolean"
        ))),
    }
}

#[cfg(test)]
#[path = "../tests/unit/policy.rs"]
mod tests;
