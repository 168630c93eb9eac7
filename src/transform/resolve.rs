use crate::foundation::core::Vec3;
use crate::foundation::math::{fmt_vec3, rotation_component_to_radians, vec3_to_degrees};
use crate::policy::CompilerPolicy;
use crate::scene::model::{ContentKind, SceneObject};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

const POSITION_DECIMALS: usize = 3;
const SCALE_DECIMALS: usize = 3;
const ROTATION_DECIMALS: usize = 1;

/// Flat, facing up: the orientation forced on images and videos.
const FLAT_FACING_UP: Vec3 = Vec3::new(-FRAC_PI_2, 0.0, 0.0);

/// Numeric transform after policy application. Rotation is in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTransform {
    /// Scaled and floored position.
    pub position: Vec3,
    /// Rotation in radians.
    pub rotation_rad: Vec3,
    /// Scale, passed through.
    pub scale: Vec3,
}

impl ResolvedTransform {
    /// Format into markup attribute strings.
    pub fn to_placement(&self) -> ResolvedPlacement {
        ResolvedPlacement {
            position: fmt_vec3(self.position, POSITION_DECIMALS),
            rotation: fmt_vec3(vec3_to_degrees(self.rotation_rad), ROTATION_DECIMALS),
            scale: fmt_vec3(self.scale, SCALE_DECIMALS),
        }
    }
}

/// Markup-ready `x y z` strings: position/scale with 3 decimals, rotation in degrees with 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedPlacement {
    /// Position attribute value.
    pub position: String,
    /// Rotation attribute value (degrees).
    pub rotation: String,
    /// Scale attribute value.
    pub scale: String,
}

/// Resolve an object's placement into attribute strings.
pub fn resolve_placement(obj: &SceneObject, policy: &CompilerPolicy) -> ResolvedPlacement {
    resolve_transform(obj, policy).to_placement()
}

/// Resolve an object's placement numerically.
///
/// Never fails. Non-finite authored values are not filtered here and show up in the output.
pub fn resolve_transform(obj: &SceneObject, policy: &CompilerPolicy) -> ResolvedTransform {
    let mut position = obj.position.scaled(policy.position_scale);
    let authored = obj.rotation;

    let rotation_rad = if policy.enforce_top_down {
        match obj.kind() {
            ContentKind::Image | ContentKind::Video => {
                floor_y(&mut position, policy.visibility_y_offset);
                FLAT_FACING_UP
            }
            ContentKind::Model => {
                floor_y(&mut position, policy.visibility_y_offset);
                if authored.all_below(policy.rotation_epsilon) {
                    Vec3::ZERO
                } else {
                    normalize_rotation(authored)
                }
            }
            ContentKind::Light => {
                floor_y(&mut position, policy.light_min_y);
                normalize_rotation(authored)
            }
            ContentKind::Audio | ContentKind::Primitive | ContentKind::Unknown(_) => {
                normalize_rotation(authored)
            }
        }
    } else {
        normalize_rotation(authored)
    };

    if position.y.abs() < policy.position_epsilon {
        position.y = policy.visibility_y_offset;
    }

    ResolvedTransform {
        position,
        rotation_rad,
        scale: obj.scale,
    }
}

/// Read an authored rotation as radians, converting degree-sized components (`|v| > π`).
pub fn normalize_rotation(rotation: Vec3) -> Vec3 {
    rotation.map(rotation_component_to_radians)
}

/// Raise `y` to `min` when at or below it. `NaN` is left alone.
fn floor_y(position: &mut Vec3, min: f64) {
    if position.y <= min {
        position.y = min;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/resolve.rs"]
mod tests;
