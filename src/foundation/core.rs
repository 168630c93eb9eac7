use serde::{Deserialize, Serialize};

/// Floating-point `{x, y, z}` triple used for position, rotation and scale.
///
/// Rotation values are author-facing and carry no unit tag; see
/// [`crate::transform::normalize_rotation`] for how the unit is inferred.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X axis.
    pub x: f64,
    /// Y axis (vertical; the marker plane is `y = 0`).
    pub y: f64,
    /// Z axis.
    pub z: f64,
}

impl Vec3 {
    /// All-zero vector.
    pub const ZERO: Self = Self::splat(0.0);
    /// All-one vector.
    pub const ONE: Self = Self::splat(1.0);

    /// Create a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with the same value on every axis.
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Apply `f` to every component.
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Multiply every component by `s`.
    pub fn scaled(self, s: f64) -> Self {
        self.map(|v| v * s)
    }

    /// Return `true` when every component's magnitude is strictly below `eps`.
    pub fn all_below(self, eps: f64) -> bool {
        self.x.abs() < eps && self.y.abs() < eps && self.z.abs() < eps
    }

    /// Components as an array in `x, y, z` order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}
