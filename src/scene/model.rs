use crate::foundation::core::Vec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Content kind tag (`type` in the stored JSON).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKind {
    /// Flat picture.
    Image,
    /// Flat video surface.
    Video,
    /// glTF/GLB model.
    Model,
    /// Directional light.
    Light,
    /// Positional-less audio clip.
    Audio,
    /// Built-in geometric primitive.
    Primitive,
    /// Type name this version does not know; kept verbatim so it round-trips.
    Unknown(String),
}

impl ContentKind {
    /// Parse a stored type name. Matching is case-insensitive; anything unrecognized is kept.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Self::Image,
            "video" => Self::Video,
            "model" => Self::Model,
            "light" => Self::Light,
            "audio" => Self::Audio,
            "primitive" => Self::Primitive,
            _ => Self::Unknown(s.to_string()),
        }
    }

    /// Stored type name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Model => "model",
            Self::Light => "light",
            Self::Audio => "audio",
            Self::Primitive => "primitive",
            Self::Unknown(s) => s,
        }
    }
}

impl Serialize for ContentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Built-in primitive shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveShape {
    /// Unit cube.
    #[default]
    Box,
    /// Sphere.
    Sphere,
    /// Cylinder.
    Cylinder,
    /// Cone.
    Cone,
    /// Flat plane.
    Plane,
    /// Torus.
    Torus,
}

impl PrimitiveShape {
    /// Parse a shape name, falling back to [`PrimitiveShape::Box`].
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" => Self::Sphere,
            "cylinder" => Self::Cylinder,
            "cone" => Self::Cone,
            "plane" => Self::Plane,
            "torus" => Self::Torus,
            _ => Self::Box,
        }
    }
}

/// What a scene object shows (or plays).
///
/// Stored as a flat JSON object tagged by `type`. Fields that do not apply to the kind stay
/// `None`; any other serializable authored field is kept in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObjectContent {
    /// Content kind.
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Asset location for image/video/model/audio content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// CSS color for lights and primitives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Light intensity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    /// Primitive shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primitive_type: Option<PrimitiveShape>,
    /// Other authored fields (display name, loop flags, ...), round-tripped untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SceneObjectContent {
    /// Content of `kind` with nothing else set.
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            url: None,
            color: None,
            intensity: None,
            primitive_type: None,
            extra: BTreeMap::new(),
        }
    }

    /// Content of `kind` pointing at `url`.
    pub fn with_url(kind: ContentKind, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(kind)
        }
    }

    /// The asset URL when present and non-blank.
    pub fn asset_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// One placed piece of content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Unique within the owning scene.
    pub id: String,
    /// Authored position.
    pub position: Vec3,
    /// Authored rotation (unit inferred per component).
    pub rotation: Vec3,
    /// Authored scale.
    pub scale: Vec3,
    /// What the object shows.
    pub content: SceneObjectContent,
}

impl SceneObject {
    /// Object at the origin with identity rotation and unit scale.
    pub fn new(id: impl Into<String>, content: SceneObjectContent) -> Self {
        Self {
            id: id.into(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            content,
        }
    }

    /// Content kind shortcut.
    pub fn kind(&self) -> &ContentKind {
        &self.content.kind
    }
}

/// Content of one tracking anchor in single-target experiences.
///
/// The outer transform is stored by the editor but not applied when compiling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    /// Anchor-level position (round-trips only).
    pub position: Vec3,
    /// Anchor-level rotation (round-trips only).
    pub rotation: Vec3,
    /// Anchor-level scale (round-trips only).
    pub scale: Vec3,
    /// Placed objects, in authoring order.
    pub scene_objects: Vec<SceneObject>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            scene_objects: Vec::new(),
        }
    }
}

/// Physical marker size, used by the runtime to keep content proportional to the print.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerDimensions {
    /// Marker width.
    pub width: f64,
    /// Marker height.
    pub height: f64,
}

/// One independent tracking anchor in a multi-target experience.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Stable target id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Marker image reference for this target, if uploaded.
    #[serde(default)]
    pub marker_image: Option<String>,
    /// Marker size, if known.
    #[serde(default)]
    pub marker_dimensions: Option<MarkerDimensions>,
    /// Placed objects, in authoring order.
    pub scene_objects: Vec<SceneObject>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
