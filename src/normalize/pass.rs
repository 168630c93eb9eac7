use crate::foundation::error::Warning;
use crate::normalize::coerce::{coerce_f64, coerce_string, coerce_vec3};
use crate::normalize::ids::IdSource;
use crate::scene::model::{
    ContentKind, MarkerDimensions, PrimitiveShape, SceneConfig, SceneObject, SceneObjectContent,
    Target,
};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

const DEFAULT_LIGHT_COLOR: &str = "#ffffff";
const DEFAULT_LIGHT_INTENSITY: f64 = 1.0;
const DEFAULT_PRIMITIVE_COLOR: &str = "#4CC3D9";

/// Keys that hold editor-session handles (scene-graph objects, DOM nodes, file blobs). They
/// never survive storage, so they are dropped before anything is persisted or compiled.
const TRANSIENT_KEYS: &[&str] = &[
    "file",
    "fileObject",
    "blob",
    "object3D",
    "mesh",
    "element",
    "el",
    "texture",
    "domElement",
    "ref",
];

/// Keys owned by the scene object itself when content is authored inline.
const OBJECT_KEYS: &[&str] = &["id", "position", "rotation", "scale", "content"];

/// A normalized value plus the warnings raised while producing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized<T> {
    /// The normalized value.
    pub value: T,
    /// Non-fatal problems, in input order.
    pub warnings: Vec<Warning>,
}

/// Normalize a stored single-target scene.
///
/// Accepts the stored object or a JSON-encoded string of it. Never fails: unusable input becomes
/// an empty scene with default transforms.
pub fn normalize_scene_config(raw: &Value, ids: &mut dyn IdSource) -> SceneConfig {
    let raw = decode_embedded_json(raw);
    let Some(obj) = raw.as_object() else {
        return SceneConfig::default();
    };
    SceneConfig {
        position: coerce_vec3(obj.get("position"), 0.0),
        rotation: coerce_vec3(obj.get("rotation"), 0.0),
        scale: coerce_vec3(obj.get("scale"), 1.0),
        scene_objects: normalize_scene_objects(obj.get("sceneObjects"), ids),
    }
}

/// Normalize the stored target list of a multi-target experience.
///
/// Accepts an array or a JSON-encoded array string; anything else is an empty list. Non-object
/// entries are skipped, so indices are assigned over the surviving targets.
pub fn normalize_targets(raw: &Value, ids: &mut dyn IdSource) -> Normalized<Vec<Target>> {
    let raw = decode_embedded_json(raw);
    let mut warnings = Vec::new();
    let entries = raw.as_array().map(Vec::as_slice).unwrap_or_default();
    let value = entries
        .iter()
        .filter(|t| t.is_object())
        .enumerate()
        .map(|(index, t)| normalize_target_into(t, index, ids, &mut warnings))
        .collect();
    Normalized { value, warnings }
}

/// Normalize one stored target at position `index`.
pub fn normalize_target(raw: &Value, index: usize, ids: &mut dyn IdSource) -> Normalized<Target> {
    let mut warnings = Vec::new();
    let value = normalize_target_into(raw, index, ids, &mut warnings);
    Normalized { value, warnings }
}

fn normalize_target_into(
    raw: &Value,
    index: usize,
    ids: &mut dyn IdSource,
    warnings: &mut Vec<Warning>,
) -> Target {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    let id = coerce_string(obj.get("id")).unwrap_or_else(|| ids.next_id("target"));
    let name = coerce_string(obj.get("name")).unwrap_or_else(|| format!("Target {}", index + 1));
    let marker_image = coerce_string(obj.get("markerImage"));
    let marker_dimensions = match parse_marker_dimensions(obj.get("markerDimensions")) {
        Ok(d) => d,
        Err(message) => {
            tracing::warn!(target_index = index, %message, "ignoring malformed markerDimensions");
            warnings.push(Warning::MarkerDimensionParse {
                target_index: index,
                message,
            });
            None
        }
    };

    Target {
        id,
        name,
        marker_image,
        marker_dimensions,
        scene_objects: normalize_scene_objects(obj.get("sceneObjects"), ids),
    }
}

fn parse_marker_dimensions(v: Option<&Value>) -> Result<Option<MarkerDimensions>, String> {
    let parsed;
    let v = match v {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => {
            parsed = serde_json::from_str::<Value>(s).map_err(|e| e.to_string())?;
            &parsed
        }
        Some(v) => v,
    };
    let Some(obj) = v.as_object() else {
        return Err(format!("expected an object, got {v}"));
    };
    Ok(Some(MarkerDimensions {
        width: coerce_f64(obj.get("width"), 1.0),
        height: coerce_f64(obj.get("height"), 1.0),
    }))
}

fn normalize_scene_objects(raw: Option<&Value>, ids: &mut dyn IdSource) -> Vec<SceneObject> {
    let Some(Value::Array(entries)) = raw else {
        return Vec::new();
    };
    let mut seen = HashSet::with_capacity(entries.len());
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(obj) = entry.as_object() else {
            continue;
        };
        let mut so = normalize_scene_object(obj, ids);
        if !seen.insert(so.id.clone()) {
            let fresh = ids.next_id("obj");
            tracing::debug!(duplicate = %so.id, %fresh, "reassigning duplicate scene object id");
            so.id = fresh;
            seen.insert(so.id.clone());
        }
        out.push(so);
    }
    out
}

fn normalize_scene_object(obj: &Map<String, Value>, ids: &mut dyn IdSource) -> SceneObject {
    let id = coerce_string(obj.get("id")).unwrap_or_else(|| ids.next_id("obj"));
    let content = match obj.get("content") {
        Some(Value::Object(c)) => normalize_content(c, &[]),
        // Older editor builds stored the content fields on the object itself.
        _ => normalize_content(obj, OBJECT_KEYS),
    };
    SceneObject {
        position: coerce_vec3(obj.get("position"), 0.0),
        rotation: coerce_vec3(obj.get("rotation"), 0.0),
        scale: coerce_vec3(obj.get("scale"), 1.0),
        id,
        content,
    }
}

fn normalize_content(c: &Map<String, Value>, skip: &[&str]) -> SceneObjectContent {
    let kind = coerce_string(c.get("type"))
        .map(|t| ContentKind::parse(&t))
        .unwrap_or(ContentKind::Image);

    let url = coerce_string(c.get("url")).filter(|u| {
        let keep = !is_blob_url(u);
        if !keep {
            tracing::warn!(url = %u, "dropping session-local blob url");
        }
        keep
    });

    let mut content = SceneObjectContent::new(kind);
    content.url = url;
    content.color = coerce_string(c.get("color"));
    match content.kind {
        ContentKind::Light => {
            if content.color.is_none() {
                content.color = Some(DEFAULT_LIGHT_COLOR.to_string());
            }
            content.intensity = Some(coerce_f64(c.get("intensity"), DEFAULT_LIGHT_INTENSITY));
        }
        ContentKind::Primitive => {
            if content.color.is_none() {
                content.color = Some(DEFAULT_PRIMITIVE_COLOR.to_string());
            }
            content.primitive_type = Some(
                coerce_string(c.get("primitiveType"))
                    .map(|s| PrimitiveShape::parse_or_default(&s))
                    .unwrap_or_default(),
            );
        }
        _ => {
            if c.contains_key("intensity") {
                content.intensity = Some(coerce_f64(c.get("intensity"), DEFAULT_LIGHT_INTENSITY));
            }
        }
    }
    content.extra = c
        .iter()
        .filter(|(k, v)| {
            !matches!(
                k.as_str(),
                "type" | "url" | "color" | "intensity" | "primitiveType"
            ) && !skip.contains(&k.as_str())
                && !TRANSIENT_KEYS.contains(&k.as_str())
                && !matches!(v, Value::String(s) if is_blob_url(s))
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect::<BTreeMap<_, _>>();
    content
}

fn is_blob_url(s: &str) -> bool {
    s.trim_start().starts_with("blob:")
}

/// Stored configs are sometimes double-encoded as a JSON string; undo that once.
fn decode_embedded_json(raw: &Value) -> std::borrow::Cow<'_, Value> {
    match raw {
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(v) => std::borrow::Cow::Owned(v),
            Err(_) => std::borrow::Cow::Owned(Value::Null),
        },
        v => std::borrow::Cow::Borrowed(v),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/pass.rs"]
mod tests;
