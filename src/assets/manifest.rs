use crate::scene::model::{ContentKind, SceneObject};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write as _;

/// How an asset is embedded in the document's asset block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// `<img>`.
    Image,
    /// `<video>`.
    Video,
    /// `<a-asset-item>` (glTF/GLB).
    Model,
    /// `<audio>`.
    Audio,
    /// `<a-asset-item>` for content kinds without a dedicated element.
    Other,
}

impl AssetKind {
    /// Embedding kind for a content kind.
    pub fn for_content(kind: &ContentKind) -> Self {
        match kind {
            ContentKind::Image => Self::Image,
            ContentKind::Video => Self::Video,
            ContentKind::Model => Self::Model,
            ContentKind::Audio => Self::Audio,
            ContentKind::Light | ContentKind::Primitive | ContentKind::Unknown(_) => Self::Other,
        }
    }
}

/// One embeddable asset reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssetRef {
    /// Document-wide unique element id.
    pub id: String,
    /// Embedding kind.
    pub kind: AssetKind,
    /// Asset location.
    pub url: String,
}

/// Asset element id for an object.
///
/// Multi-target documents share one flat id namespace, so the anchor index is part of the id.
/// The object id is escaped to `[A-Za-z0-9_-]`, so the result is also a valid `#id` selector.
pub fn asset_id(object_id: &str, anchor: Option<usize>) -> String {
    let object_id = id_fragment(object_id);
    match anchor {
        Some(i) => format!("target-{i}-asset-{object_id}"),
        None => format!("asset-{object_id}"),
    }
}

/// Escape an authored id down to `[A-Za-z0-9_-]`.
///
/// `-` becomes `--` and every other byte outside the set becomes `-` plus two hex digits, so
/// distinct ids stay distinct.
pub(crate) fn id_fragment(id: &str) -> Cow<'_, str> {
    if id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Cow::Borrowed(id);
    }
    let mut out = String::with_capacity(id.len() + 8);
    for b in id.bytes() {
        match b {
            b'-' => out.push_str("--"),
            b if b.is_ascii_alphanumeric() || b == b'_' => out.push(char::from(b)),
            b => {
                let _ = write!(out, "-{b:02x}");
            }
        }
    }
    Cow::Owned(out)
}

/// Build the asset references for one anchor's objects, in input order.
///
/// Objects without a usable URL (lights, primitives, unfinished uploads) get no entry.
pub fn build_manifest(objects: &[SceneObject], anchor: Option<usize>) -> Vec<AssetRef> {
    objects
        .iter()
        .filter_map(|o| {
            let url = o.content.asset_url()?;
            Some(AssetRef {
                id: asset_id(&o.id, anchor),
                kind: AssetKind::for_content(o.kind()),
                url: url.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/manifest.rs"]
mod tests;
