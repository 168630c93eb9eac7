use crate::assets::manifest::{AssetKind, AssetRef, asset_id, build_manifest, id_fragment};
use crate::document::node::{Document, Element, Node};
use crate::foundation::error::{ScenemarkError, ScenemarkResult, Warning};
use crate::normalize::ids::IdSource;
use crate::normalize::pass::{normalize_scene_config, normalize_targets};
use crate::policy::CompilerPolicy;
use crate::scene::experience::Experience;
use crate::scene::model::{ContentKind, MarkerDimensions, PrimitiveShape, SceneObject, Target};
use crate::transform::resolve::resolve_placement;
use serde_json::Value;

const LIFECYCLE_JS: &str = include_str!("runtime/lifecycle.js");
const OVERLAY_CSS: &str = include_str!("runtime/overlay.css");

const DEFAULT_TITLE: &str = "AR Experience";

/// Runtime script locations and overlay copy baked into compiled documents.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentOptions {
    /// A-Frame build.
    pub aframe_src: String,
    /// MindAR image-tracking build for A-Frame.
    pub mindar_src: String,
    /// Text shown on the loading overlay.
    pub loading_text: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            aframe_src: "https://aframe.io/releases/1.5.0/aframe.min.js".to_string(),
            mindar_src:
                "https://cdn.jsdelivr.net/npm/mind-ar@1.2.5/dist/mindar-image-aframe.prod.js"
                    .to_string(),
            loading_text: "Point your camera at the marker".to_string(),
        }
    }
}

/// Result of assembly: the markup tree and what went into it.
#[derive(Clone, Debug, PartialEq)]
pub struct AssembledDocument {
    /// Markup tree.
    pub document: Document,
    /// Embedded assets, in document order.
    pub manifest: Vec<AssetRef>,
    /// Number of tracking anchors.
    pub anchors: usize,
    /// Scene objects across all anchors.
    pub objects: usize,
    /// Non-fatal problems found while normalizing.
    pub warnings: Vec<Warning>,
}

impl AssembledDocument {
    /// Serialize the markup tree.
    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}

/// One tracking anchor's worth of content.
struct Anchor<'a> {
    index: usize,
    name: Option<&'a str>,
    marker_dimensions: Option<MarkerDimensions>,
    objects: &'a [SceneObject],
    /// Set in multi-target documents, where element ids carry the anchor index.
    namespaced: bool,
}

impl Anchor<'_> {
    fn asset_scope(&self) -> Option<usize> {
        self.namespaced.then_some(self.index)
    }
}

/// Assemble a document in the mode selected by `experience.is_multiple_targets`.
pub fn assemble(
    experience: &Experience,
    policy: &CompilerPolicy,
    options: &DocumentOptions,
    ids: &mut dyn IdSource,
) -> ScenemarkResult<AssembledDocument> {
    if experience.is_multiple_targets {
        assemble_multi(experience, policy, options, ids)
    } else {
        assemble_single(experience, policy, options, ids)
    }
}

/// Assemble a single-target document: one anchor (index 0) holding every scene object.
#[tracing::instrument(skip_all, fields(experience = %experience.id))]
pub fn assemble_single(
    experience: &Experience,
    policy: &CompilerPolicy,
    options: &DocumentOptions,
    ids: &mut dyn IdSource,
) -> ScenemarkResult<AssembledDocument> {
    let mind = experience
        .tracking_file()
        .ok_or(ScenemarkError::MissingTrackingFile)?;
    let marker = experience.marker().ok_or(ScenemarkError::MissingMarker)?;

    let scene = normalize_scene_config(&experience.content_config, ids);
    if scene.scene_objects.is_empty() {
        return Err(ScenemarkError::EmptyScene);
    }

    let anchors = [Anchor {
        index: 0,
        name: None,
        marker_dimensions: None,
        objects: &scene.scene_objects,
        namespaced: false,
    }];
    let out = build_document(experience, mind, &[marker], &anchors, policy, options);
    tracing::debug!(
        objects = out.objects,
        assets = out.manifest.len(),
        "assembled single-target document"
    );
    Ok(out)
}

/// Assemble a multi-target document: one anchor per target, indexed by target position.
#[tracing::instrument(skip_all, fields(experience = %experience.id))]
pub fn assemble_multi(
    experience: &Experience,
    policy: &CompilerPolicy,
    options: &DocumentOptions,
    ids: &mut dyn IdSource,
) -> ScenemarkResult<AssembledDocument> {
    let mind = experience
        .tracking_file()
        .ok_or(ScenemarkError::MissingTrackingFile)?;
    let marker = experience.marker().ok_or(ScenemarkError::MissingMarker)?;

    let raw_targets = experience.targets_config.as_ref().unwrap_or(&Value::Null);
    let targets = normalize_targets(raw_targets, ids);
    let total: usize = targets.value.iter().map(|t| t.scene_objects.len()).sum();
    if targets.value.is_empty() || total == 0 {
        return Err(ScenemarkError::EmptyScene);
    }

    let anchors: Vec<Anchor<'_>> = targets
        .value
        .iter()
        .enumerate()
        .map(|(index, t)| Anchor {
            index,
            name: Some(t.name.as_str()),
            marker_dimensions: t.marker_dimensions,
            objects: &t.scene_objects,
            namespaced: true,
        })
        .collect();
    let hints = marker_hints(marker, &targets.value);

    let mut out = build_document(experience, mind, &hints, &anchors, policy, options);
    out.warnings = targets.warnings;
    tracing::debug!(
        anchors = out.anchors,
        objects = out.objects,
        assets = out.manifest.len(),
        "assembled multi-target document"
    );
    Ok(out)
}

/// Marker previews for the overlay: each target's own image, or the experience marker when no
/// target has one.
fn marker_hints<'a>(fallback: &'a str, targets: &'a [Target]) -> Vec<&'a str> {
    let own: Vec<&str> = targets
        .iter()
        .filter_map(|t| t.marker_image.as_deref())
        .collect();
    if own.is_empty() { vec![fallback] } else { own }
}

fn build_document(
    experience: &Experience,
    mind: &str,
    marker_hints: &[&str],
    anchors: &[Anchor<'_>],
    policy: &CompilerPolicy,
    options: &DocumentOptions,
) -> AssembledDocument {
    let manifest: Vec<AssetRef> = anchors
        .iter()
        .flat_map(|a| build_manifest(a.objects, a.asset_scope()))
        .collect();

    let scene = Element::new("a-scene")
        .attr(
            "mindar-image",
            format!(
                "imageTargetSrc: {mind}; maxTrack: {}; uiLoading: no; uiScanning: yes; uiError: yes",
                anchors.len()
            ),
        )
        .attr("color-space", "sRGB")
        .attr("renderer", "colorManagement: true; physicallyCorrectLights: true")
        .attr("vr-mode-ui", "enabled: false")
        .attr("device-orientation-permission-ui", "enabled: false")
        .flag("embedded")
        .child(Element::new("a-assets").children(manifest.iter().map(asset_element)))
        .child(
            Element::new("a-camera")
                .attr("position", "0 0 0")
                .attr("look-controls", "enabled: false"),
        )
        .children(anchors.iter().map(|a| anchor_element(a, policy)));

    let title = match experience.title.trim() {
        "" => DEFAULT_TITLE,
        t => t,
    };
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(title))
        .child(Element::new("script").attr("src", options.aframe_src.as_str()))
        .child(Element::new("script").attr("src", options.mindar_src.as_str()))
        .child(Element::new("style").raw(OVERLAY_CSS));

    let mut body = Element::new("body")
        .child(loading_overlay(marker_hints, options))
        .child(scene);
    if let Some(controls) = media_controls(&manifest) {
        body = body.child(controls);
    }
    body = body.child(Element::new("script").raw(LIFECYCLE_JS));

    let html = Element::new("html").attr("lang", "en").child(head).child(body);

    AssembledDocument {
        document: Document {
            nodes: vec![Node::Doctype, html.into()],
        },
        objects: anchors.iter().map(|a| a.objects.len()).sum(),
        anchors: anchors.len(),
        manifest,
        warnings: Vec::new(),
    }
}

fn loading_overlay(marker_hints: &[&str], options: &DocumentOptions) -> Element {
    Element::new("div")
        .attr("id", "loading-overlay")
        .child(Element::new("div").attr("class", "spinner"))
        .children(marker_hints.iter().map(|src| {
            Element::new("img")
                .attr("class", "marker-hint")
                .attr("src", *src)
                .attr("alt", "Marker to scan")
        }))
        .child(Element::new("p").text(options.loading_text.as_str()))
}

fn media_controls(manifest: &[AssetRef]) -> Option<Element> {
    let buttons: Vec<Element> = [
        (AssetKind::Video, "video", "Mute video"),
        (AssetKind::Audio, "audio", "Mute audio"),
    ]
    .into_iter()
    .filter(|(kind, _, _)| manifest.iter().any(|a| a.kind == *kind))
    .map(|(_, name, label)| {
        Element::new("button")
            .attr("type", "button")
            .attr("data-mute-toggle", name)
            .attr("aria-pressed", "false")
            .text(label)
    })
    .collect();
    if buttons.is_empty() {
        return None;
    }
    Some(Element::new("div").attr("id", "media-controls").children(buttons))
}

fn asset_element(asset: &AssetRef) -> Element {
    let el = match asset.kind {
        AssetKind::Image => Element::new("img"),
        AssetKind::Video => Element::new("video")
            .attr("preload", "auto")
            .flag("loop")
            .flag("playsinline")
            .flag("webkit-playsinline"),
        AssetKind::Audio => Element::new("audio").attr("preload", "auto").flag("loop"),
        AssetKind::Model | AssetKind::Other => Element::new("a-asset-item"),
    };
    let el = el.attr("id", asset.id.as_str()).attr("src", asset.url.as_str());
    match asset.kind {
        AssetKind::Model | AssetKind::Other => el,
        _ => el.attr("crossorigin", "anonymous"),
    }
}

fn anchor_element(anchor: &Anchor<'_>, policy: &CompilerPolicy) -> Element {
    let mut el = Element::new("a-entity")
        .attr("mindar-image-target", format!("targetIndex: {}", anchor.index));
    if let Some(name) = anchor.name {
        el = el.attr("data-target-name", name);
    }
    if let Some(d) = anchor.marker_dimensions {
        el = el
            .attr("data-marker-width", d.width.to_string())
            .attr("data-marker-height", d.height.to_string());
    }
    el.children(
        anchor
            .objects
            .iter()
            .filter_map(|o| object_element(o, anchor.asset_scope(), policy)),
    )
}

/// Element for one scene object, or `None` when it has nothing to show.
pub(crate) fn object_element(
    obj: &SceneObject,
    scope: Option<usize>,
    policy: &CompilerPolicy,
) -> Option<Element> {
    let c = &obj.content;
    let src = || {
        let asset = c.asset_url().map(|_| asset_id(&obj.id, scope));
        if asset.is_none() {
            tracing::debug!(object = %obj.id, kind = c.kind.as_str(), "skipping object without url");
        }
        asset
    };

    let el = match &c.kind {
        ContentKind::Image => Element::new("a-image")
            .attr("src", format!("#{}", src()?))
            .attr("side", "double"),
        ContentKind::Video => Element::new("a-video")
            .attr("src", format!("#{}", src()?))
            .attr("side", "double"),
        ContentKind::Model => Element::new("a-gltf-model").attr("src", format!("#{}", src()?)),
        ContentKind::Audio => Element::new("a-entity")
            .attr("visible", "false")
            .attr("data-audio-src", src()?),
        ContentKind::Light => Element::new("a-light")
            .attr("type", "directional")
            .attr("intensity", c.intensity.unwrap_or(1.0).to_string())
            .attr("color", c.color.as_deref().unwrap_or("#ffffff")),
        ContentKind::Primitive => {
            Element::new(primitive_tag(c.primitive_type.unwrap_or_default()))
                .attr("color", c.color.as_deref().unwrap_or("#4CC3D9"))
        }
        ContentKind::Unknown(_) => Element::new("a-entity").attr("data-asset-src", src()?),
    };

    let placement = resolve_placement(obj, policy);
    let fragment = id_fragment(&obj.id);
    let id = match scope {
        Some(i) => format!("target-{i}-object-{fragment}"),
        None => format!("object-{fragment}"),
    };
    let mut el = el
        .attr("position", placement.position)
        .attr("rotation", placement.rotation)
        .attr("scale", placement.scale);
    el.attrs.insert(0, ("id".to_string(), id));
    Some(el)
}

fn primitive_tag(shape: PrimitiveShape) -> &'static str {
    match shape {
        PrimitiveShape::Box => "a-box",
        PrimitiveShape::Sphere => "a-sphere",
        PrimitiveShape::Cylinder => "a-cylinder",
        PrimitiveShape::Cone => "a-cone",
        PrimitiveShape::Plane => "a-plane",
        PrimitiveShape::Torus => "a-torus",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/assemble.rs"]
mod tests;
