use super::*;
use crate::scene::model::SceneObjectContent;
use std::collections::HashSet;

fn obj(id: &str, kind: ContentKind, url: Option<&str>) -> SceneObject {
    let content = match url {
        Some(u) => SceneObjectContent::with_url(kind, u),
        None => SceneObjectContent::new(kind),
    };
    SceneObject::new(id, content)
}

#[test]
fn single_target_ids_follow_object_ids_in_order() {
    let objects = vec![
        obj("b", ContentKind::Video, Some("v.mp4")),
        obj("a", ContentKind::Image, Some("i.png")),
        obj("c", ContentKind::Model, Some("m.glb")),
        obj("d", ContentKind::Audio, Some("s.mp3")),
    ];
    let m = build_manifest(&objects, None);
    assert_eq!(
        m.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
        vec!["asset-b", "asset-a", "asset-c", "asset-d"]
    );
    assert_eq!(
        m.iter().map(|a| a.kind).collect::<Vec<_>>(),
        vec![
            AssetKind::Video,
            AssetKind::Image,
            AssetKind::Model,
            AssetKind::Audio
        ]
    );
}

#[test]
fn objects_without_url_are_excluded() {
    let objects = vec![
        obj("light", ContentKind::Light, None),
        obj("box", ContentKind::Primitive, None),
        obj("blank", ContentKind::Image, Some("  ")),
        obj("img", ContentKind::Image, Some(" pic.png ")),
    ];
    let m = build_manifest(&objects, None);
    assert_eq!(m.len(), 1);
    assert_eq!(m[0].url, "pic.png");
}

#[test]
fn ids_are_unique_across_anchors() {
    // Same object ids reused on every anchor.
    let anchors: Vec<Vec<SceneObject>> = (0..3)
        .map(|_| {
            vec![
                obj("x", ContentKind::Image, Some("a.png")),
                obj("y", ContentKind::Model, Some("b.glb")),
            ]
        })
        .collect();
    let all: Vec<AssetRef> = anchors
        .iter()
        .enumerate()
        .flat_map(|(i, objs)| build_manifest(objs, Some(i)))
        .collect();
    assert_eq!(all.len(), 6);
    let ids: HashSet<&str> = all.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids.len(), 6);
    assert_eq!(all[2].id, "target-1-asset-x");
}

#[test]
fn manifest_is_deterministic() {
    let objects = vec![
        obj("a", ContentKind::Image, Some("i.png")),
        obj("b", ContentKind::Unknown("hologram".into()), Some("h.bin")),
    ];
    assert_eq!(build_manifest(&objects, Some(0)), build_manifest(&objects, Some(0)));
    assert_eq!(build_manifest(&objects, None)[1].kind, AssetKind::Other);
}

#[test]
fn authored_ids_are_escaped_to_selector_safe_fragments() {
    assert_eq!(asset_id("obj_17_abc", None), "asset-obj_17_abc");
    assert_eq!(asset_id("poster.v2", None), "asset-poster-2ev2");
    assert_eq!(asset_id("a:b [c]", Some(1)), "target-1-asset-a-3ab-20-5bc-5d");
    assert_eq!(asset_id("x-y", None), "asset-x--y");

    // Escaping stays one-to-one: an id that spells out an escape does not collide.
    assert_ne!(asset_id("a.b", None), asset_id("a-2eb", None));
    assert_eq!(asset_id("a-2eb", None), "asset-a--2eb");

    let id = asset_id("clip é.mp4", None);
    assert!(id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-'));
}
