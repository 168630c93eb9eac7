use super::*;
use serde_json::json;

#[test]
fn content_kind_parses_case_insensitively_and_keeps_unknown_names() {
    assert_eq!(ContentKind::parse("Image"), ContentKind::Image);
    assert_eq!(ContentKind::parse(" video "), ContentKind::Video);
    assert_eq!(
        ContentKind::parse("hologram"),
        ContentKind::Unknown("hologram".to_string())
    );
    assert_eq!(ContentKind::parse("hologram").as_str(), "hologram");
}

#[test]
fn content_round_trips_extra_fields() {
    let v = json!({
        "type": "video",
        "url": "https://cdn.example/clip.mp4",
        "name": "Intro clip",
        "loop": true
    });
    let c: SceneObjectContent = serde_json::from_value(v.clone()).unwrap();
    assert_eq!(c.kind, ContentKind::Video);
    assert_eq!(c.asset_url(), Some("https://cdn.example/clip.mp4"));
    assert_eq!(c.extra.get("name"), Some(&json!("Intro clip")));
    assert_eq!(serde_json::to_value(&c).unwrap(), v);
}

#[test]
fn primitive_fields_use_camel_case() {
    let mut c = SceneObjectContent::new(ContentKind::Primitive);
    c.primitive_type = Some(PrimitiveShape::Torus);
    c.color = Some("#ff0000".to_string());
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["primitiveType"], json!("torus"));
    assert_eq!(v["type"], json!("primitive"));
}

#[test]
fn blank_urls_are_not_asset_urls() {
    let c = SceneObjectContent::with_url(ContentKind::Image, "   ");
    assert_eq!(c.asset_url(), None);
    assert_eq!(SceneObjectContent::new(ContentKind::Light).asset_url(), None);
}

#[test]
fn scene_config_serializes_scene_objects_key() {
    let cfg = SceneConfig {
        scene_objects: vec![SceneObject::new(
            "a",
            SceneObjectContent::with_url(ContentKind::Model, "m.glb"),
        )],
        ..SceneConfig::default()
    };
    let v = serde_json::to_value(&cfg).unwrap();
    assert_eq!(v["sceneObjects"][0]["id"], json!("a"));
    assert_eq!(v["scale"], json!({ "x": 1.0, "y": 1.0, "z": 1.0 }));
    let back: SceneConfig = serde_json::from_value(v).unwrap();
    assert_eq!(back, cfg);
}
