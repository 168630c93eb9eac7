use super::*;
use crate::normalize::ids::SequentialIdSource;
use serde_json::json;

fn experience() -> Experience {
    Experience {
        id: "exp-42".to_string(),
        title: "Demo".to_string(),
        mind_file: Some("targets.mind".to_string()),
        marker_image: Some("marker.png".to_string()),
        content_config: json!({
            "sceneObjects": [
                { "id": "a", "content": { "type": "image", "url": "a.png" } },
                { "id": "b", "content": { "type": "audio", "url": "b.mp3" } }
            ]
        }),
        targets_config: None,
        is_multiple_targets: false,
    }
}

fn compile(exp: &Experience) -> ScenemarkResult<CompiledDocument> {
    compile_experience(
        exp,
        &CompilerPolicy::default(),
        &DocumentOptions::default(),
        &mut SequentialIdSource::new(),
    )
}

#[test]
fn compile_reports_counts_and_fingerprint() {
    let doc = compile(&experience()).unwrap();
    assert_eq!(doc.anchors, 1);
    assert_eq!(doc.objects, 2);
    assert_eq!(doc.manifest.len(), 2);
    assert_eq!(doc.fingerprint, fingerprint_document(&doc.html));
    assert!(doc.html.starts_with("<!DOCTYPE html>\n"));
}

#[test]
fn compile_twice_is_byte_identical() {
    let exp = experience();
    let a = compile(&exp).unwrap();
    let b = compile(&exp).unwrap();
    assert_eq!(a.html, b.html);
    assert_eq!(a.fingerprint, b.fingerprint);
}

#[test]
fn precondition_errors_propagate() {
    let mut exp = experience();
    exp.mind_file = None;
    assert!(matches!(
        compile(&exp),
        Err(ScenemarkError::MissingTrackingFile)
    ));
}

#[test]
fn document_path_uses_id_and_rejects_traversal() {
    let dir = Path::new("out");
    assert_eq!(
        document_path(dir, "exp-42").unwrap(),
        dir.join("exp-42.html")
    );
    for bad in ["", "  ", "..", "a/b", "..\\x", "nul\0"] {
        assert!(
            matches!(
                document_path(dir, bad),
                Err(ScenemarkError::InvalidExperienceId(_))
            ),
            "{bad:?}"
        );
    }
}

#[test]
fn write_document_overwrites_in_place() {
    let dir = PathBuf::from("target").join("pipeline_unit");
    let _ = std::fs::remove_dir_all(&dir);

    let p1 = write_document(&dir, "exp-42", "first").unwrap();
    let p2 = write_document(&dir, "exp-42", "second").unwrap();
    assert_eq!(p1, p2);
    assert_eq!(std::fs::read_to_string(&p2).unwrap(), "second");
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
}
