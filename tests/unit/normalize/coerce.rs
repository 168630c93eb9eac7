use super::*;
use serde_json::json;

#[test]
fn numbers_and_numeric_strings_coerce() {
    assert_eq!(coerce_f64(Some(&json!(2.5)), 0.0), 2.5);
    assert_eq!(coerce_f64(Some(&json!(-3)), 0.0), -3.0);
    assert_eq!(coerce_f64(Some(&json!(" 1.25 ")), 0.0), 1.25);
}

#[test]
fn garbage_falls_back_to_default() {
    for v in [
        json!("abc"),
        json!(""),
        json!(null),
        json!(true),
        json!({ "x": 1 }),
        json!([1, 2]),
        json!("NaN"),
        json!("inf"),
        json!("-Infinity"),
    ] {
        assert_eq!(coerce_f64(Some(&v), 7.0), 7.0, "input {v}");
    }
    assert_eq!(coerce_f64(None, 7.0), 7.0);
}

#[test]
fn vec3_defaults_missing_components() {
    let v = coerce_vec3(Some(&json!({ "x": 1, "z": "2" })), 0.0);
    assert_eq!(v, Vec3::new(1.0, 0.0, 2.0));

    let s = coerce_vec3(Some(&json!({ "y": "tall" })), 1.0);
    assert_eq!(s, Vec3::ONE);
}

#[test]
fn vec3_accepts_arrays_and_rejects_scalars() {
    assert_eq!(
        coerce_vec3(Some(&json!([1, 2, 3])), 0.0),
        Vec3::new(1.0, 2.0, 3.0)
    );
    assert_eq!(
        coerce_vec3(Some(&json!([4])), 1.0),
        Vec3::new(4.0, 1.0, 1.0)
    );
    assert_eq!(coerce_vec3(Some(&json!(5)), 1.0), Vec3::ONE);
    assert_eq!(coerce_vec3(None, 0.0), Vec3::ZERO);
}

#[test]
fn strings_trim_and_reject_blank() {
    assert_eq!(coerce_string(Some(&json!(" a "))), Some("a".to_string()));
    assert_eq!(coerce_string(Some(&json!(12))), Some("12".to_string()));
    assert_eq!(coerce_string(Some(&json!("  "))), None);
    assert_eq!(coerce_string(Some(&json!([]))), None);
}
