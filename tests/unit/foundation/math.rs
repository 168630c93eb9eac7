use super::*;

#[test]
fn fixed_formatting_drops_negative_zero() {
    assert_eq!(fmt_fixed(-0.0, 3), "0.000");
    assert_eq!(fmt_fixed(-0.0004, 3), "0.000");
    assert_eq!(fmt_fixed(-0.04, 1), "0.0");
    assert_eq!(fmt_fixed(-0.05, 3), "-0.050");
    assert_eq!(fmt_fixed(1.23456, 3), "1.235");
}

#[test]
fn fixed_formatting_passes_non_finite_through() {
    assert_eq!(fmt_fixed(f64::NAN, 3), "NaN");
    assert_eq!(fmt_fixed(f64::INFINITY, 1), "inf");
    assert_eq!(fmt_fixed(f64::NEG_INFINITY, 1), "-inf");
}

#[test]
fn vec3_formatting_is_space_separated() {
    assert_eq!(fmt_vec3(Vec3::new(1.0, -2.5, 0.0), 3), "1.000 -2.500 0.000");
    assert_eq!(fmt_vec3(Vec3::new(-90.0, 0.0, 0.0), 1), "-90.0 0.0 0.0");
}

#[test]
fn rotation_heuristic_converts_only_degree_sized_values() {
    assert_eq!(rotation_component_to_radians(1.0), 1.0);
    assert_eq!(rotation_component_to_radians(-PI), -PI);
    assert!((rotation_component_to_radians(90.0) - PI / 2.0).abs() < 1e-12);
    assert!((rotation_component_to_radians(-180.0) + PI).abs() < 1e-12);
}

#[test]
fn degrees_conversion_is_per_axis() {
    let d = vec3_to_degrees(Vec3::new(PI, -PI / 2.0, 0.0));
    assert!((d.x - 180.0).abs() < 1e-9);
    assert!((d.y + 90.0).abs() < 1e-9);
    assert_eq!(d.z, 0.0);
}
