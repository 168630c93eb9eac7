use crate::foundation::core::Vec3;
use std::f64::consts::PI;

/// Format `v` with exactly `decimals` fractional digits.
///
/// Values that round to zero print without a sign, so `-0.0004` and `-0.0` both become
/// `0.000`. Non-finite values are printed as-is (`NaN`, `inf`, `-inf`).
pub(crate) fn fmt_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let s = format!("{v:.decimals$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

/// Format a vector as the space-separated `x y z` attribute syntax.
pub(crate) fn fmt_vec3(v: Vec3, decimals: usize) -> String {
    format!(
        "{} {} {}",
        fmt_fixed(v.x, decimals),
        fmt_fixed(v.y, decimals),
        fmt_fixed(v.z, decimals)
    )
}

/// Interpret one authored rotation component as radians.
///
/// Magnitudes above π can only be meaningful as degrees, so they are converted; anything else is
/// assumed to already be radians. A legitimate radian value above π is misread as degrees; stored
/// scenes depend on this reading, so it stays threshold-based.
pub(crate) fn rotation_component_to_radians(v: f64) -> f64 {
    if v.abs() > PI { v.to_radians() } else { v }
}

pub(crate) fn vec3_to_degrees(v: Vec3) -> Vec3 {
    v.map(f64::to_degrees)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
