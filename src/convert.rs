/// Converts a normalized RGB triple to HSV.
///
/// All inputs must be in `[0.0, 1.0]`; all outputs are in `[0.0, 1.0]`.
/// Hue is a fraction of a full turn (multiply by 360 for degrees).
/// A gray input (r == g == b) has no defined hue and maps to hue 0.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    if maxc == minc {
        // Zero chroma: saturation is 0 and hue is 0 by convention.
        return (0.0, 0.0, v);
    }

    let delta = maxc - minc;
    let s = delta / maxc;

    // On ties the branch order (r, then g, then b) decides which formula
    // applies, matching the standard reference conversion bit for bit.
    let h = if r == maxc {
        (g - b) / delta
    } else if g == maxc {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    ((h / 6.0).rem_euclid(1.0), s, v)
}

/// Converts a normalized HSV triple to RGB.
///
/// All inputs must be in `[0.0, 1.0]`; all outputs are in `[0.0, 1.0]`.
/// Hue is circular, so 0.0 and 1.0 denote the same color.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    // h == 1.0 gives sector 6, which has to wrap back to sector 0.
    match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
