//! Monotone cubic interpolation in x (Steffen's method)
//!
//! Produces a smooth polyline through every input point that never
//! overshoots between neighbours, so a rising series stays rising.

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at the middle of three points
fn interior_tangent(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2]) -> f64 {
    let h0 = p1[0] - p0[0];
    let h1 = p2[0] - p1[0];
    let s0 = if h0 != 0.0 { (p1[1] - p0[1]) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2[1] - p1[1]) / h1 } else { 0.0 };
    let p = if h0 + h1 != 0.0 { (s0 * h1 + s1 * h0) / (h0 + h1) } else { 0.0 };
    (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs())
}

/// One-sided tangent at an end point, from the neighbouring tangent `t`
fn end_tangent(a: [f64; 2], b: [f64; 2], t: f64) -> f64 {
    let h = b[0] - a[0];
    if h == 0.0 {
        return t;
    }
    (3.0 * (b[1] - a[1]) / h - t) / 2.0
}

/// Sample the curve through `points` (sorted by x)
///
/// Each segment contributes `samples` points; the input points are always
/// part of the output.
pub fn monotone_x(points: &[[f64; 2]], samples: usize) -> Vec<[f64; 2]> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    let steps = samples.max(1);
    let mut out = Vec::with_capacity((n - 1) * steps + 1);
    out.push(points[0]);
    for i in 0..n - 1 {
        let [x0, y0] = points[i];
        let [x1, y1] = points[i + 1];
        let h = x1 - x0;
        let (m0, m1) = (tangents[i] * h, tangents[i + 1] * h);
        for k in 1..=steps {
            if k == steps {
                out.push(points[i + 1]);
                continue;
            }
            let t = k as f64 / steps as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;
            out.push([x0 + t * h, h00 * y0 + h10 * m0 + h01 * y1 + h11 * m1]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_through_inputs() {
        let points = [[0.0, 1.0], [1.0, 3.0], [2.0, 2.0], [4.0, 5.0]];
        let curve = monotone_x(&points, 8);
        assert_eq!(curve.len(), 3 * 8 + 1);
        for p in &points {
            assert!(curve.contains(p));
        }
        assert!(curve.windows(2).all(|w| w[0][0] < w[1][0]));
    }

    #[test]
    fn test_no_overshoot_on_monotone_data() {
        let points = [[0.0, 0.0], [1.0, 0.1], [2.0, 5.0], [3.0, 5.1], [4.0, 9.0]];
        let curve = monotone_x(&points, 16);
        assert!(curve.windows(2).all(|w| w[1][1] >= w[0][1] - 1e-12));
    }

    #[test]
    fn test_flat_segment_stays_flat() {
        let points = [[0.0, 2.0], [1.0, 2.0], [2.0, 2.0]];
        let curve = monotone_x(&points, 8);
        assert!(curve.iter().all(|p| (p[1] - 2.0).abs() < 1e-12));
    }

    #[test]
    fn test_short_inputs_are_straight() {
        let two = [[2015.0, 5.0], [2016.0, 7.0]];
        assert_eq!(monotone_x(&two, 8), two.to_vec());
        assert!(monotone_x(&[], 8).is_empty());
    }
}
