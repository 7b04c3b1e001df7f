//! Spline smoothing for line series.
//!
//! Control points are derived from each point's neighbours and scaled by
//! the series tension. The math runs in a normalized `[0, 1]` box so that
//! axes with very different magnitudes bend the same way in both renderers.

/// Sample a smoothed curve through `points`.
///
/// Returns the input unchanged when `tension <= 0` or fewer than three
/// points are given. Otherwise every segment is sampled `steps` times and
/// the result passes through all input points.
pub fn smooth(points: &[[f64; 2]], tension: f64, steps: usize) -> Vec<[f64; 2]> {
    if tension <= 0.0 || points.len() < 3 || steps == 0 {
        return points.to_vec();
    }

    let (min_x, max_x) = bounds(points.iter().map(|p| p[0]));
    let (min_y, max_y) = bounds(points.iter().map(|p| p[1]));
    let span_x = if max_x > min_x { max_x - min_x } else { 1.0 };
    let span_y = if max_y > min_y { max_y - min_y } else { 1.0 };

    let norm: Vec<[f64; 2]> = points
        .iter()
        .map(|p| [(p[0] - min_x) / span_x, (p[1] - min_y) / span_y])
        .collect();

    let n = norm.len();
    let mut before = Vec::with_capacity(n);
    let mut after = Vec::with_capacity(n);

    for i in 0..n {
        let prev = norm[i.saturating_sub(1)];
        let cur = norm[i];
        let next = norm[(i + 1).min(n - 1)];

        let d01 = distance(prev, cur);
        let d12 = distance(cur, next);
        let total = d01 + d12;
        let (s01, s12) = if total > 0.0 {
            (d01 / total, d12 / total)
        } else {
            (0.0, 0.0)
        };

        let dx = next[0] - prev[0];
        let dy = next[1] - prev[1];
        before.push([cur[0] - tension * s01 * dx, cur[1] - tension * s01 * dy]);
        after.push([cur[0] + tension * s12 * dx, cur[1] + tension * s12 * dy]);
    }

    let mut out = Vec::with_capacity((n - 1) * steps + 1);
    out.push(norm[0]);
    for i in 0..n - 1 {
        let p0 = norm[i];
        let c0 = after[i];
        let c1 = before[i + 1];
        let p1 = norm[i + 1];
        for s in 1..=steps {
            let t = s as f64 / steps as f64;
            out.push(bezier(p0, c0, c1, p1, t));
        }
    }

    out.into_iter()
        .map(|p| [p[0] * span_x + min_x, p[1] * span_y + min_y])
        .collect()
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt()
}

fn bezier(p0: [f64; 2], c0: [f64; 2], c1: [f64; 2], p1: [f64; 2], t: f64) -> [f64; 2] {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    [
        a * p0[0] + b * c0[0] + c * c1[0] + d * p1[0],
        a * p0[1] + b * c0[1] + c * c1[1] + d * p1[1],
    ]
}

/// Split the area between a sampled curve and `baseline` into one
/// trapezoid per segment. Each trapezoid is convex, so it can be filled as a
/// plain polygon.
pub fn area_bands(points: &[[f64; 2]], baseline: f64) -> Vec<[[f64; 2]; 4]> {
    points
        .windows(2)
        .map(|w| [[w[0][0], baseline], w[0], w[1], [w[1][0], baseline]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_tension_is_passthrough() {
        let pts = [[0.0, 1.0], [1.0, 5.0], [2.0, 3.0]];
        assert_eq!(smooth(&pts, 0.0, 8), pts.to_vec());
    }

    #[test]
    fn curve_passes_through_every_point() {
        let pts = [[0.0, 1250.0], [1.0, 3750.0], [2.0, 15000.0], [3.0, 30000.0]];
        let steps = 10;
        let curve = smooth(&pts, 0.4, steps);

        assert_eq!(curve.len(), (pts.len() - 1) * steps + 1);
        for (i, p) in pts.iter().enumerate() {
            let sampled = curve[i * steps];
            assert_relative_eq!(sampled[0], p[0], epsilon = 1e-9);
            assert_relative_eq!(sampled[1], p[1], epsilon = 1e-6);
        }
    }

    #[test]
    fn flat_series_stays_flat() {
        let pts = [[0.0, 2500.0], [1.0, 2500.0], [2.0, 2500.0]];
        for p in smooth(&pts, 0.4, 6) {
            assert_relative_eq!(p[1], 2500.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn area_bands_cover_each_segment_down_to_baseline() {
        let bands = area_bands(&[[0.0, 1.0], [1.0, 3.0], [2.0, 2.0]], 0.0);
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0], [[0.0, 0.0], [0.0, 1.0], [1.0, 3.0], [1.0, 0.0]]);
        assert_eq!(bands[1], [[1.0, 0.0], [1.0, 3.0], [2.0, 2.0], [2.0, 0.0]]);
        assert!(area_bands(&[[0.0, 1.0]], 0.0).is_empty());
    }
}
