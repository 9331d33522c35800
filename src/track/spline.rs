//! Catmull-Rom smoothing of the rough loop

use glam::Vec2;

use crate::error::{Result, TrackError};

/// Uniform Catmull-Rom blend between `p1` (t = 0) and `p2` (t = 1).
#[inline]
pub fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - 3.0 * p2 + p3 - p0) * t3)
}

/// Densify a closed raw polyline with `steps_per_segment` samples per point.
///
/// Successors wrap around the loop. The predecessor of the first point is
/// the first point itself rather than the last one, which flattens the
/// tangent at the seam.
pub fn smooth(raw: &[Vec2], steps_per_segment: u32) -> Result<Vec<Vec2>> {
    let n = raw.len();
    if n < 2 {
        return Err(TrackError::InvalidInput(format!(
            "spline needs at least 2 points, got {n}"
        )));
    }
    if steps_per_segment == 0 {
        return Err(TrackError::InvalidConfiguration(
            "spline steps per segment must be positive".into(),
        ));
    }

    let steps = steps_per_segment as usize;
    let mut dense = Vec::with_capacity(n * steps);
    for i in 0..n {
        let p0 = if i == 0 { raw[0] } else { raw[i - 1] };
        let p1 = raw[i];
        let p2 = raw[(i + 1) % n];
        let p3 = raw[(i + 2) % n];

        for k in 0..steps {
            let t = k as f32 / steps as f32;
            dense.push(catmull_rom(p0, p1, p2, p3, t));
        }
    }

    Ok(dense)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_blend_endpoints() {
        let (p0, p1, p2, p3) = (
            Vec2::new(-3.0, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 2.0),
            Vec2::new(9.0, -1.0),
        );
        assert!((catmull_rom(p0, p1, p2, p3, 0.0) - p1).length() < 1e-6);
        assert!((catmull_rom(p0, p1, p2, p3, 1.0) - p2).length() < 1e-5);
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let (p0, p1, p2, p3) = (
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        );
        for k in 0..10 {
            let t = k as f32 / 10.0;
            let p = catmull_rom(p0, p1, p2, p3, t);
            assert!(p.y.abs() < 1e-6);
            assert!((p.x - (1.0 + t)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_output_length_and_knots() {
        let raw = square();
        let dense = smooth(&raw, 10).unwrap();
        assert_eq!(dense.len(), raw.len() * 10);

        // Every segment starts exactly on its raw point
        for (i, p) in raw.iter().enumerate() {
            assert!((dense[i * 10] - *p).length() < 1e-6);
        }
    }

    #[test]
    fn test_first_point_uses_itself_as_predecessor() {
        let raw = square();
        let dense = smooth(&raw, 4).unwrap();
        let expected = catmull_rom(raw[0], raw[0], raw[1], raw[2], 0.25);
        assert!((dense[1] - expected).length() < 1e-6);

        let wrapped = catmull_rom(raw[3], raw[0], raw[1], raw[2], 0.25);
        assert!((dense[1] - wrapped).length() > 1e-3);
    }

    #[test]
    fn test_last_segments_wrap_forward() {
        let raw = square();
        let dense = smooth(&raw, 4).unwrap();
        let expected = catmull_rom(raw[2], raw[3], raw[0], raw[1], 0.5);
        assert!((dense[3 * 4 + 2] - expected).length() < 1e-6);
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(matches!(
            smooth(&[Vec2::ZERO], 10),
            Err(TrackError::InvalidInput(_))
        ));
        assert!(matches!(
            smooth(&square(), 0),
            Err(TrackError::InvalidConfiguration(_))
        ));
    }
}
