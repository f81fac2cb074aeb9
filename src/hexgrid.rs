/// Axial coordinate math for a flat-top hex grid.
///
/// Cells are addressed by integer axial coordinates (q, r) on a rectangular
/// window of the infinite hex plane. Pixel projection is orthographic and is
/// used only for Euclidean distances (Voronoi assignment, boundary-edge
/// vectors), never for drawing.
use crate::error::WorldGenError;
use glam::Vec2;

pub const SQRT3: f32 = 1.732_050_8;

/// Axial offsets of the six neighbors, flat-top orientation. The first
/// three cover half the edge set; scanning only those visits every edge
/// exactly once.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Returns the six axial neighbors of (q, r). Callers bounds-check; cells
/// past the grid edge are simply skipped.
pub fn neighbors(q: i32, r: i32) -> [(i32, i32); 6] {
    NEIGHBOR_OFFSETS.map(|(dq, dr)| (q + dq, r + dr))
}

pub fn in_bounds(q: i32, r: i32, width: usize, height: usize) -> bool {
    q >= 0 && (q as usize) < width && r >= 0 && (r as usize) < height
}

/// Projects axial coordinates to 2D pixel space for flat-top hexes.
pub fn axial_to_pixel(q: i32, r: i32, radius: f32) -> Vec2 {
    let x = 1.5 * radius * q as f32;
    let y = SQRT3 * radius * (r as f32 + 0.5 * q as f32);
    Vec2::new(x, y)
}

/// Approximate inverse of [`axial_to_pixel`]: snaps a pixel position to the
/// nearest hex cell via cube rounding. `radius` must match the projection
/// scale and must be non-zero.
pub fn pixel_to_axial(pos: Vec2, radius: f32) -> Result<(i32, i32), WorldGenError> {
    if radius == 0.0 {
        return Err(WorldGenError::InvalidHexRadius(radius));
    }

    let fq = (2.0 / 3.0) * pos.x / radius;
    let fr = ((-1.0 / 3.0) * pos.x + (SQRT3 / 3.0) * pos.y) / radius;
    let fs = -fq - fr;

    let mut rq = fq.round();
    let mut rr = fr.round();
    let rs = fs.round();

    let dq = (rq - fq).abs();
    let dr = (rr - fr).abs();
    let ds = (rs - fs).abs();

    // Re-derive the axis with the largest rounding error from the other two
    // so that q + r + s stays zero.
    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }

    Ok((rq as i32, rr as i32))
}

/// Hex grid distance between two axial coordinates.
pub fn distance(q1: i32, r1: i32, q2: i32, r2: i32) -> i32 {
    let s1 = -q1 - r1;
    let s2 = -q2 - r2;
    (q1 - q2).abs().max((r1 - r2).abs()).max((s1 - s2).abs())
}

/// The six corner points of the hex at (q, r), for downstream geometry.
pub fn hex_polygon(q: i32, r: i32, radius: f32) -> [Vec2; 6] {
    let center = axial_to_pixel(q, r, radius);
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f32).to_radians();
        center + Vec2::new(radius * angle.cos(), radius * angle.sin())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn neighbor_offsets_cancel_out() {
        let (sq, sr) = NEIGHBOR_OFFSETS
            .iter()
            .fold((0, 0), |(aq, ar), (dq, dr)| (aq + dq, ar + dr));
        assert_eq!((sq, sr), (0, 0));
    }

    #[test]
    fn all_neighbors_at_distance_one() {
        for (nq, nr) in neighbors(3, -2) {
            assert_eq!(distance(3, -2, nq, nr), 1);
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(5, 3)]
    #[case(-4, 7)]
    #[case(12, -9)]
    fn pixel_projection_round_trips(#[case] q: i32, #[case] r: i32) {
        let pos = axial_to_pixel(q, r, 1.0);
        assert_eq!(pixel_to_axial(pos, 1.0).unwrap(), (q, r));
    }

    #[test]
    fn pixel_to_axial_rejects_zero_radius() {
        assert!(pixel_to_axial(Vec2::new(1.0, 1.0), 0.0).is_err());
    }

    #[test]
    fn polygon_corners_sit_on_the_hex_radius() {
        let center = axial_to_pixel(2, 1, 1.5);
        for corner in hex_polygon(2, 1, 1.5) {
            assert!((corner.distance(center) - 1.5).abs() < 1e-5);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance(0, 0, 3, -1), distance(3, -1, 0, 0));
        assert_eq!(distance(0, 0, 3, -1), 3);
    }

    #[test]
    fn bounds_check_rejects_negative_and_overflow() {
        assert!(in_bounds(0, 0, 4, 4));
        assert!(in_bounds(3, 3, 4, 4));
        assert!(!in_bounds(-1, 0, 4, 4));
        assert!(!in_bounds(0, 4, 4, 4));
    }
}
