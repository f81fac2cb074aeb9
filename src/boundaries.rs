/// Plate boundary stress applied to the height field.
///
/// Classifies the interaction at every boundary edge by projecting the
/// relative plate velocity onto the boundary normal, then raises convergent
/// edges and lowers divergent ones. Deltas are unbounded here; the smoothing
/// pass renormalizes afterwards.
use crate::config::BoundaryConfig;
use crate::hexgrid;
use crate::plates::PlatePartition;
use crate::world::HeightField;
use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The half of the neighbor set scanned per cell. Visiting three of the six
/// directions touches every boundary edge exactly once.
const HALF_EDGE_OFFSETS: [(i32, i32); 3] = [(1, 0), (0, -1), (-1, 1)];

/// Type of plate boundary interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryType {
    /// Plates pushing into each other, uplifting terrain
    Convergent,
    /// Plates spreading apart, opening rifts
    Divergent,
    /// Plates sliding past each other, leaving elevation untouched
    Transform,
}

/// Classify a boundary edge from the relative-velocity component along the
/// boundary normal. Motion below `threshold` in either direction counts as
/// transform, so near-zero drift never reshapes terrain.
pub fn classify_stress(normal_component: f32, threshold: f32) -> BoundaryType {
    if normal_component > threshold {
        BoundaryType::Convergent
    } else if normal_component < -threshold {
        BoundaryType::Divergent
    } else {
        BoundaryType::Transform
    }
}

/// Applies boundary stress to `height_map` in place.
///
/// # Algorithm
/// 1. Add small seeded jitter across the whole field so plate interiors
///    stay non-flat.
/// 2. For each cell, scan [`HALF_EDGE_OFFSETS`]; where the neighbor belongs
///    to a different plate, project the relative velocity onto the boundary
///    normal (perpendicular to the inter-cell pixel vector).
/// 3. Convergent edges raise both cells, divergent edges lower both cells,
///    each delta split evenly between the two sides.
pub fn apply_boundary_forces(
    height_map: &mut HeightField,
    partition: &PlatePartition,
    config: &BoundaryConfig,
    seed: u64,
) {
    let rows = height_map.len();
    if rows == 0 {
        return;
    }
    let cols = height_map[0].len();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    apply_jitter(height_map, config.jitter_amplitude, &mut rng);

    for r in 0..rows {
        for q in 0..cols {
            let plate_id = partition.assignment[r][q];
            let velocity = partition.plates[plate_id].velocity;
            let pos = partition.cell_positions[r][q];

            for (dq, dr) in HALF_EDGE_OFFSETS {
                let nq = q as i32 + dq;
                let nr = r as i32 + dr;
                if !hexgrid::in_bounds(nq, nr, cols, rows) {
                    continue;
                }
                let (nq, nr) = (nq as usize, nr as usize);

                let neighbor_id = partition.assignment[nr][nq];
                if neighbor_id == plate_id {
                    continue;
                }

                let edge: Vec2 = partition.cell_positions[nr][nq] - pos;
                let edge_len = edge.length();
                if edge_len <= f32::EPSILON {
                    continue;
                }
                let normal = (edge / edge_len).perp();

                let relative = velocity - partition.plates[neighbor_id].velocity;
                let along_normal = relative.dot(normal);

                match classify_stress(along_normal, config.stress_threshold) {
                    BoundaryType::Convergent => {
                        let delta =
                            (along_normal - config.stress_threshold) * config.convergent_gain;
                        height_map[r][q] += delta * 0.5;
                        height_map[nr][nq] += delta * 0.5;
                    }
                    BoundaryType::Divergent => {
                        let delta =
                            (-config.stress_threshold - along_normal) * config.divergent_gain;
                        height_map[r][q] -= delta * 0.5;
                        height_map[nr][nq] -= delta * 0.5;
                    }
                    BoundaryType::Transform => {}
                }
            }
        }
    }
}

/// Uniform jitter of `(u - 0.5) * amplitude` per cell, drawn row-major.
fn apply_jitter(height_map: &mut HeightField, amplitude: f32, rng: &mut ChaCha8Rng) {
    for row in height_map.iter_mut() {
        for value in row.iter_mut() {
            *value += (rng.random::<f32>() - 0.5) * amplitude;
        }
    }
}
