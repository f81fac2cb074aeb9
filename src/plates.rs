/// Tectonic plate partition: site selection, drift velocities, and
/// nearest-site (Voronoi) assignment of every cell.
use crate::hexgrid;
use crate::plate::TectonicPlate;
use crate::world::PlateMap;
use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const MIN_DRIFT_SPEED: f32 = 0.4;
pub const MAX_DRIFT_SPEED: f32 = 1.0;

/// Plate layout for one world: the plates themselves, the per-cell
/// assignment, and the pixel projection of every cell. The projection is
/// kept because the boundary-force pass reuses it for edge vectors.
pub struct PlatePartition {
    pub plates: Vec<TectonicPlate>,
    pub assignment: PlateMap,
    pub cell_positions: Vec<Vec<Vec2>>,
}

/// Builds the plate partition for a `width` x `height` grid.
///
/// Sites are drawn uniformly at random and re-drawn on collision until
/// `plate_count` distinct cells are found; the caller guarantees
/// `plate_count` does not exceed the cell count, so the loop terminates.
/// Each plate then receives a velocity with a random direction and a
/// magnitude in [`MIN_DRIFT_SPEED`, `MAX_DRIFT_SPEED`]. Finally every cell
/// is assigned the id of its nearest site by squared Euclidean distance in
/// pixel space, brute force over all sites. Ties keep the lowest id, and
/// plate ids follow site draw order, so the whole layout is a pure function
/// of the seed.
pub fn build_partition(
    width: usize,
    height: usize,
    plate_count: usize,
    hex_radius: f32,
    seed: u64,
) -> PlatePartition {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut sites: Vec<(i32, i32)> = Vec::with_capacity(plate_count);
    while sites.len() < plate_count {
        let q = rng.random_range(0..width) as i32;
        let r = rng.random_range(0..height) as i32;
        if !sites.contains(&(q, r)) {
            sites.push((q, r));
        }
    }

    let plates: Vec<TectonicPlate> = sites
        .iter()
        .enumerate()
        .map(|(id, &site)| {
            let angle = rng.random::<f32>() * std::f32::consts::TAU;
            let magnitude =
                MIN_DRIFT_SPEED + rng.random::<f32>() * (MAX_DRIFT_SPEED - MIN_DRIFT_SPEED);
            TectonicPlate {
                id,
                site,
                velocity: Vec2::new(angle.cos(), angle.sin()) * magnitude,
            }
        })
        .collect();

    let site_positions: Vec<Vec2> = plates
        .iter()
        .map(|p| hexgrid::axial_to_pixel(p.site.0, p.site.1, hex_radius))
        .collect();

    let mut assignment: PlateMap = vec![vec![0; width]; height];
    let mut cell_positions = vec![vec![Vec2::ZERO; width]; height];
    for r in 0..height {
        for q in 0..width {
            let pos = hexgrid::axial_to_pixel(q as i32, r as i32, hex_radius);
            cell_positions[r][q] = pos;

            let mut best_id = 0;
            let mut best_d2 = f32::INFINITY;
            for (id, &site_pos) in site_positions.iter().enumerate() {
                let d2 = pos.distance_squared(site_pos);
                if d2 < best_d2 {
                    best_d2 = d2;
                    best_id = id;
                }
            }
            assignment[r][q] = best_id;
        }
    }

    PlatePartition {
        plates,
        assignment,
        cell_positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_cells_map_to_their_own_plate() {
        let partition = build_partition(8, 8, 4, 1.0, 1);
        for plate in &partition.plates {
            let (q, r) = plate.site;
            assert_eq!(partition.assignment[r as usize][q as usize], plate.id);
        }
    }

    #[test]
    fn assignment_is_a_total_partition() {
        let plate_count = 6;
        let partition = build_partition(16, 12, plate_count, 1.0, 42);
        let mut used = vec![false; plate_count];
        for row in &partition.assignment {
            for &id in row {
                assert!(id < plate_count);
                used[id] = true;
            }
        }
        assert!(used.iter().all(|&u| u), "every plate id should own a cell");
    }

    #[test]
    fn sites_are_distinct_even_when_saturated() {
        // As many plates as cells forces the re-draw loop through every
        // collision case.
        let partition = build_partition(3, 3, 9, 1.0, 7);
        let mut sites: Vec<_> = partition.plates.iter().map(|p| p.site).collect();
        sites.sort();
        sites.dedup();
        assert_eq!(sites.len(), 9);
    }

    #[test]
    fn drift_speed_stays_in_range() {
        let partition = build_partition(16, 12, 8, 1.0, 3);
        for plate in &partition.plates {
            let speed = plate.velocity.length();
            assert!(speed >= MIN_DRIFT_SPEED - 1e-4 && speed <= MAX_DRIFT_SPEED + 1e-4);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = build_partition(10, 10, 5, 1.0, 11);
        let b = build_partition(10, 10, 5, 1.0, 11);
        assert_eq!(a.assignment, b.assignment);
        for (pa, pb) in a.plates.iter().zip(&b.plates) {
            assert_eq!(pa.site, pb.site);
            assert_eq!(pa.velocity, pb.velocity);
        }
    }
}
