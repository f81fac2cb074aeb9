/// Biome classification.
///
/// Two interchangeable strategies map the final height field to biome
/// categories. The simple one is a pure threshold pass over height and
/// ocean adjacency. The advanced one derives a small climate model per cell
/// (latitude, altitude, temperature, moisture) and routes it through ordered
/// threshold rules. Both are one-shot pure mappings; neither keeps state
/// between cells beyond its RNG stream.
use crate::config::ClimateConfig;
use crate::hexgrid;
use crate::world::{BiomeMap, HeightField};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::collections::VecDeque;

/// The closed set of biome categories.
///
/// `id()` values are stable and used by downstream serialization; do not
/// reorder them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    Grass,
    Coast,
    Mountain,
    Ocean,
    Desert,
    Tundra,
    Glacier,
    Marsh,
    Steppe,
    Savanna,
    Taiga,
    TemperateForest,
    TropicalForest,
}

impl Biome {
    /// Stable integer id for storage and export.
    pub fn id(self) -> u8 {
        match self {
            Biome::Grass => 0,
            Biome::Coast => 1,
            Biome::Mountain => 2,
            Biome::Ocean => 3,
            Biome::Desert => 4,
            Biome::Tundra => 5,
            Biome::Glacier => 6,
            Biome::Marsh => 7,
            Biome::Steppe => 8,
            Biome::Savanna => 9,
            Biome::Taiga => 10,
            Biome::TemperateForest => 11,
            Biome::TropicalForest => 12,
        }
    }

    /// Movement cost multiplier consumed by the pathfinding layer.
    /// Ocean and glacier are impassable on foot.
    pub fn movement_cost(self) -> f32 {
        match self {
            Biome::Grass => 1.0,
            Biome::Coast => 1.0,
            Biome::Mountain => 5.0,
            Biome::Ocean => 999.0,
            Biome::Desert => 1.2,
            Biome::Tundra => 1.5,
            Biome::Glacier => 999.0,
            Biome::Marsh => 2.0,
            Biome::Steppe => 0.8,
            Biome::Savanna => 1.0,
            Biome::Taiga => 1.3,
            Biome::TemperateForest => 1.2,
            Biome::TropicalForest => 1.5,
        }
    }

    /// Whether population can settle the tile at all.
    pub fn habitable(self) -> bool {
        !matches!(self, Biome::Ocean | Biome::Glacier)
    }
}

/// A biome classification strategy over a finished height field.
pub trait BiomeClassifier {
    fn classify(&self, height_map: &HeightField, sea_level: f32) -> BiomeMap;
}

/// Threshold-only classification: ocean, mountain, coast, grass.
pub struct SimpleClassifier {
    pub mountain_threshold: f32,
}

impl BiomeClassifier for SimpleClassifier {
    fn classify(&self, height_map: &HeightField, sea_level: f32) -> BiomeMap {
        let rows = height_map.len();
        let cols = if rows > 0 { height_map[0].len() } else { 0 };

        let mut out: BiomeMap = vec![vec![Biome::Grass; cols]; rows];
        for r in 0..rows {
            for q in 0..cols {
                let h = height_map[r][q];
                out[r][q] = if h < sea_level {
                    Biome::Ocean
                } else if h >= self.mountain_threshold {
                    Biome::Mountain
                } else if touches_water(height_map, sea_level, q, r) {
                    Biome::Coast
                } else {
                    Biome::Grass
                };
            }
        }
        out
    }
}

/// Climate-driven classification into the full biome set.
///
/// Per cell it derives latitude (linear in row position), altitude headroom
/// above sea level, a temperature scalar falling with both |latitude| and
/// altitude, and a moisture scalar falling with distance to the nearest
/// water cell. Temperature and moisture each get seeded Gaussian jitter so
/// zone edges are ragged rather than ruler-straight.
pub struct AdvancedClassifier {
    pub mountain_threshold: f32,
    pub climate: ClimateConfig,
    pub seed: u64,
}

impl BiomeClassifier for AdvancedClassifier {
    fn classify(&self, height_map: &HeightField, sea_level: f32) -> BiomeMap {
        let rows = height_map.len();
        let cols = if rows > 0 { height_map[0].len() } else { 0 };
        let climate = &self.climate;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let temperature_noise = Normal::new(0.0_f32, climate.temperature_jitter.max(0.0)).unwrap();
        let moisture_noise = Normal::new(0.0_f32, climate.moisture_jitter.max(0.0)).unwrap();

        let mut out: BiomeMap = vec![vec![Biome::Grass; cols]; rows];
        for r in 0..rows {
            let latitude = row_latitude(r, rows);
            for q in 0..cols {
                // Both jitters are drawn for every cell, water included, so
                // the draw sequence depends only on the grid shape.
                let temperature_jitter = temperature_noise.sample(&mut rng);
                let moisture_jitter = moisture_noise.sample(&mut rng);

                let h = height_map[r][q];
                let altitude = altitude_headroom(h, sea_level);
                let temperature = ((1.0 - latitude.abs())
                    - altitude * climate.altitude_temperature_penalty
                    + temperature_jitter)
                    .clamp(0.0, 1.0);

                let max_radius = climate.water_search_radius.max(1);
                let water_steps = water_distance(height_map, sea_level, q, r, max_radius);
                let mut moisture = 1.0 - water_steps as f32 / max_radius as f32;
                if altitude > climate.rain_shadow_altitude {
                    moisture *= climate.rain_shadow_factor;
                }
                moisture += climate.equator_moisture_boost * (1.0 - latitude.abs());
                moisture = (moisture + moisture_jitter).clamp(0.0, 1.0);

                let coastal = touches_water(height_map, sea_level, q, r);
                out[r][q] = classify_cell(
                    h,
                    sea_level,
                    self.mountain_threshold,
                    temperature,
                    moisture,
                    coastal,
                    climate,
                );
            }
        }
        out
    }
}

/// Ordered threshold rules over the derived climate scalars. Pure: the same
/// inputs always yield the same biome.
fn classify_cell(
    height: f32,
    sea_level: f32,
    mountain_threshold: f32,
    temperature: f32,
    moisture: f32,
    coastal: bool,
    climate: &ClimateConfig,
) -> Biome {
    if height < sea_level {
        return Biome::Ocean;
    }
    if height >= mountain_threshold {
        return if temperature < climate.glacier_temperature {
            Biome::Glacier
        } else {
            Biome::Mountain
        };
    }
    if coastal {
        if temperature < climate.coastal_tundra_temperature {
            return Biome::Tundra;
        }
        if temperature > climate.coastal_marsh_temperature
            && moisture > climate.coastal_marsh_moisture
        {
            return Biome::Marsh;
        }
        return Biome::Coast;
    }

    if temperature < climate.cold_temperature {
        if moisture < climate.cold_dry_moisture {
            Biome::Tundra
        } else if moisture < climate.cold_wet_moisture {
            Biome::Steppe
        } else {
            Biome::Taiga
        }
    } else if temperature < climate.hot_temperature {
        if moisture < climate.temperate_dry_moisture {
            Biome::Steppe
        } else if moisture < climate.temperate_wet_moisture {
            Biome::Grass
        } else if moisture < climate.temperate_marsh_moisture {
            Biome::TemperateForest
        } else {
            Biome::Marsh
        }
    } else if moisture < climate.hot_dry_moisture {
        Biome::Desert
    } else if moisture < climate.hot_wet_moisture {
        Biome::Savanna
    } else {
        Biome::TropicalForest
    }
}

/// Latitude in [-1, 1], linear in row position. Row 0 is the north edge.
fn row_latitude(r: usize, rows: usize) -> f32 {
    if rows > 1 {
        (r as f32 / (rows - 1) as f32) * 2.0 - 1.0
    } else {
        0.0
    }
}

/// Fraction of the above-sea elevation range this cell sits at.
fn altitude_headroom(height: f32, sea_level: f32) -> f32 {
    let span = (1.0 - sea_level).max(1e-6);
    ((height - sea_level) / span).clamp(0.0, 1.0)
}

/// True when any in-bounds neighbor lies below sea level.
fn touches_water(height_map: &HeightField, sea_level: f32, q: usize, r: usize) -> bool {
    let rows = height_map.len();
    let cols = height_map[0].len();
    hexgrid::neighbors(q as i32, r as i32)
        .into_iter()
        .any(|(nq, nr)| {
            hexgrid::in_bounds(nq, nr, cols, rows)
                && height_map[nr as usize][nq as usize] < sea_level
        })
}

/// Breadth-first search outward from (q, r) for the nearest below-sea-level
/// cell, capped at `max_radius` steps. Returns the step count, or
/// `max_radius` when no water lies within range.
fn water_distance(
    height_map: &HeightField,
    sea_level: f32,
    q: usize,
    r: usize,
    max_radius: u32,
) -> u32 {
    let rows = height_map.len();
    let cols = height_map[0].len();
    if height_map[r][q] < sea_level {
        return 0;
    }

    let mut visited = vec![false; rows * cols];
    let mut queue: VecDeque<(i32, i32, u32)> = VecDeque::new();
    visited[r * cols + q] = true;
    queue.push_back((q as i32, r as i32, 0));

    while let Some((cq, cr, steps)) = queue.pop_front() {
        if steps >= max_radius {
            continue;
        }
        for (nq, nr) in hexgrid::neighbors(cq, cr) {
            if !hexgrid::in_bounds(nq, nr, cols, rows) {
                continue;
            }
            let index = nr as usize * cols + nq as usize;
            if visited[index] {
                continue;
            }
            if height_map[nr as usize][nq as usize] < sea_level {
                return steps + 1;
            }
            visited[index] = true;
            queue.push_back((nq, nr, steps + 1));
        }
    }

    max_radius
}
