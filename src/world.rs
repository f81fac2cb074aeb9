use crate::biome::Biome;
use crate::plate::TectonicPlate;

/// A single row of normalized elevation samples
pub type HeightRow = Vec<f32>;
/// Dense elevation grid indexed [r][q], values in [0, 1] once generation completes
pub type HeightField = Vec<HeightRow>;
/// Dense grid mapping every cell to the id of its tectonic plate
pub type PlateMap = Vec<Vec<usize>>;
/// Dense grid of biome categories
pub type BiomeMap = Vec<Vec<Biome>>;

/// Complete output of one generation run. All grids share the same
/// width x height shape and are immutable once returned.
pub struct WorldData {
    pub width: usize,
    pub height: usize,
    pub height_map: HeightField,
    pub biomes: BiomeMap,
    /// Elevation threshold separating water from land, a quantile of the
    /// final height distribution.
    pub sea_level: f32,
    pub plate_map: PlateMap,
    pub plates: Vec<TectonicPlate>,
}

impl WorldData {
    pub fn height_at(&self, q: usize, r: usize) -> f32 {
        self.height_map[r][q]
    }

    pub fn biome_at(&self, q: usize, r: usize) -> Biome {
        self.biomes[r][q]
    }

    pub fn is_water(&self, q: usize, r: usize) -> bool {
        self.height_map[r][q] < self.sea_level
    }
}
