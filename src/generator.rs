/// World generation pipeline.
///
/// Fixed stage order: base noise, plate partition, boundary stress,
/// smoothing and normalization, sea-level derivation, biome classification.
/// Each stage draws from its own RNG stream derived from the master seed,
/// so identical settings always reproduce identical output grids.
use crate::biome::{AdvancedClassifier, BiomeClassifier, SimpleClassifier};
use crate::boundaries;
use crate::config::WorldGenConfig;
use crate::error::WorldGenError;
use crate::noise;
use crate::plates;
use crate::smooth;
use crate::tools::stage_seed;
use crate::world::WorldData;
use log::debug;

const NOISE_SALT: u64 = 1;
const PLATE_SALT: u64 = 2;
const BOUNDARY_SALT: u64 = 3;
const CLIMATE_SALT: u64 = 4;

pub const DEFAULT_PLATE_COUNT: usize = 11;
pub const DEFAULT_HEX_RADIUS: f32 = 1.0;
pub const DEFAULT_SEA_LEVEL_PERCENTILE: f32 = 0.5;
pub const DEFAULT_MOUNTAIN_THRESHOLD: f32 = 0.8;

/// Which biome classification strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierKind {
    Simple,
    Advanced,
}

/// External inputs of one generation run.
#[derive(Debug, Clone)]
pub struct WorldSettings {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub plate_count: usize,
    /// Pixel-space scale of the hex projection. Affects distances only,
    /// never the grid topology.
    pub hex_radius: f32,
    /// Quantile of the final height distribution used as the sea level.
    pub sea_level_percentile: f32,
    pub mountain_threshold: f32,
    pub classifier: ClassifierKind,
}

impl WorldSettings {
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            plate_count: DEFAULT_PLATE_COUNT,
            hex_radius: DEFAULT_HEX_RADIUS,
            sea_level_percentile: DEFAULT_SEA_LEVEL_PERCENTILE,
            mountain_threshold: DEFAULT_MOUNTAIN_THRESHOLD,
            classifier: ClassifierKind::Advanced,
        }
    }
}

/// Generates a world with the default tuning config.
pub fn generate(settings: &WorldSettings) -> Result<WorldData, WorldGenError> {
    generate_with_config(settings, &WorldGenConfig::default())
}

/// Generates a world, running the full pipeline to completion.
///
/// Settings are validated before any grid is allocated. The returned data is
/// a pure function of `settings` and `config`.
pub fn generate_with_config(
    settings: &WorldSettings,
    config: &WorldGenConfig,
) -> Result<WorldData, WorldGenError> {
    validate(settings)?;
    let (width, height) = (settings.width, settings.height);
    debug!(
        "generating {}x{} world, seed {}, {} plates",
        width, height, settings.seed, settings.plate_count
    );

    let mut height_map = noise::value_noise(
        width,
        height,
        stage_seed(settings.seed, NOISE_SALT),
        &config.noise,
    );

    let partition = plates::build_partition(
        width,
        height,
        settings.plate_count,
        settings.hex_radius,
        stage_seed(settings.seed, PLATE_SALT),
    );

    boundaries::apply_boundary_forces(
        &mut height_map,
        &partition,
        &config.boundaries,
        stage_seed(settings.seed, BOUNDARY_SALT),
    );

    smooth::relax(&mut height_map, config.smoothing.relaxation_passes);
    smooth::normalize(&mut height_map, config.smoothing.min_normalization_span);
    let sea_level = smooth::sea_level_quantile(&height_map, settings.sea_level_percentile);
    debug!("sea level settled at {sea_level:.3}");

    let classifier: Box<dyn BiomeClassifier> = match settings.classifier {
        ClassifierKind::Simple => Box::new(SimpleClassifier {
            mountain_threshold: settings.mountain_threshold,
        }),
        ClassifierKind::Advanced => Box::new(AdvancedClassifier {
            mountain_threshold: settings.mountain_threshold,
            climate: config.climate.clone(),
            seed: stage_seed(settings.seed, CLIMATE_SALT),
        }),
    };
    let biomes = classifier.classify(&height_map, sea_level);

    Ok(WorldData {
        width,
        height,
        height_map,
        biomes,
        sea_level,
        plate_map: partition.assignment,
        plates: partition.plates,
    })
}

fn validate(settings: &WorldSettings) -> Result<(), WorldGenError> {
    if settings.width == 0 || settings.height == 0 {
        return Err(WorldGenError::InvalidDimensions {
            width: settings.width,
            height: settings.height,
        });
    }
    let cell_count = settings.width * settings.height;
    if settings.plate_count == 0 || settings.plate_count > cell_count {
        return Err(WorldGenError::InvalidPlateCount {
            plate_count: settings.plate_count,
            cell_count,
        });
    }
    if !(settings.hex_radius > 0.0) {
        return Err(WorldGenError::InvalidHexRadius(settings.hex_radius));
    }
    if !(settings.sea_level_percentile > 0.0 && settings.sea_level_percentile < 1.0) {
        return Err(WorldGenError::InvalidSeaLevelPercentile(
            settings.sea_level_percentile,
        ));
    }
    if !(settings.mountain_threshold > 0.0 && settings.mountain_threshold < 1.0) {
        return Err(WorldGenError::InvalidMountainThreshold(
            settings.mountain_threshold,
        ));
    }
    Ok(())
}
