use crate::error::WorldGenError;
use serde::{Deserialize, Serialize};

/// Tunable generation parameters, grouped per pipeline stage.
///
/// Every knob has a calibrated default; a config file only needs to exist
/// when a caller wants to deviate from them. The struct is plain data and is
/// passed by reference through the pipeline, so independent generation calls
/// can run with different configs concurrently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldGenConfig {
    pub noise: NoiseConfig,
    pub boundaries: BoundaryConfig,
    pub smoothing: SmoothingConfig,
    pub climate: ClimateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Feature size of the first octave, in cells.
    pub scale: f32,
    pub octaves: usize,
    /// Per-octave amplitude decay.
    pub persistence: f32,
    /// Per-octave frequency growth.
    pub lacunarity: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            scale: 24.0,
            octaves: 5,
            persistence: 0.55,
            lacunarity: 2.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryConfig {
    /// Peak-to-peak amplitude of the pre-boundary elevation jitter.
    pub jitter_amplitude: f32,
    /// Minimum |relative velocity along the boundary normal| before an edge
    /// counts as convergent or divergent rather than transform.
    pub stress_threshold: f32,
    pub convergent_gain: f32,
    pub divergent_gain: f32,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            jitter_amplitude: 0.02,
            stress_threshold: 0.06,
            convergent_gain: 0.35,
            divergent_gain: 0.12,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    pub relaxation_passes: usize,
    /// Substitute span when the relaxed field is perfectly flat, so
    /// normalization never divides by zero.
    pub min_normalization_span: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            relaxation_passes: 2,
            min_normalization_span: 1e-6,
        }
    }
}

/// Calibration knobs for the climate-driven biome classifier.
///
/// The temperature and moisture scalars these act on are unitless values in
/// [0, 1]. None of the defaults encode a physical climate model; they are
/// tuned for plausible-looking variety and are meant to be adjusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateConfig {
    /// How strongly elevation above sea level cools a cell.
    pub altitude_temperature_penalty: f32,
    /// Standard deviation of the per-cell Gaussian temperature jitter.
    pub temperature_jitter: f32,
    /// Standard deviation of the per-cell Gaussian moisture jitter.
    pub moisture_jitter: f32,
    /// Maximum breadth-first search depth when looking for the nearest
    /// water cell. Bounds the per-cell classification cost.
    pub water_search_radius: u32,
    /// Altitude above which a cell sits in the rain shadow.
    pub rain_shadow_altitude: f32,
    /// Moisture multiplier applied inside the rain shadow.
    pub rain_shadow_factor: f32,
    /// Extra moisture granted near the equator, scaled by (1 - |latitude|).
    pub equator_moisture_boost: f32,

    // Classification thresholds, applied in rule order.
    pub glacier_temperature: f32,
    pub coastal_tundra_temperature: f32,
    pub coastal_marsh_temperature: f32,
    pub coastal_marsh_moisture: f32,
    pub cold_temperature: f32,
    pub hot_temperature: f32,
    pub cold_dry_moisture: f32,
    pub cold_wet_moisture: f32,
    pub temperate_dry_moisture: f32,
    pub temperate_wet_moisture: f32,
    pub temperate_marsh_moisture: f32,
    pub hot_dry_moisture: f32,
    pub hot_wet_moisture: f32,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            altitude_temperature_penalty: 0.6,
            temperature_jitter: 0.05,
            moisture_jitter: 0.05,
            water_search_radius: 15,
            rain_shadow_altitude: 0.6,
            rain_shadow_factor: 0.6,
            equator_moisture_boost: 0.15,
            glacier_temperature: 0.15,
            coastal_tundra_temperature: 0.25,
            coastal_marsh_temperature: 0.7,
            coastal_marsh_moisture: 0.7,
            cold_temperature: 0.3,
            hot_temperature: 0.65,
            cold_dry_moisture: 0.3,
            cold_wet_moisture: 0.55,
            temperate_dry_moisture: 0.25,
            temperate_wet_moisture: 0.55,
            temperate_marsh_moisture: 0.85,
            hot_dry_moisture: 0.3,
            hot_wet_moisture: 0.6,
        }
    }
}

impl WorldGenConfig {
    pub fn load_from_file(path: &str) -> Result<Self, WorldGenError> {
        let content = std::fs::read_to_string(path)?;
        let config: WorldGenConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), WorldGenError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
