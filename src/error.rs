use thiserror::Error;

/// Errors raised by world generation and the config layer.
///
/// Invalid settings are rejected before any grid is allocated. Generation
/// itself cannot fail partway: once the settings pass validation the
/// pipeline always runs to completion.
#[derive(Error, Debug)]
pub enum WorldGenError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("plate count must be between 1 and {cell_count} available cells, got {plate_count}")]
    InvalidPlateCount {
        plate_count: usize,
        cell_count: usize,
    },
    #[error("hex radius must be positive, got {0}")]
    InvalidHexRadius(f32),
    #[error("sea level percentile must lie strictly between 0 and 1, got {0}")]
    InvalidSeaLevelPercentile(f32),
    #[error("mountain threshold must lie strictly between 0 and 1, got {0}")]
    InvalidMountainThreshold(f32),
    #[error("failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
