pub mod biome;
pub mod boundaries;
pub mod config;
pub mod error;
pub mod generator;
pub mod hexgrid;
pub mod noise;
pub mod plate;
pub mod plates;
pub mod smooth;
pub mod tools;
pub mod world;

pub use biome::{Biome, BiomeClassifier};
pub use config::WorldGenConfig;
pub use error::WorldGenError;
pub use generator::{ClassifierKind, WorldSettings, generate, generate_with_config};
pub use world::WorldData;
