//! Synthetic market data: value objects, series entities and the generator.

pub mod entities;
pub mod presets;
pub mod random;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use presets::SeriesPreset;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use services::{SeriesGenerator, SeriesOptions, generate_series};
pub use value_objects::*;
