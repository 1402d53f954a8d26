//! Marketplace catalog: asset listings, search query and the filter/sort.

pub mod entities;
pub mod fixtures;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use fixtures::default_catalog;
pub use services::*;
pub use value_objects::*;
