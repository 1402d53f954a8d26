pub mod chart_service;
pub mod marketplace;

pub use chart_service::*;
pub use marketplace::*;
