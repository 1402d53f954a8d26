pub mod catalog;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod market_data;
