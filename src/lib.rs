use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
mod macros;
#[cfg(not(feature = "logic-only"))]
pub mod presentation;

pub use domain::catalog::{AssetRecord, SearchQuery, filter_and_sort};
pub use domain::market_data::{SeriesPoint, SeriesSet, generate_series};

/// Installs the panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!(
            "🚀 Asset market data layer ready ({} listings)",
            domain::catalog::default_catalog().len()
        ),
    );
}
