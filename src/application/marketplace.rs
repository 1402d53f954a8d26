use strum::IntoEnumIterator;

use crate::domain::{
    catalog::{
        ALL_CATEGORIES, AssetCategory, AssetRecord, SearchQuery, default_catalog, filter_and_sort,
    },
    errors::AppResult,
    logging::LogComponent,
};

/// Application service over the marketplace catalog.
///
/// Holds listings only; the active query lives in the view state.
#[derive(Debug, Clone)]
pub struct MarketplaceService {
    assets: Vec<AssetRecord>,
}

impl MarketplaceService {
    /// Validates every listing before accepting the catalog.
    pub fn new(assets: Vec<AssetRecord>) -> AppResult<Self> {
        for asset in &assets {
            asset.validate()?;
        }
        crate::log_info!(
            LogComponent::Application("Marketplace"),
            "🏷️ Marketplace ready with {} listings",
            assets.len()
        );
        Ok(Self { assets })
    }

    pub fn with_default_catalog() -> Self {
        Self { assets: default_catalog().to_vec() }
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&AssetRecord> {
        let results = filter_and_sort(&self.assets, query);
        crate::log_debug!(
            LogComponent::Application("Marketplace"),
            "🔎 {} of {} listings match",
            results.len(),
            self.assets.len()
        );
        results
    }

    /// Labels of the category dropdown, "All Categories" first.
    pub fn category_options() -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(AssetCategory::iter().map(|category| -> &'static str { category.into() }))
            .collect()
    }

    /// Highest listed price, used as the slider's upper bound.
    pub fn max_price(&self) -> f64 {
        self.assets.iter().map(|asset| asset.price).fold(0.0, f64::max)
    }
}
