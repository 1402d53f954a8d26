use super::entities::{AssetRecord, SearchQuery};
use super::value_objects::SortBy;

/// Inclusion test shared by the filter and its tests.
///
/// Text matches case-insensitively against title, location or category;
/// the category filter and the inclusive price window must also hold.
pub fn matches_query(asset: &AssetRecord, query: &SearchQuery) -> bool {
    admits(asset, query, &query.query.to_lowercase())
}

/// `needle_lower` must be `query.query` already lowercased.
fn admits(asset: &AssetRecord, query: &SearchQuery, needle_lower: &str) -> bool {
    text_matches(asset, needle_lower)
        && query.category.admits(asset.category)
        && query.price_range.contains(asset.price)
}

fn text_matches(asset: &AssetRecord, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    [asset.title.as_str(), asset.location.as_str(), asset.category.as_ref()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

/// Selects the assets matching `query` and orders them by `query.sort_by`.
///
/// All sorts are stable, so records with equal keys (for instance two
/// sentinel ROIs) keep their catalog order.
pub fn filter_and_sort<'a>(assets: &'a [AssetRecord], query: &SearchQuery) -> Vec<&'a AssetRecord> {
    let needle = query.query.to_lowercase();
    let mut selected: Vec<&AssetRecord> = assets
        .iter()
        .filter(|asset| admits(asset, query, &needle))
        .collect();

    sort_assets(&mut selected, query.sort_by);
    selected
}

/// Stable in-place ordering of already-filtered assets.
pub fn sort_assets(assets: &mut [&AssetRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceLowToHigh => assets.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHighToLow => assets.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Roi => assets.sort_by(|a, b| a.roi().cmp_descending(&b.roi())),
        SortBy::Latest => assets.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}
