use once_cell::sync::Lazy;

use super::entities::AssetRecord;
use super::value_objects::AssetCategory;

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    category: AssetCategory,
    location: &str,
    expected_roi: &str,
    price: f64,
    available_tokens: u64,
    total_tokens: u64,
) -> AssetRecord {
    AssetRecord {
        id,
        title: title.to_string(),
        category,
        location: location.to_string(),
        expected_roi: expected_roi.to_string(),
        price,
        available_tokens,
        total_tokens,
    }
}

static DEFAULT_CATALOG: Lazy<Vec<AssetRecord>> = Lazy::new(|| {
    vec![
        listing(1, "Manhattan Office Tower", AssetCategory::RealEstate, "New York, USA", "8.5%", 250_000.0, 1_250, 5_000),
        listing(2, "Swiss Gold Reserve", AssetCategory::Commodities, "Zurich, Switzerland", "5.2%", 50_000.0, 3_400, 10_000),
        listing(3, "Digital Art Collection", AssetCategory::Art, "Digital", "Variable", 15_000.0, 450, 1_000),
        listing(4, "Amazon Reforestation Credits", AssetCategory::CarbonCredits, "Pará, Brazil", "6-9%", 8_500.0, 7_800, 20_000),
        listing(5, "Andean Lithium Claim", AssetCategory::Mining, "Atacama, Chile", "High Risk/Reward", 120_000.0, 900, 4_000),
        listing(6, "Nordic Wind Farm", AssetCategory::Infrastructure, "Aarhus, Denmark", "7.1%", 480_000.0, 2_100, 8_000),
    ]
});

/// Listings shown on the marketplace page. Built once, never mutated.
pub fn default_catalog() -> &'static [AssetRecord] {
    &DEFAULT_CATALOG
}
