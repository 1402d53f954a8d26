use asset_market_wasm::domain::catalog::{
    AssetCategory, AssetRecord, CategoryFilter, PriceRange, Roi, SearchQuery, SortBy, filter_and_sort,
    matches_query,
};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

const TITLES: [&str; 6] = ["Gold Vault", "Harbor Loft", "Art Piece", "Forest Credits", "Copper Pit", "Solar Park"];
const LOCATIONS: [&str; 4] = ["Zurich", "Lisbon", "Digital", "Nairobi"];
const ROIS: [&str; 6] = ["5.2%", "Variable", "8-12%", "High Risk/Reward", "3%", "Variable"];
const NEEDLES: [&str; 7] = ["", "gold", "ART", "zurich", "x", "estate", "credits"];

#[derive(Clone, Debug)]
struct Catalog(Vec<AssetRecord>);

impl Arbitrary for Catalog {
    fn arbitrary(g: &mut Gen) -> Self {
        let categories: Vec<AssetCategory> = AssetCategory::iter().collect();
        let len = usize::arbitrary(g) % 12;
        let assets = (0..len)
            .map(|i| {
                let total = u64::from(u16::arbitrary(g)) + 1;
                AssetRecord {
                    // unique ids, deliberately not in catalog order
                    id: ((i * 7) % 13) as u32,
                    title: g.choose(&TITLES).unwrap().to_string(),
                    category: *g.choose(&categories).unwrap(),
                    location: g.choose(&LOCATIONS).unwrap().to_string(),
                    expected_roi: g.choose(&ROIS).unwrap().to_string(),
                    price: f64::from(u32::arbitrary(g) % 1_000_000),
                    available_tokens: u64::arbitrary(g) % (total + 1),
                    total_tokens: total,
                }
            })
            .collect();
        Catalog(assets)
    }
}

#[derive(Clone, Debug)]
struct Query(SearchQuery);

impl Arbitrary for Query {
    fn arbitrary(g: &mut Gen) -> Self {
        let categories: Vec<AssetCategory> = AssetCategory::iter().collect();
        let sorts: Vec<SortBy> = SortBy::iter().collect();
        let category = if bool::arbitrary(g) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(*g.choose(&categories).unwrap())
        };
        let min = f64::from(u32::arbitrary(g) % 1_000_000);
        let max = f64::from(u32::arbitrary(g) % 1_000_000);
        Query(SearchQuery::new(
            *g.choose(&NEEDLES).unwrap(),
            category,
            PriceRange::new(min, max),
            *g.choose(&sorts).unwrap(),
        ))
    }
}

#[quickcheck]
fn no_false_positives_or_negatives(catalog: Catalog, query: Query) -> bool {
    let result = filter_and_sort(&catalog.0, &query.0);
    let expected = catalog.0.iter().filter(|asset| matches_query(asset, &query.0)).count();
    result.len() == expected && result.iter().all(|asset| matches_query(asset, &query.0))
}

#[quickcheck]
fn filtering_is_idempotent(catalog: Catalog, query: Query) -> bool {
    let once: Vec<AssetRecord> = filter_and_sort(&catalog.0, &query.0).into_iter().cloned().collect();
    let twice = filter_and_sort(&once, &query.0);
    once.iter().map(|a| a.id).eq(twice.iter().map(|a| a.id))
}

#[quickcheck]
fn price_sorts_are_monotonic(catalog: Catalog, query: Query) -> bool {
    let ascending = filter_and_sort(&catalog.0, &query.0.with_sort(SortBy::PriceLowToHigh));
    let descending = filter_and_sort(&catalog.0, &query.0.with_sort(SortBy::PriceHighToLow));
    ascending.windows(2).all(|w| w[0].price <= w[1].price)
        && descending.windows(2).all(|w| w[0].price >= w[1].price)
}

#[quickcheck]
fn roi_sort_keeps_sentinel_input_order(catalog: Catalog, query: Query) -> bool {
    let query = query.0.with_sort(SortBy::Roi);
    let result = filter_and_sort(&catalog.0, &query);

    let sentinel_ids_out: Vec<u32> = result
        .iter()
        .filter(|asset| asset.roi() == Roi::Sentinel)
        .map(|asset| asset.id)
        .collect();
    let sentinel_ids_in: Vec<u32> = catalog
        .0
        .iter()
        .filter(|asset| matches_query(asset, &query) && asset.roi() == Roi::Sentinel)
        .map(|asset| asset.id)
        .collect();

    let numeric_before_sentinels = result
        .iter()
        .skip_while(|asset| asset.roi() != Roi::Sentinel)
        .all(|asset| asset.roi() == Roi::Sentinel);

    sentinel_ids_out == sentinel_ids_in && numeric_before_sentinels
}

#[quickcheck]
fn generated_fixtures_respect_supply(catalog: Catalog) -> bool {
    catalog.0.iter().all(|asset| asset.validate().is_ok())
}
