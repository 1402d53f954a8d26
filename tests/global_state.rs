use asset_market_wasm::domain::catalog::{AssetCategory, CategoryFilter, QueryPatch, SortBy};
use asset_market_wasm::domain::market_data::{ChartMetric, Timeframe};
use asset_market_wasm::global_state::{
    chart_selection, reset_search, search_query_signal, select_chart_metric, select_chart_timeframe,
    update_search, visible_assets_signal,
};
use leptos::*;

// Signals live in a thread-local runtime, so the whole flow runs in one test.
#[test]
fn search_updates_replace_query_and_refresh_listings() {
    let initial = search_query_signal().get_untracked();
    assert_eq!(visible_assets_signal().with_untracked(|assets| assets.len()), 6);

    let after_sort = update_search(QueryPatch {
        sort_by: Some(SortBy::PriceLowToHigh),
        ..Default::default()
    });
    assert_eq!(initial.sort_by, SortBy::Latest);
    assert_eq!(after_sort.sort_by, SortBy::PriceLowToHigh);
    let cheapest = visible_assets_signal().with_untracked(|assets| assets[0].title.clone());
    assert_eq!(cheapest, "Amazon Reforestation Credits");

    update_search(QueryPatch {
        category: Some(CategoryFilter::Only(AssetCategory::Mining)),
        ..Default::default()
    });
    let query = search_query_signal().get_untracked();
    assert_eq!(query.sort_by, SortBy::PriceLowToHigh);
    assert_eq!(visible_assets_signal().with_untracked(|assets| assets.len()), 1);

    update_search(QueryPatch { query: Some("no such listing".into()), ..Default::default() });
    assert!(visible_assets_signal().with_untracked(|assets| assets.is_empty()));

    reset_search();
    assert_eq!(search_query_signal().get_untracked(), initial);
    assert_eq!(visible_assets_signal().with_untracked(|assets| assets.len()), 6);

    assert_eq!(chart_selection(), (ChartMetric::Price, Timeframe::OneMonth));
    select_chart_metric(ChartMetric::OffsetDemand);
    select_chart_timeframe(Timeframe::OneYear);
    assert_eq!(chart_selection(), (ChartMetric::OffsetDemand, Timeframe::OneYear));
}
