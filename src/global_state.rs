use crate::application::MarketplaceService;
use crate::domain::catalog::{AssetRecord, QueryPatch, SearchQuery};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{ChartMetric, Timeframe};
use leptos::*;
use once_cell::sync::Lazy;

static MARKETPLACE: Lazy<MarketplaceService> = Lazy::new(MarketplaceService::with_default_catalog);

crate::view_signals! {
    search_query_signal => search_query: SearchQuery = SearchQuery::default(),
    visible_assets_signal => visible_assets: Vec<AssetRecord> = visible_for(&SearchQuery::default()),
    chart_metric_signal => chart_metric: ChartMetric = ChartMetric::default(),
    chart_timeframe_signal => chart_timeframe: Timeframe = Timeframe::OneMonth,
}

pub fn marketplace() -> &'static MarketplaceService {
    &MARKETPLACE
}

/// Swaps in a new query built from the previous one and refreshes the
/// visible listings in the same step.
pub fn update_search(patch: QueryPatch) -> SearchQuery {
    let next = search_query_signal().with_untracked(|current| current.merged(patch));
    set_search(next.clone());
    next
}

pub fn set_search(query: SearchQuery) {
    crate::log_debug!(
        LogComponent::Presentation("ViewState"),
        "🔎 Query '{}' in {} [{}, {}] by {}",
        query.query,
        query.category.label(),
        query.price_range.min,
        query.price_range.max,
        query.sort_by
    );
    let visible = visible_for(&query);
    search_query_signal().set(query);
    visible_assets_signal().set(visible);
}

pub fn reset_search() {
    set_search(SearchQuery::default());
}

pub fn select_chart_metric(metric: ChartMetric) {
    chart_metric_signal().set(metric);
}

pub fn select_chart_timeframe(timeframe: Timeframe) {
    chart_timeframe_signal().set(timeframe);
}

/// Metric and timeframe currently picked in the chart selectors.
pub fn chart_selection() -> (ChartMetric, Timeframe) {
    (chart_metric_signal().get_untracked(), chart_timeframe_signal().get_untracked())
}

fn visible_for(query: &SearchQuery) -> Vec<AssetRecord> {
    marketplace().search(query).into_iter().cloned().collect()
}
