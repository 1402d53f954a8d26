use leptos::SignalWithUntracked;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::application::{ChartDataService, MarketplaceService};
use crate::domain::{
    catalog::{AssetRecord, QueryPatch, SearchQuery},
    errors::{AppError, AppResult, PresentationError, ValidationError},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{
        ChartMetric, RandomSource, SeriesGenerator, SeriesOptions, SeriesPreset, SeriesSet, Timeframe,
    },
};
use crate::global_state;
use crate::infrastructure::default_random_source;

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string(value)
        .map_err(|e| PresentationError::SerializationFailed(e.to_string()).into())
}

fn from_json<T: serde::de::DeserializeOwned>(raw: &str) -> AppResult<T> {
    serde_json::from_str(raw)
        .map_err(|e| PresentationError::DeserializationFailed(e.to_string()).into())
}

/// Logs the failure with the exported function name and hands JS the message.
fn to_js_error(operation: &'static str) -> impl Fn(AppError) -> JsValue {
    move |error| {
        get_logger().log_with_metadata(
            LogLevel::Error,
            LogComponent::Presentation("WASM"),
            &format!("❌ {}", error),
            &format!("op={}", operation),
        );
        JsValue::from_str(&error.to_string())
    }
}

fn parse_timeframe(label: &str) -> AppResult<Timeframe> {
    label
        .parse()
        .map_err(|_| ValidationError::UnknownTimeframe(label.to_string()).into())
}

fn parse_metric(name: &str) -> AppResult<ChartMetric> {
    name.parse()
        .map_err(|_| ValidationError::UnknownMetric(name.to_string()).into())
}

fn parse_preset(name: &str) -> AppResult<SeriesPreset> {
    name.parse()
        .map_err(|_| ValidationError::UnknownPreset(name.to_string()).into())
}

/// Filters the marketplace catalog with a JSON `SearchQuery`.
pub fn filter_assets_json(query_json: &str) -> AppResult<String> {
    let query: SearchQuery = from_json(query_json)?;
    let assets: Vec<&AssetRecord> = global_state::marketplace().search(&query);
    to_json(&assets)
}

pub fn generate_series_json<R>(base_price: f64, volatility: f64, rng: &mut R) -> AppResult<String>
where
    R: RandomSource + ?Sized,
{
    let set = SeriesGenerator::default().generate_with(base_price, volatility, rng);
    to_json(&set)
}

/// Same as [`generate_series_json`] with generator tuning read from a JSON
/// `SeriesOptions`; omitted fields keep their defaults.
pub fn generate_series_with_options_json<R>(
    base_price: f64,
    volatility: f64,
    options_json: &str,
    rng: &mut R,
) -> AppResult<String>
where
    R: RandomSource + ?Sized,
{
    let options: SeriesOptions = from_json(options_json)?;
    to_json(&SeriesGenerator::new(options).generate_with(base_price, volatility, rng))
}

pub fn preset_series_json<R>(preset_name: &str, rng: &mut R) -> AppResult<String>
where
    R: RandomSource + ?Sized,
{
    let preset = parse_preset(preset_name)?;
    to_json(&ChartDataService::new().generate_preset(preset, rng))
}

/// Extracts one metric of one timeframe from a previously generated series.
pub fn project_metric_json(series_json: &str, timeframe: &str, metric: &str) -> AppResult<String> {
    let set: SeriesSet = from_json(series_json)?;
    let values =
        ChartDataService::new().chart_points(&set, parse_timeframe(timeframe)?, parse_metric(metric)?)?;
    to_json(&values)
}

pub fn summary_json(series_json: &str, timeframe: &str) -> AppResult<String> {
    let set: SeriesSet = from_json(series_json)?;
    to_json(&ChartDataService::new().summary(&set, parse_timeframe(timeframe)?))
}

pub fn select_chart_metric_by_name(metric: &str) -> AppResult<()> {
    global_state::select_chart_metric(parse_metric(metric)?);
    Ok(())
}

pub fn select_timeframe_by_label(timeframe: &str) -> AppResult<()> {
    global_state::select_chart_timeframe(parse_timeframe(timeframe)?);
    Ok(())
}

/// Projects the metric and timeframe picked in the chart selectors.
pub fn project_selected_json(series_json: &str) -> AppResult<String> {
    let set: SeriesSet = from_json(series_json)?;
    let (metric, timeframe) = global_state::chart_selection();
    to_json(&ChartDataService::new().chart_points(&set, timeframe, metric)?)
}

pub fn selected_summary_json(series_json: &str) -> AppResult<String> {
    let set: SeriesSet = from_json(series_json)?;
    let (_, timeframe) = global_state::chart_selection();
    to_json(&ChartDataService::new().summary(&set, timeframe))
}

/// Applies a JSON `QueryPatch` to the shared view state and returns the
/// listings now visible.
pub fn update_search_json(patch_json: &str) -> AppResult<String> {
    let patch: QueryPatch = from_json(patch_json)?;
    global_state::update_search(patch);
    global_state::visible_assets_signal().with_untracked(|assets| to_json(assets))
}

pub fn reset_search_json() -> AppResult<String> {
    global_state::reset_search();
    global_state::visible_assets_signal().with_untracked(|assets| to_json(assets))
}

#[wasm_bindgen(js_name = filterAssets)]
pub fn filter_assets(query_json: &str) -> Result<String, JsValue> {
    filter_assets_json(query_json).map_err(to_js_error("filterAssets"))
}

#[wasm_bindgen(js_name = generateSeries)]
pub fn generate_series(base_price: f64, volatility: f64) -> Result<String, JsValue> {
    generate_series_json(base_price, volatility, default_random_source().as_mut())
        .map_err(to_js_error("generateSeries"))
}

#[wasm_bindgen(js_name = generateSeriesWithOptions)]
pub fn generate_series_with_options(
    base_price: f64,
    volatility: f64,
    options_json: &str,
) -> Result<String, JsValue> {
    generate_series_with_options_json(
        base_price,
        volatility,
        options_json,
        default_random_source().as_mut(),
    )
    .map_err(to_js_error("generateSeriesWithOptions"))
}

#[wasm_bindgen(js_name = generatePresetSeries)]
pub fn generate_preset_series(preset_name: &str) -> Result<String, JsValue> {
    preset_series_json(preset_name, default_random_source().as_mut())
        .map_err(to_js_error("generatePresetSeries"))
}

#[wasm_bindgen(js_name = projectMetric)]
pub fn project_metric(series_json: &str, timeframe: &str, metric: &str) -> Result<String, JsValue> {
    project_metric_json(series_json, timeframe, metric).map_err(to_js_error("projectMetric"))
}

#[wasm_bindgen(js_name = chartSummary)]
pub fn chart_summary(series_json: &str, timeframe: &str) -> Result<String, JsValue> {
    summary_json(series_json, timeframe).map_err(to_js_error("chartSummary"))
}

#[wasm_bindgen(js_name = selectChartMetric)]
pub fn select_chart_metric(metric: &str) -> Result<(), JsValue> {
    select_chart_metric_by_name(metric).map_err(to_js_error("selectChartMetric"))
}

#[wasm_bindgen(js_name = selectTimeframe)]
pub fn select_timeframe(timeframe: &str) -> Result<(), JsValue> {
    select_timeframe_by_label(timeframe).map_err(to_js_error("selectTimeframe"))
}

#[wasm_bindgen(js_name = projectSelectedMetric)]
pub fn project_selected_metric(series_json: &str) -> Result<String, JsValue> {
    project_selected_json(series_json).map_err(to_js_error("projectSelectedMetric"))
}

#[wasm_bindgen(js_name = selectedChartSummary)]
pub fn selected_chart_summary(series_json: &str) -> Result<String, JsValue> {
    selected_summary_json(series_json).map_err(to_js_error("selectedChartSummary"))
}

#[wasm_bindgen(js_name = updateSearch)]
pub fn update_search(patch_json: &str) -> Result<String, JsValue> {
    update_search_json(patch_json).map_err(to_js_error("updateSearch"))
}

#[wasm_bindgen(js_name = resetSearch)]
pub fn reset_search() -> Result<String, JsValue> {
    reset_search_json().map_err(to_js_error("resetSearch"))
}

#[wasm_bindgen(js_name = categoryOptions)]
pub fn category_options() -> Result<String, JsValue> {
    to_json(&MarketplaceService::category_options()).map_err(to_js_error("categoryOptions"))
}

#[wasm_bindgen(js_name = maxListingPrice)]
pub fn max_listing_price() -> f64 {
    global_state::marketplace().max_price()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::SeededRandom;

    #[test]
    fn filter_rejects_unknown_category() {
        let err = filter_assets_json(r#"{"category":"Stamps"}"#).unwrap_err();
        assert!(matches!(
            err,
            AppError::Presentation(PresentationError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn projection_of_generated_series() {
        let json = preset_series_json("mining", &mut SeededRandom::new(2)).unwrap();
        let counts: Vec<f64> =
            serde_json::from_str(&project_metric_json(&json, "1W", "projectCount").unwrap()).unwrap();
        assert_eq!(counts.len(), 7);
        assert!(counts.iter().all(|c| *c >= 0.0 && c.fract() == 0.0));
    }

    #[test]
    fn unknown_names_are_validation_errors() {
        assert!(matches!(preset_series_json("bonds", &mut SeededRandom::new(1)), Err(AppError::Domain(_))));
        let json = generate_series_json(10.0, 0.1, &mut SeededRandom::new(1)).unwrap();
        assert!(project_metric_json(&json, "5Y", "price").is_err());
        assert!(project_metric_json(&json, "1D", "sharpe").is_err());
        assert!(summary_json(&json, "1D").unwrap().contains("\"timeframe\":\"1D\""));
    }

    // The only unit test touching the view-state signals: they live in a
    // thread-local runtime.
    #[test]
    fn chart_selection_drives_projection() {
        let json = preset_series_json("carbon-credits", &mut SeededRandom::new(8)).unwrap();

        let prices: Vec<f64> = serde_json::from_str(&project_selected_json(&json).unwrap()).unwrap();
        assert_eq!(prices.len(), 30);

        select_chart_metric_by_name("verification").unwrap();
        select_timeframe_by_label("1W").unwrap();
        let ratios: Vec<f64> = serde_json::from_str(&project_selected_json(&json).unwrap()).unwrap();
        assert_eq!(ratios.len(), 7);
        assert!(ratios.iter().all(|r| (0.0..=1.0).contains(r)));
        assert!(selected_summary_json(&json).unwrap().contains("\"timeframe\":\"1W\""));

        assert!(select_timeframe_by_label("2Y").is_err());
        assert_eq!(global_state::chart_selection(), (ChartMetric::Verification, Timeframe::OneWeek));
    }

    #[test]
    fn options_json_configures_the_generator() {
        let json = generate_series_with_options_json(
            100.0,
            0.0,
            r#"{"trend":"down","withMetrics":true}"#,
            &mut SeededRandom::new(4),
        )
        .unwrap();
        let set: SeriesSet = serde_json::from_str(&json).unwrap();
        let year = set.get(Timeframe::OneYear).unwrap();
        assert!(year.last().unwrap().price.value() < 100.0);
        assert!(year.iter().all(|p| p.metrics.is_some()));

        let err = generate_series_with_options_json(1.0, 0.1, r#"{"trend":"sideways"}"#, &mut SeededRandom::new(4));
        assert!(matches!(err, Err(AppError::Presentation(PresentationError::DeserializationFailed(_)))));
    }
}
