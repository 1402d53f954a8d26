use serde::Serialize;

use crate::domain::{
    errors::{AppResult, ApplicationError},
    formatting::{format_change_percent, format_usd},
    logging::LogComponent,
    market_data::{ChartMetric, RandomSource, SeriesGenerator, SeriesPreset, SeriesSet, Timeframe},
};

/// Figures shown above a dashboard chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    pub timeframe: Timeframe,
    pub last_price: String,
    pub change: String,
    pub low: String,
    pub high: String,
    pub is_up: bool,
}

/// Application service that feeds generated data to dashboard charts
pub struct ChartDataService;

impl ChartDataService {
    pub fn new() -> Self {
        Self
    }

    /// Series for one dashboard card, tuned by its preset.
    pub fn generate_preset<R>(&self, preset: SeriesPreset, rng: &mut R) -> SeriesSet
    where
        R: RandomSource + ?Sized,
    {
        crate::log_debug!(
            LogComponent::Application("ChartService"),
            "📊 Generating {} series (base {}, vol {})",
            preset,
            preset.base_price(),
            preset.volatility()
        );
        SeriesGenerator::new(preset.options()).generate_with(
            preset.base_price(),
            preset.volatility(),
            rng,
        )
    }

    /// Values plotted for `metric`. Metrics absent from the series read as 0.
    pub fn chart_points(
        &self,
        set: &SeriesSet,
        timeframe: Timeframe,
        metric: ChartMetric,
    ) -> AppResult<Vec<f64>> {
        let points = set
            .get(timeframe)
            .ok_or_else(|| ApplicationError::MissingTimeframe(timeframe.to_string()))?;

        if metric.needs_derived_metrics() && points.iter().any(|p| p.metrics.is_none()) {
            crate::log_warn!(
                LogComponent::Application("ChartService"),
                "⚠️ {} requested on a series without derived metrics",
                metric
            );
        }

        Ok(points
            .iter()
            .map(|point| point.metric_value(metric).unwrap_or(0.0))
            .collect())
    }

    pub fn summary(&self, set: &SeriesSet, timeframe: Timeframe) -> Option<ChartSummary> {
        let last = set.get(timeframe)?.last()?;
        let (low, high) = set.price_range(timeframe)?;
        let change = set.change_percent(timeframe)?;
        Some(ChartSummary {
            timeframe,
            last_price: format_usd(round_cents(last.ohlcv.close.value())),
            change: format_change_percent(change),
            low: format_usd(round_cents(low.value())),
            high: format_usd(round_cents(high.value())),
            is_up: change >= 0.0,
        })
    }
}

impl Default for ChartDataService {
    fn default() -> Self {
        Self::new()
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::SeededRandom;

    #[test]
    fn carbon_preset_exposes_verification() {
        let service = ChartDataService::new();
        let set = service.generate_preset(SeriesPreset::CarbonCredits, &mut SeededRandom::new(5));
        let ratios = service
            .chart_points(&set, Timeframe::OneMonth, ChartMetric::Verification)
            .unwrap();
        assert_eq!(ratios.len(), 30);
        assert!(ratios.iter().all(|r| (0.0..=1.0).contains(r)));
    }

    #[test]
    fn missing_timeframe_is_an_error() {
        let service = ChartDataService::new();
        let err = service
            .chart_points(&SeriesSet::new(), Timeframe::OneDay, ChartMetric::Price)
            .unwrap_err();
        assert_eq!(err.to_string(), "Application Error: Timeframe 1D missing from series");
    }

    #[test]
    fn summary_reports_direction() {
        let service = ChartDataService::new();
        let set = service.generate_preset(SeriesPreset::Commodity, &mut SeededRandom::new(8));
        let summary = service.summary(&set, Timeframe::OneYear).unwrap();
        assert!(summary.last_price.starts_with('$'));
        assert_eq!(summary.is_up, !summary.change.starts_with('-'));
    }
}
