pub use super::value_objects::{ChartMetric, OHLCV, Price, Timeframe, Volume};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Auxiliary dashboard figures derived from a period's price and volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub trading_volume: f64,
    pub project_count: u32,
    pub offset_demand: f64,
    /// Always within [0, 1]
    pub verification_ratio: f64,
}

/// Domain entity - one generated chart period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Period offset, 0 is the oldest
    pub index: usize,
    pub price: Price,
    pub ohlcv: OHLCV,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<DerivedMetrics>,
}

impl SeriesPoint {
    pub fn new(index: usize, price: Price, ohlcv: OHLCV) -> Self {
        Self { index, price, ohlcv, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: DerivedMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Value plotted for `metric`; `None` when the point carries no
    /// derived metrics and the metric needs them.
    pub fn metric_value(&self, metric: ChartMetric) -> Option<f64> {
        match metric {
            ChartMetric::Price => Some(self.price.value()),
            ChartMetric::Volume => Some(self.ohlcv.volume.value()),
            ChartMetric::TradingVolume => self.metrics.map(|m| m.trading_volume),
            ChartMetric::ProjectCount => self.metrics.map(|m| m.project_count as f64),
            ChartMetric::OffsetDemand => self.metrics.map(|m| m.offset_demand),
            ChartMetric::Verification => self.metrics.map(|m| m.verification_ratio),
        }
    }
}

/// Domain entity - generated series for every timeframe tab
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesSet {
    series: BTreeMap<Timeframe, Vec<SeriesPoint>>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, timeframe: Timeframe, points: Vec<SeriesPoint>) {
        self.series.insert(timeframe, points);
    }

    pub fn get(&self, timeframe: Timeframe) -> Option<&[SeriesPoint]> {
        self.series.get(&timeframe).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Timeframe, &[SeriesPoint])> {
        self.series.iter().map(|(tf, points)| (*tf, points.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Lowest low and highest high of one timeframe
    pub fn price_range(&self, timeframe: Timeframe) -> Option<(Price, Price)> {
        let points = self.get(timeframe)?;
        let first = points.first()?;
        Some(points.iter().fold(
            (first.ohlcv.low, first.ohlcv.high),
            |(low, high), point| {
                (
                    if point.ohlcv.low < low { point.ohlcv.low } else { low },
                    if point.ohlcv.high > high { point.ohlcv.high } else { high },
                )
            },
        ))
    }

    /// Percent change from the first open to the last close
    pub fn change_percent(&self, timeframe: Timeframe) -> Option<f64> {
        let points = self.get(timeframe)?;
        let open = points.first()?.ohlcv.open.value();
        let close = points.last()?.ohlcv.close.value();
        if open == 0.0 {
            return None;
        }
        Some((close - open) / open * 100.0)
    }

    /// Values of `metric` across one timeframe, oldest first
    pub fn project(&self, timeframe: Timeframe, metric: ChartMetric) -> Option<Vec<f64>> {
        self.get(timeframe)?
            .iter()
            .map(|point| point.metric_value(metric))
            .collect()
    }
}
