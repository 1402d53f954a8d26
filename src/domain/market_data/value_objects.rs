use derive_more::{Constructor, Deref, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - price in USD
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - traded volume
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - OHLCV data of one period
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct OHLCV {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
}

impl OHLCV {
    /// `low <= open, close <= high` and a non-negative volume
    pub fn is_valid(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.high >= self.low
            && self.low <= self.open
            && self.low <= self.close
            && self.volume.value() >= 0.0
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Shape of one chart timeframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeProfile {
    pub points: usize,
    pub trend_magnitude: f64,
    pub cycles: f64,
}

/// Value Object - chart timeframe tabs
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Timeframe {
    #[strum(serialize = "1D")]
    #[serde(rename = "1D")]
    OneDay,

    #[strum(serialize = "1W")]
    #[serde(rename = "1W")]
    OneWeek,

    #[strum(serialize = "1M")]
    #[serde(rename = "1M")]
    OneMonth,

    #[strum(serialize = "1Y")]
    #[serde(rename = "1Y")]
    OneYear,
}

impl Timeframe {
    pub const fn profile(&self) -> TimeframeProfile {
        match self {
            Self::OneDay => TimeframeProfile { points: 24, trend_magnitude: 0.02, cycles: 2.0 },
            Self::OneWeek => TimeframeProfile { points: 7, trend_magnitude: 0.05, cycles: 1.0 },
            Self::OneMonth => TimeframeProfile { points: 30, trend_magnitude: 0.1, cycles: 3.0 },
            Self::OneYear => TimeframeProfile { points: 12, trend_magnitude: 0.25, cycles: 2.0 },
        }
    }

    pub fn label(&self) -> &str {
        self.as_ref()
    }
}

/// Metric selector of the dashboard charts
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ChartMetric {
    #[default]
    Price,
    Volume,
    TradingVolume,
    ProjectCount,
    OffsetDemand,
    Verification,
}

impl ChartMetric {
    /// Metrics that only exist on series generated with derived metrics.
    pub fn needs_derived_metrics(&self) -> bool {
        match self {
            ChartMetric::Price | ChartMetric::Volume => false,
            ChartMetric::TradingVolume
            | ChartMetric::ProjectCount
            | ChartMetric::OffsetDemand
            | ChartMetric::Verification => true,
        }
    }
}

/// Direction of the linear trend, picked once per generated series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendMode {
    #[default]
    Up,
    Down,
    Random,
}
