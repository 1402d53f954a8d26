use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::IntoEnumIterator;

use super::entities::{DerivedMetrics, SeriesPoint, SeriesSet};
use super::random::{RandomSource, ThreadRandom};
use super::value_objects::{OHLCV, Price, Timeframe, TrendMode, Volume};
use crate::domain::logging::LogComponent;

/// Non-positive or non-finite base prices are clamped up to this value.
pub const MIN_BASE_PRICE: f64 = 0.01;
/// Generated prices never drop below this share of the base price.
pub const PRICE_FLOOR_RATIO: f64 = 0.01;
/// Open/close spread as a share of `base * volatility`.
const SPREAD_RATIO: f64 = 0.2;
/// Maximum wick length as a share of `base * volatility`.
const WICK_RATIO: f64 = 0.1;
/// Volume units behind one counted project.
const VOLUME_PER_PROJECT: f64 = 100.0;
const BASE_VERIFICATION: f64 = 0.85;

/// Per call-site tuning of the generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesOptions {
    /// Weight of the sinusoidal component (k1)
    pub cyclical_weight: f64,
    /// Weight of the uniform noise component (k2)
    pub noise_weight: f64,
    pub trend: TrendMode,
    pub volume_base: f64,
    pub with_metrics: bool,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            cyclical_weight: 0.15,
            noise_weight: 1.0,
            trend: TrendMode::Up,
            volume_base: 1_000.0,
            with_metrics: false,
        }
    }
}

/// Generator of placeholder chart data.
///
/// For period `i` of `n`:
/// `price = base + sin(i/n * cycles * PI) * base * vol * k1
///        + (u - 0.5) * base * vol * k2 + i/n * trend * base * direction`
#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    options: SeriesOptions,
}

impl SeriesGenerator {
    pub fn new(options: SeriesOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SeriesOptions {
        &self.options
    }

    /// All four timeframes from the given random source.
    pub fn generate_with<R>(&self, base_price: f64, volatility: f64, rng: &mut R) -> SeriesSet
    where
        R: RandomSource + ?Sized,
    {
        let mut set = SeriesSet::new();
        for timeframe in Timeframe::iter() {
            set.insert(timeframe, self.generate_timeframe(base_price, volatility, timeframe, rng));
        }
        crate::log_debug!(
            LogComponent::Domain("SeriesGenerator"),
            "📈 Generated {} timeframes around ${:.2} (vol {:.2})",
            set.len(),
            base_price,
            volatility
        );
        set
    }

    /// One timeframe, oldest period first.
    pub fn generate_timeframe<R>(
        &self,
        base_price: f64,
        volatility: f64,
        timeframe: Timeframe,
        rng: &mut R,
    ) -> Vec<SeriesPoint>
    where
        R: RandomSource + ?Sized,
    {
        let base = sanitize_base_price(base_price);
        let vol = sanitize_volatility(volatility);
        let profile = timeframe.profile();
        let amplitude = base * vol;
        let floor = base * PRICE_FLOOR_RATIO;
        let direction = self.trend_direction(rng);

        (0..profile.points)
            .map(|i| {
                let progress = i as f64 / profile.points as f64;
                let wave = (progress * profile.cycles * PI).sin();

                let cyclical = wave * amplitude * self.options.cyclical_weight;
                let random = rng.centered() * amplitude * self.options.noise_weight;
                let trend = progress * profile.trend_magnitude * base * direction;
                let price = (base + cyclical + random + trend).max(floor);

                let ohlcv = self.build_ohlcv(price, amplitude, floor, wave, rng);
                let point = SeriesPoint::new(i, Price::from(price), ohlcv);

                if self.options.with_metrics {
                    let metrics = derive_metrics(price, ohlcv.volume.value(), base, rng);
                    point.with_metrics(metrics)
                } else {
                    point
                }
            })
            .collect()
    }

    fn trend_direction<R>(&self, rng: &mut R) -> f64
    where
        R: RandomSource + ?Sized,
    {
        match self.options.trend {
            TrendMode::Up => 1.0,
            TrendMode::Down => -1.0,
            TrendMode::Random => {
                if rng.coin() {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }

    fn build_ohlcv<R>(&self, price: f64, amplitude: f64, floor: f64, wave: f64, rng: &mut R) -> OHLCV
    where
        R: RandomSource + ?Sized,
    {
        // open and close sit on opposite sides of the price
        let half_spread = rng.next_unit() * amplitude * SPREAD_RATIO / 2.0;
        let (open, close) = if rng.coin() {
            (price - half_spread, price + half_spread)
        } else {
            (price + half_spread, price - half_spread)
        };
        let (open, close) = (open.max(floor), close.max(floor));

        let wick = amplitude * WICK_RATIO;
        let high = open.max(close) + rng.next_unit() * wick;
        let low = (open.min(close) - rng.next_unit() * wick).max(0.0);

        let volume = self.options.volume_base.max(0.0)
            * (0.5 + rng.next_unit())
            * (1.0 + 0.5 * wave.abs());

        OHLCV::new(
            Price::from(open),
            Price::from(high),
            Price::from(low),
            Price::from(close),
            Volume::from(volume),
        )
    }
}

fn derive_metrics<R>(price: f64, volume: f64, base: f64, rng: &mut R) -> DerivedMetrics
where
    R: RandomSource + ?Sized,
{
    let deviation = (price - base) / base;
    DerivedMetrics {
        trading_volume: volume * price,
        project_count: (volume / VOLUME_PER_PROJECT).round().max(0.0) as u32,
        offset_demand: volume * (0.8 + 0.4 * rng.next_unit()),
        verification_ratio: (BASE_VERIFICATION + deviation * 0.5 + rng.centered() * 0.05)
            .clamp(0.0, 1.0),
    }
}

/// Clamps the base price into the positive range, logging the fix-up.
pub fn sanitize_base_price(base_price: f64) -> f64 {
    if base_price.is_finite() && base_price >= MIN_BASE_PRICE {
        return base_price;
    }
    crate::log_warn!(
        LogComponent::Domain("SeriesGenerator"),
        "⚠️ Base price {} clamped to {}",
        base_price,
        MIN_BASE_PRICE
    );
    MIN_BASE_PRICE
}

/// Negative, NaN or infinite volatility collapses to zero amplitude.
/// Large finite factors are kept as given.
pub fn sanitize_volatility(volatility: f64) -> f64 {
    if volatility.is_finite() && volatility >= 0.0 {
        return volatility;
    }
    crate::log_warn!(
        LogComponent::Domain("SeriesGenerator"),
        "⚠️ Volatility {} treated as 0",
        volatility
    );
    0.0
}

/// Generates all timeframes with default options and a thread-local source.
pub fn generate_series(base_price: f64, volatility: f64) -> SeriesSet {
    SeriesGenerator::default().generate_with(base_price, volatility, &mut ThreadRandom::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::random::SeededRandom;

    #[test]
    fn zero_volatility_is_pure_trend() {
        let generator = SeriesGenerator::default();
        let points =
            generator.generate_timeframe(100.0, 0.0, Timeframe::OneWeek, &mut SeededRandom::new(1));
        assert_eq!(points.len(), 7);
        for point in &points {
            let expected = 100.0 + point.index as f64 / 7.0 * 0.05 * 100.0;
            assert!((point.price.value() - expected).abs() < 1e-9);
            assert_eq!(point.ohlcv.open, point.ohlcv.close);
            assert_eq!(point.ohlcv.low, point.ohlcv.high);
        }
    }

    #[test]
    fn down_trend_ends_below_base() {
        let generator = SeriesGenerator::new(SeriesOptions { trend: TrendMode::Down, ..Default::default() });
        let points =
            generator.generate_timeframe(100.0, 0.0, Timeframe::OneYear, &mut SeededRandom::new(3));
        assert!(points.last().unwrap().price.value() < 100.0);
    }

    #[test]
    fn degenerate_inputs_are_clamped() {
        assert_eq!(sanitize_base_price(-5.0), MIN_BASE_PRICE);
        assert_eq!(sanitize_base_price(f64::NAN), MIN_BASE_PRICE);
        assert_eq!(sanitize_base_price(42.0), 42.0);
        assert_eq!(sanitize_volatility(3.0), 3.0);
        assert_eq!(sanitize_volatility(-0.2), 0.0);
        assert_eq!(sanitize_volatility(f64::NAN), 0.0);
        assert_eq!(sanitize_volatility(f64::INFINITY), 0.0);
    }

    #[test]
    fn metrics_only_when_requested() {
        let mut rng = SeededRandom::new(11);
        let plain = SeriesGenerator::default().generate_with(50.0, 0.1, &mut rng);
        assert!(plain.iter().all(|(_, pts)| pts.iter().all(|p| p.metrics.is_none())));

        let rich = SeriesGenerator::new(SeriesOptions { with_metrics: true, ..Default::default() })
            .generate_with(50.0, 0.1, &mut rng);
        assert!(rich.iter().all(|(_, pts)| pts.iter().all(|p| p.metrics.is_some())));
    }
}
