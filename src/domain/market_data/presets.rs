use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use super::services::SeriesOptions;
use super::value_objects::TrendMode;

/// Dashboard charts that render generated data, each with its own tuning
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SeriesPreset {
    /// Gold-backed token price card
    Commodity,
    RealEstate,
    CarbonCredits,
    Mining,
    ArtIndex,
}

impl SeriesPreset {
    pub fn base_price(&self) -> f64 {
        match self {
            SeriesPreset::Commodity => 1_880.0,
            SeriesPreset::RealEstate => 250.0,
            SeriesPreset::CarbonCredits => 42.5,
            SeriesPreset::Mining => 3.2,
            SeriesPreset::ArtIndex => 1_000.0,
        }
    }

    pub fn volatility(&self) -> f64 {
        match self {
            SeriesPreset::Commodity => 0.05,
            SeriesPreset::RealEstate => 0.03,
            SeriesPreset::CarbonCredits => 0.12,
            SeriesPreset::Mining => 0.25,
            SeriesPreset::ArtIndex => 0.45,
        }
    }

    pub fn options(&self) -> SeriesOptions {
        let defaults = SeriesOptions::default();
        match self {
            SeriesPreset::Commodity => defaults,
            SeriesPreset::RealEstate => SeriesOptions { cyclical_weight: 0.1, ..defaults },
            SeriesPreset::CarbonCredits => SeriesOptions {
                cyclical_weight: 0.2,
                volume_base: 5_000.0,
                with_metrics: true,
                ..defaults
            },
            SeriesPreset::Mining => SeriesOptions {
                cyclical_weight: 0.2,
                trend: TrendMode::Random,
                volume_base: 2_500.0,
                with_metrics: true,
                ..defaults
            },
            SeriesPreset::ArtIndex => SeriesOptions {
                noise_weight: 0.5,
                trend: TrendMode::Random,
                volume_base: 120.0,
                ..defaults
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn presets_stay_in_documented_volatility_band() {
        for preset in SeriesPreset::iter() {
            let vol = preset.volatility();
            assert!((0.03..=0.45).contains(&vol), "{preset} vol {vol}");
            assert!(preset.base_price() > 0.0);
        }
        assert_eq!("carbon-credits".parse::<SeriesPreset>(), Ok(SeriesPreset::CarbonCredits));
    }
}
