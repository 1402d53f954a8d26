use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

use crate::domain::errors::ValidationError;

pub const ALL_CATEGORIES: &str = "All Categories";

/// Value Object - closed set of marketplace categories
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
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum AssetCategory {
    #[strum(serialize = "Real Estate")]
    #[serde(rename = "Real Estate")]
    RealEstate,

    #[strum(serialize = "Commodities")]
    #[serde(rename = "Commodities")]
    Commodities,

    #[strum(serialize = "Art")]
    #[serde(rename = "Art")]
    Art,

    #[strum(serialize = "Carbon Credits")]
    #[serde(rename = "Carbon Credits")]
    CarbonCredits,

    #[strum(serialize = "Mining")]
    #[serde(rename = "Mining")]
    Mining,

    #[strum(serialize = "Infrastructure")]
    #[serde(rename = "Infrastructure")]
    Infrastructure,
}

/// Value Object - category selector, either everything or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(AssetCategory),
}

impl CategoryFilter {
    pub fn admits(&self, category: AssetCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.as_ref(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL_CATEGORIES {
            return Ok(CategoryFilter::All);
        }
        AssetCategory::from_str(value)
            .map(CategoryFilter::Only)
            .map_err(|_| ValidationError::UnknownCategory(value.to_string()))
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

/// Value Object - result ordering selected in the marketplace toolbar
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
#[serde(from = "String", into = "String")]
pub enum SortBy {
    #[default]
    #[strum(serialize = "Latest")]
    Latest,

    #[strum(serialize = "ROI")]
    Roi,

    #[strum(serialize = "Price: Low to High")]
    PriceLowToHigh,

    #[strum(serialize = "Price: High to Low")]
    PriceHighToLow,
}

impl SortBy {
    /// Unrecognised labels fall back to `Latest`.
    pub fn from_label(label: &str) -> Self {
        SortBy::from_str(label).unwrap_or_default()
    }
}

impl From<String> for SortBy {
    fn from(value: String) -> Self {
        SortBy::from_label(&value)
    }
}

impl From<SortBy> for String {
    fn from(sort: SortBy) -> Self {
        sort.as_ref().to_string()
    }
}

/// Value Object - inclusive USD price window. An inverted window is kept
/// as-is and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const DEFAULT_MAX: f64 = 1_000_000.0;

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0.0, Self::DEFAULT_MAX)
    }
}

impl From<[f64; 2]> for PriceRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<PriceRange> for [f64; 2] {
    fn from(range: PriceRange) -> Self {
        [range.min, range.max]
    }
}

/// Value Object - expected return parsed from its display string
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum Roi {
    #[display(fmt = "{}%", _0)]
    Percent(f64),
    /// "Variable", "High Risk/Reward" and anything else without a number
    #[display(fmt = "n/a")]
    Sentinel,
}

impl Roi {
    /// Reads the number immediately before the last `%`.
    ///
    /// `"5.2%"` -> 5.2, `"8-12%"` -> 12, `"Up to 15 %"` -> 15,
    /// `"Variable"` -> `Sentinel`.
    pub fn parse(raw: &str) -> Self {
        let Some(percent_at) = raw.rfind('%') else {
            return Roi::Sentinel;
        };
        let head = raw[..percent_at].trim_end();

        let digits_start = head
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
            .last()
            .map(|(idx, _)| idx);
        let Some(mut start) = digits_start else {
            return Roi::Sentinel;
        };

        // A sign counts only when it is not a range separator ("8-12%", "10 -12%").
        if let Some(sign) = head[..start].chars().last() {
            if sign == '-' || sign == '+' {
                let before_sign = head[..start - 1].trim_end().chars().last();
                if !before_sign.is_some_and(|c| c.is_ascii_digit()) {
                    start -= 1;
                }
            }
        }

        match head[start..].parse::<f64>() {
            Ok(value) if value.is_finite() => Roi::Percent(value),
            _ => Roi::Sentinel,
        }
    }

    /// Sentinels sit strictly below every parsed percentage.
    pub fn sort_key(&self) -> f64 {
        match self {
            Roi::Percent(value) => *value,
            Roi::Sentinel => f64::NEG_INFINITY,
        }
    }

    /// Descending order used by the ROI sort; equal keys compare equal.
    pub fn cmp_descending(&self, other: &Self) -> Ordering {
        other.sort_key().total_cmp(&self.sort_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roi_parses_trailing_percentage() {
        assert_eq!(Roi::parse("5.2%"), Roi::Percent(5.2));
        assert_eq!(Roi::parse("8-12%"), Roi::Percent(12.0));
        assert_eq!(Roi::parse("Up to 15 %"), Roi::Percent(15.0));
        assert_eq!(Roi::parse("-3%"), Roi::Percent(-3.0));
        assert_eq!(Roi::parse("Yield -3%"), Roi::Percent(-3.0));
        assert_eq!(Roi::parse("Variable"), Roi::Sentinel);
        assert_eq!(Roi::parse("High Risk/Reward"), Roi::Sentinel);
        assert_eq!(Roi::parse("%"), Roi::Sentinel);
        assert_eq!(Roi::parse("."), Roi::Sentinel);
    }

    #[test]
    fn spaced_range_separator_is_not_a_sign() {
        assert_eq!(Roi::parse("10 -12%"), Roi::Percent(12.0));
        assert_eq!(Roi::parse("10 - 12%"), Roi::Percent(12.0));
        assert_eq!(Roi::parse("10 +12%"), Roi::Percent(12.0));
    }

    #[test]
    fn sentinel_sorts_below_negative_returns() {
        let negative = Roi::Percent(-50.0);
        assert_eq!(negative.cmp_descending(&Roi::Sentinel), Ordering::Less);
        assert_eq!(Roi::Sentinel.cmp_descending(&Roi::Sentinel), Ordering::Equal);
    }

    #[test]
    fn sort_labels_fall_back_to_latest() {
        assert_eq!(SortBy::from_label("ROI"), SortBy::Roi);
        assert_eq!(SortBy::from_label("Price: High to Low"), SortBy::PriceHighToLow);
        assert_eq!(SortBy::from_label("Most Popular"), SortBy::Latest);
    }

    #[test]
    fn category_filter_round_trips_through_labels() {
        assert_eq!("All Categories".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Carbon Credits".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(AssetCategory::CarbonCredits))
        );
        assert!("Stamps".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::Only(AssetCategory::Art).label(), "Art");
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let range = PriceRange::new(10.0, 5.0);
        assert!(range.is_inverted());
        assert!(!range.contains(7.0));
        assert!(PriceRange::default().contains(0.0));
    }
}
