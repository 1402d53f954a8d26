use serde::{Deserialize, Serialize};

use super::value_objects::{AssetCategory, CategoryFilter, PriceRange, Roi, SortBy};
use crate::domain::errors::ValidationError;

/// Domain entity - a tokenized asset listed on the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: u32,
    pub title: String,
    pub category: AssetCategory,
    pub location: String,
    pub expected_roi: String,
    pub price: f64,
    pub available_tokens: u64,
    pub total_tokens: u64,
}

impl AssetRecord {
    /// Checked constructor: price must be a non-negative number and the
    /// token supply must be positive and cover the available tokens.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: AssetCategory,
        location: impl Into<String>,
        expected_roi: impl Into<String>,
        price: f64,
        available_tokens: u64,
        total_tokens: u64,
    ) -> Result<Self, ValidationError> {
        let record = Self {
            id,
            title: title.into(),
            category,
            location: location.into(),
            expected_roi: expected_roi.into(),
            price,
            available_tokens,
            total_tokens,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let reason = if !(self.price.is_finite() && self.price >= 0.0) {
            Some(format!("price {} is not a non-negative amount", self.price))
        } else if self.total_tokens == 0 {
            Some("total token supply is zero".to_string())
        } else if self.available_tokens > self.total_tokens {
            Some(format!(
                "{} tokens available out of {}",
                self.available_tokens, self.total_tokens
            ))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ValidationError::InvalidAsset { id: self.id, reason }),
            None => Ok(()),
        }
    }

    pub fn roi(&self) -> Roi {
        Roi::parse(&self.expected_roi)
    }

    /// Share of the supply already sold, in [0, 1].
    pub fn sold_ratio(&self) -> f64 {
        if self.total_tokens == 0 {
            return 0.0;
        }
        let sold = self.total_tokens.saturating_sub(self.available_tokens);
        sold as f64 / self.total_tokens as f64
    }

    pub fn availability_percent(&self) -> f64 {
        if self.total_tokens == 0 {
            return 0.0;
        }
        self.available_tokens.min(self.total_tokens) as f64 / self.total_tokens as f64 * 100.0
    }

    /// Price of a single token in USD.
    pub fn token_price(&self) -> f64 {
        if self.total_tokens == 0 {
            return 0.0;
        }
        self.price / self.total_tokens as f64
    }
}

/// View state of the marketplace search toolbar.
///
/// Queries are values: every interaction produces a new `SearchQuery`
/// through [`SearchQuery::merged`], the previous one is never edited.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub query: String,
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    pub sort_by: SortBy,
}

/// Changed toolbar fields. `None` keeps the previous value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryPatch {
    pub query: Option<String>,
    pub category: Option<CategoryFilter>,
    pub price_range: Option<PriceRange>,
    pub sort_by: Option<SortBy>,
}

impl SearchQuery {
    pub fn new(
        query: impl Into<String>,
        category: CategoryFilter,
        price_range: PriceRange,
        sort_by: SortBy,
    ) -> Self {
        Self { query: query.into(), category, price_range, sort_by }
    }

    /// Shallow merge of `patch` over `self`, returning a fresh query.
    pub fn merged(&self, patch: QueryPatch) -> Self {
        Self {
            query: patch.query.unwrap_or_else(|| self.query.clone()),
            category: patch.category.unwrap_or(self.category),
            price_range: patch.price_range.unwrap_or(self.price_range),
            sort_by: patch.sort_by.unwrap_or(self.sort_by),
        }
    }

    pub fn with_text(&self, text: impl Into<String>) -> Self {
        self.merged(QueryPatch { query: Some(text.into()), ..Default::default() })
    }

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        self.merged(QueryPatch { category: Some(category), ..Default::default() })
    }

    pub fn with_price_range(&self, price_range: PriceRange) -> Self {
        self.merged(QueryPatch { price_range: Some(price_range), ..Default::default() })
    }

    pub fn with_sort(&self, sort_by: SortBy) -> Self {
        self.merged(QueryPatch { sort_by: Some(sort_by), ..Default::default() })
    }
}
