//! Layered error types. The catalog filter and the series generator are
//! total, so errors only surface at construction and at the JS boundary.

use derive_more::{Display, From};

/// Root error type for the crate
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Domain Error: {}", _0)]
    Domain(DomainError),
    #[display(fmt = "Application Error: {}", _0)]
    Application(ApplicationError),
    #[display(fmt = "Presentation Error: {}", _0)]
    Presentation(PresentationError),
}

impl std::error::Error for AppError {}

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum DomainError {
    #[display(fmt = "Validation: {}", _0)]
    Validation(ValidationError),
}

/// Validation errors raised by checked constructors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid asset {}: {}", id, reason)]
    InvalidAsset { id: u32, reason: String },
    #[display(fmt = "Unknown category: {}", _0)]
    UnknownCategory(String),
    #[display(fmt = "Unknown timeframe: {}", _0)]
    UnknownTimeframe(String),
    #[display(fmt = "Unknown chart metric: {}", _0)]
    UnknownMetric(String),
    #[display(fmt = "Unknown series preset: {}", _0)]
    UnknownPreset(String),
}

/// Application layer errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ApplicationError {
    #[display(fmt = "Timeframe {} missing from series", _0)]
    MissingTimeframe(String),
}

/// Errors crossing the WASM boundary
#[derive(Debug, Clone, PartialEq, Display)]
pub enum PresentationError {
    #[display(fmt = "Serialization failed: {}", _0)]
    SerializationFailed(String),
    #[display(fmt = "Deserialization failed: {}", _0)]
    DeserializationFailed(String),
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(error))
    }
}

pub type AppResult<T> = Result<T, AppError>;
