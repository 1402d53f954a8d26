//! Browser-backed implementations of the domain abstractions.

pub mod services;

pub use services::*;
