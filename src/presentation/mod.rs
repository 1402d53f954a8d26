//! JS bridge. Minimal logic: JSON in, JSON out, delegating to the
//! application layer.

pub mod wasm_api;

pub use wasm_api::*;
