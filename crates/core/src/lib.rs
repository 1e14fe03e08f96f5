//! `rasoi-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod currency;
pub mod error;

pub use currency::{CURRENCY_TAG, format_amount};
pub use error::{DomainError, DomainResult};
