//! `rasoi-catalog` — the authoritative set of known menu items, keyed by code.

pub mod catalog;

pub use catalog::{Catalog, Item};
