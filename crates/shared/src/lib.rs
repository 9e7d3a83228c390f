//! Shared types for Finsight.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::{CurrencyCode, Money};
