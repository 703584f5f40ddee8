//! Shared value types used across the pizzeria crates.

pub mod money;

pub use money::Money;
