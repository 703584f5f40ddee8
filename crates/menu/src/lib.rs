//! Menu layer for the pizzeria simulator.
//!
//! This crate provides:
//! - The item variant model (`Pizza`, `Drink`, `SideDish`) and its pricing rules
//! - The read-only `Catalog` of item templates and toppings
//! - The append-only `Order` of finalized items
//! - The `Receipt` rendered once ordering is done

pub mod catalog;
pub mod error;
pub mod item;
pub mod order;
pub mod receipt;

pub use catalog::Catalog;
pub use common::Money;
pub use error::MenuError;
pub use item::{BaseType, Drink, ItemKind, MenuItem, Pizza, PizzaSize, Priced, SideDish, Topping};
pub use order::Order;
pub use receipt::Receipt;
