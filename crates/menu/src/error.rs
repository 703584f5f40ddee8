//! Menu error types.

use thiserror::Error;

use crate::item::ItemKind;

/// Errors that can occur when looking things up on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// The requested catalog entry does not exist.
    #[error("{kind} index {index} is out of range (menu has {count})")]
    IndexOutOfRange {
        kind: ItemKind,
        index: usize,
        count: usize,
    },

    /// The requested topping does not exist.
    #[error("Topping index {index} is out of range (menu has {count})")]
    ToppingOutOfRange { index: usize, count: usize },
}
