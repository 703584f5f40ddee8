//! Purchasable item variants and their shared pricing capability.

mod drink;
mod pizza;
mod side_dish;
mod topping;

pub use drink::Drink;
pub use pizza::{BaseType, Pizza, PizzaSize};
pub use side_dish::SideDish;
pub use topping::Topping;

use common::Money;
use serde::{Deserialize, Serialize};

/// Something with a name and a price that can be printed on a receipt.
///
/// `Display` renders the one-line summary, computed price included.
pub trait Priced: std::fmt::Display {
    /// Returns the item's name as shown on the menu.
    fn name(&self) -> &str;

    /// Computes the item's current price. Must be pure.
    fn price(&self) -> Money;
}

/// The three kinds of purchasable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Pizza,
    Drink,
    SideDish,
}

impl ItemKind {
    /// All kinds, in menu order.
    pub const ALL: [ItemKind; 3] = [ItemKind::Pizza, ItemKind::Drink, ItemKind::SideDish];

    /// Returns the letter used for this kind in item codes (`P0`, `D1`, ...).
    pub fn code(&self) -> char {
        match self {
            ItemKind::Pizza => 'P',
            ItemKind::Drink => 'D',
            ItemKind::SideDish => 'S',
        }
    }

    /// Looks up a kind by its code letter. Case-sensitive.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'P' => Some(ItemKind::Pizza),
            'D' => Some(ItemKind::Drink),
            'S' => Some(ItemKind::SideDish),
            _ => None,
        }
    }

    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Pizza => "Pizza",
            ItemKind::Drink => "Drink",
            ItemKind::SideDish => "Side Dish",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A concrete menu item of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItem {
    Pizza(Pizza),
    Drink(Drink),
    SideDish(SideDish),
}

impl MenuItem {
    /// Returns which kind of item this is.
    pub fn kind(&self) -> ItemKind {
        match self {
            MenuItem::Pizza(_) => ItemKind::Pizza,
            MenuItem::Drink(_) => ItemKind::Drink,
            MenuItem::SideDish(_) => ItemKind::SideDish,
        }
    }

    fn as_priced(&self) -> &dyn Priced {
        match self {
            MenuItem::Pizza(pizza) => pizza,
            MenuItem::Drink(drink) => drink,
            MenuItem::SideDish(side) => side,
        }
    }
}

impl Priced for MenuItem {
    fn name(&self) -> &str {
        self.as_priced().name()
    }

    fn price(&self) -> Money {
        self.as_priced().price()
    }
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.as_priced(), f)
    }
}

impl From<Pizza> for MenuItem {
    fn from(pizza: Pizza) -> Self {
        MenuItem::Pizza(pizza)
    }
}

impl From<Drink> for MenuItem {
    fn from(drink: Drink) -> Self {
        MenuItem::Drink(drink)
    }
}

impl From<SideDish> for MenuItem {
    fn from(side: SideDish) -> Self {
        MenuItem::SideDish(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_kind_code_is_case_sensitive() {
        assert_eq!(ItemKind::from_code('p'), None);
        assert_eq!(ItemKind::from_code('X'), None);
    }

    #[test]
    fn test_menu_item_delegates_to_variant() {
        let item = MenuItem::from(Drink::new("Coke", Money::from_units(100), 500, true));
        assert_eq!(item.kind(), ItemKind::Drink);
        assert_eq!(item.name(), "Coke");
        assert_eq!(item.price(), Money::from_units(105));
        assert_eq!(item.to_string(), "Drink: Coke | 500ml | Carbonated | Price: 105");
    }

    #[test]
    fn test_menu_item_serialization() {
        let item = MenuItem::from(SideDish::new("Fries", Money::from_units(150), "Medium"));
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
