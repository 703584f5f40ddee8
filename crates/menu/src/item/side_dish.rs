use common::Money;
use serde::{Deserialize, Serialize};

use super::Priced;

/// A side dish. The portion label is informational; the price is flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideDish {
    name: String,
    base_price: Money,
    portion_size: String,
}

impl SideDish {
    pub fn new(name: impl Into<String>, base_price: Money, portion_size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_price,
            portion_size: portion_size.into(),
        }
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn portion_size(&self) -> &str {
        &self.portion_size
    }
}

impl Priced for SideDish {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.base_price
    }
}

impl std::fmt::Display for SideDish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Side Dish: {} | Portion: {} | Price: {}",
            self.name,
            self.portion_size,
            self.price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_ignores_portion_label() {
        for portion in ["Small", "Medium", "Large", ""] {
            let fries = SideDish::new("Fries", Money::from_units(150), portion);
            assert_eq!(fries.price(), Money::from_units(150));
        }
    }

    #[test]
    fn test_display() {
        let fries = SideDish::new("Fries", Money::from_units(150), "Medium");
        assert_eq!(
            fries.to_string(),
            "Side Dish: Fries | Portion: Medium | Price: 150"
        );
    }
}
