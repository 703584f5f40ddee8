use common::Money;
use serde::{Deserialize, Serialize};

use super::Priced;

/// A bottled drink. Each millilitre adds one cent to the base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    name: String,
    base_price: Money,
    volume_ml: u32,
    is_carbonated: bool,
}

impl Drink {
    pub fn new(
        name: impl Into<String>,
        base_price: Money,
        volume_ml: u32,
        is_carbonated: bool,
    ) -> Self {
        Self {
            name: name.into(),
            base_price,
            volume_ml,
            is_carbonated,
        }
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn volume_ml(&self) -> u32 {
        self.volume_ml
    }

    pub fn is_carbonated(&self) -> bool {
        self.is_carbonated
    }
}

impl Priced for Drink {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.base_price + Money::from_cents(i64::from(self.volume_ml))
    }
}

impl std::fmt::Display for Drink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fizz = if self.is_carbonated {
            "Carbonated"
        } else {
            "Still"
        };
        write!(
            f,
            "Drink: {} | {}ml | {} | Price: {}",
            self.name,
            self.volume_ml,
            fizz,
            self.price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_adds_volume_surcharge() {
        let coke = Drink::new("Coke", Money::from_units(100), 500, true);
        assert_eq!(coke.price(), Money::from_units(105));

        let water = Drink::new("Water", Money::from_units(50), 500, false);
        assert_eq!(water.price(), Money::from_units(55));
    }

    #[test]
    fn test_odd_volume_prices_in_cents() {
        let shot = Drink::new("Espresso", Money::from_units(80), 33, false);
        assert_eq!(shot.price(), Money::from_cents(8033));
        assert_eq!(shot.price().to_string(), "80.33");
    }

    #[test]
    fn test_display() {
        let water = Drink::new("Water", Money::from_units(50), 500, false);
        assert_eq!(water.to_string(), "Drink: Water | 500ml | Still | Price: 55");
    }
}
