use common::Money;
use serde::{Deserialize, Serialize};

use super::{Priced, Topping};

/// Pizza size. Scales the whole pizza price, toppings included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PizzaSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PizzaSize {
    /// Maps the menu choice `1`/`2`/`3` to a size. Anything else is `None`.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(PizzaSize::Small),
            2 => Some(PizzaSize::Medium),
            3 => Some(PizzaSize::Large),
            _ => None,
        }
    }

    /// Price multiplier as a percentage.
    pub fn percent(&self) -> u32 {
        match self {
            PizzaSize::Small => 90,
            PizzaSize::Medium => 100,
            PizzaSize::Large => 120,
        }
    }

    /// Returns the size name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        }
    }
}

impl std::fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dough style. Does not affect price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BaseType {
    Thin,
    #[default]
    Traditional,
    Thick,
}

/// A pizza with its size and chosen toppings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    name: String,
    base_price: Money,
    size: PizzaSize,
    base_type: BaseType,
    toppings: Vec<Topping>,
}

impl Pizza {
    /// Creates a medium, traditional-base pizza with no toppings.
    pub fn new(name: impl Into<String>, base_price: Money) -> Self {
        Self {
            name: name.into(),
            base_price,
            size: PizzaSize::default(),
            base_type: BaseType::default(),
            toppings: Vec::new(),
        }
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn size(&self) -> PizzaSize {
        self.size
    }

    pub fn base_type(&self) -> BaseType {
        self.base_type
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn set_size(&mut self, size: PizzaSize) {
        self.size = size;
    }

    pub fn set_base_type(&mut self, base_type: BaseType) {
        self.base_type = base_type;
    }

    /// Appends a topping. The same topping may be added more than once.
    pub fn add_topping(&mut self, topping: Topping) {
        self.toppings.push(topping);
    }
}

impl Priced for Pizza {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        let unscaled = self.base_price + self.toppings.iter().map(Topping::price).sum::<Money>();
        unscaled.scale_percent(self.size.percent())
    }
}

/// Every topping name is followed by a space, so a plain pizza renders as
/// `Toppings: | Price: 400`.
impl std::fmt::Display for Pizza {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pizza: {} | Size: {} | Toppings: ", self.name, self.size)?;
        for topping in &self.toppings {
            write!(f, "{} ", topping.name())?;
        }
        write!(f, "| Price: {}", self.price())
    }
}
