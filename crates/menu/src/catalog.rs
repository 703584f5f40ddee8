//! Read-only catalog of item templates and toppings.

use common::Money;

use crate::error::MenuError;
use crate::item::{Drink, ItemKind, MenuItem, Pizza, Priced, SideDish, Topping};

/// The fixed menu: one list of templates per item kind plus the toppings.
///
/// Every lookup hands out an owned copy, so customizing an ordered item can
/// never change the template it came from.
#[derive(Debug, Clone)]
pub struct Catalog {
    pizzas: Vec<Pizza>,
    drinks: Vec<Drink>,
    sides: Vec<SideDish>,
    toppings: Vec<Topping>,
}

impl Catalog {
    /// Creates a catalog from explicit template lists.
    pub fn new(
        pizzas: Vec<Pizza>,
        drinks: Vec<Drink>,
        sides: Vec<SideDish>,
        toppings: Vec<Topping>,
    ) -> Self {
        Self {
            pizzas,
            drinks,
            sides,
            toppings,
        }
    }

    /// Returns how many templates of `kind` are on the menu.
    pub fn item_count(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Pizza => self.pizzas.len(),
            ItemKind::Drink => self.drinks.len(),
            ItemKind::SideDish => self.sides.len(),
        }
    }

    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// Returns a copy of the `index`th template of `kind`.
    pub fn get(&self, kind: ItemKind, index: usize) -> Result<MenuItem, MenuError> {
        match kind {
            ItemKind::Pizza => self.pizza(index).map(MenuItem::Pizza),
            ItemKind::Drink => self.drink(index).map(MenuItem::Drink),
            ItemKind::SideDish => self.side_dish(index).map(MenuItem::SideDish),
        }
    }

    pub fn pizza(&self, index: usize) -> Result<Pizza, MenuError> {
        copy_at(&self.pizzas, ItemKind::Pizza, index)
    }

    pub fn drink(&self, index: usize) -> Result<Drink, MenuError> {
        copy_at(&self.drinks, ItemKind::Drink, index)
    }

    pub fn side_dish(&self, index: usize) -> Result<SideDish, MenuError> {
        copy_at(&self.sides, ItemKind::SideDish, index)
    }

    pub fn topping(&self, index: usize) -> Result<Topping, MenuError> {
        self.toppings
            .get(index)
            .cloned()
            .ok_or(MenuError::ToppingOutOfRange {
                index,
                count: self.toppings.len(),
            })
    }

    /// Iterates over the names of every template of `kind`, in menu order.
    pub fn names(&self, kind: ItemKind) -> Box<dyn Iterator<Item = &str> + '_> {
        match kind {
            ItemKind::Pizza => Box::new(self.pizzas.iter().map(|item| item.name())),
            ItemKind::Drink => Box::new(self.drinks.iter().map(|item| item.name())),
            ItemKind::SideDish => Box::new(self.sides.iter().map(|item| item.name())),
        }
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }
}

/// The house menu.
impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            vec![Pizza::new("Pepperoni", Money::from_units(400))],
            vec![
                Drink::new("Coke", Money::from_units(100), 500, true),
                Drink::new("Water", Money::from_units(50), 500, false),
            ],
            vec![SideDish::new("Fries", Money::from_units(150), "Medium")],
            vec![
                Topping::new("Cheese", Money::from_units(50)),
                Topping::new("Mushrooms", Money::from_units(40)),
                Topping::new("Bacon", Money::from_units(60)),
            ],
        )
    }
}

fn copy_at<T: Clone>(templates: &[T], kind: ItemKind, index: usize) -> Result<T, MenuError> {
    templates
        .get(index)
        .cloned()
        .ok_or(MenuError::IndexOutOfRange {
            kind,
            index,
            count: templates.len(),
        })
}
