//! Integration tests for pricing, catalog lookups and receipts.
//!
//! These tests go through the public API only: copy templates out of the
//! house catalog, customize them, and check what ends up on the order.

use menu::{Catalog, ItemKind, MenuError, MenuItem, Money, Order, PizzaSize, Priced, Receipt};

mod pricing {
    use super::*;

    #[test]
    fn pizza_price_scales_base_and_toppings_by_size() {
        let catalog = Catalog::default();
        let toppings = [0, 1, 2];
        let unscaled: i64 = 400 + 50 + 40 + 60;

        for (size, percent) in [
            (PizzaSize::Small, 90),
            (PizzaSize::Medium, 100),
            (PizzaSize::Large, 120),
        ] {
            let mut pizza = catalog.pizza(0).unwrap();
            pizza.set_size(size);
            for index in toppings {
                pizza.add_topping(catalog.topping(index).unwrap());
            }
            assert_eq!(pizza.price().cents(), unscaled * percent, "{size}");
        }
    }

    #[test]
    fn drink_price_is_base_plus_one_cent_per_ml() {
        let catalog = Catalog::default();
        let coke = catalog.drink(0).unwrap();
        assert_eq!(
            coke.price(),
            coke.base_price() + Money::from_cents(i64::from(coke.volume_ml()))
        );
        assert_eq!(coke.price(), Money::from_units(105));
    }

    #[test]
    fn side_dish_price_is_flat() {
        let catalog = Catalog::default();
        let fries = catalog.side_dish(0).unwrap();
        assert_eq!(fries.price(), fries.base_price());
        assert_eq!(fries.price(), Money::from_units(150));
    }
}

mod catalog_lookup {
    use super::*;

    #[test]
    fn every_in_range_index_returns_the_template() {
        let catalog = Catalog::default();
        for kind in ItemKind::ALL {
            for index in 0..catalog.item_count(kind) {
                let first = catalog.get(kind, index).unwrap();
                let second = catalog.get(kind, index).unwrap();
                assert_eq!(first.kind(), kind);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn out_of_range_index_fails_for_every_kind() {
        let catalog = Catalog::default();
        for kind in ItemKind::ALL {
            let count = catalog.item_count(kind);
            assert_eq!(
                catalog.get(kind, count),
                Err(MenuError::IndexOutOfRange {
                    kind,
                    index: count,
                    count,
                })
            );
        }
    }

    #[test]
    fn empty_catalog_rejects_everything() {
        let catalog = Catalog::new(vec![], vec![], vec![], vec![]);
        for kind in ItemKind::ALL {
            assert!(catalog.get(kind, 0).is_err());
        }
        assert!(catalog.topping(0).is_err());
    }
}

mod order_scenarios {
    use super::*;

    #[test]
    fn large_pepperoni_with_cheese_and_mushrooms() {
        let catalog = Catalog::default();
        let mut pizza = catalog.pizza(0).unwrap();
        pizza.set_size(PizzaSize::Large);
        pizza.add_topping(catalog.topping(0).unwrap());
        pizza.add_topping(catalog.topping(1).unwrap());

        let mut order = Order::new();
        order.add(pizza);

        assert_eq!(order.total(), Money::from_units(588));
    }

    #[test]
    fn mixed_order_receipt() {
        let catalog = Catalog::default();
        let mut order = Order::new();
        order.add(catalog.get(ItemKind::Drink, 0).unwrap());
        order.add(catalog.get(ItemKind::SideDish, 0).unwrap());
        order.add(catalog.get(ItemKind::Drink, 1).unwrap());

        let receipt = Receipt::from_order(&order);
        assert_eq!(receipt.lines().len(), 3);
        assert_eq!(receipt.lines()[1], "Side Dish: Fries | Portion: Medium | Price: 150");
        assert_eq!(receipt.total(), Money::from_units(105 + 150 + 55));
    }

    #[test]
    fn ordered_items_are_independent_copies() {
        let catalog = Catalog::default();
        let mut order = Order::new();

        let mut pizza = catalog.pizza(0).unwrap();
        order.add(pizza.clone());
        pizza.add_topping(catalog.topping(0).unwrap());
        order.add(pizza.clone());

        match (&order.items()[0], &order.items()[1]) {
            (MenuItem::Pizza(first), MenuItem::Pizza(second)) => {
                assert!(first.toppings().is_empty());
                assert_eq!(second.toppings().len(), 1);
            }
            other => panic!("expected two pizzas, got {other:?}"),
        }
        assert!(catalog.pizza(0).unwrap().toppings().is_empty());
    }

    #[test]
    fn order_serializes_with_its_items() {
        let catalog = Catalog::default();
        let mut order = Order::new();
        order.add(catalog.get(ItemKind::SideDish, 0).unwrap());

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["items"][0]["SideDish"]["portion_size"], "Medium");
    }
}
