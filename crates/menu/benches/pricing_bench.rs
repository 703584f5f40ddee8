use criterion::{Criterion, criterion_group, criterion_main};
use menu::{Catalog, ItemKind, Order, PizzaSize, Priced, Receipt};

fn loaded_pizza_order(catalog: &Catalog, pizzas: usize) -> Order {
    let mut order = Order::new();
    for _ in 0..pizzas {
        let mut pizza = catalog.pizza(0).unwrap();
        pizza.set_size(PizzaSize::Large);
        for index in 0..catalog.topping_count() {
            pizza.add_topping(catalog.topping(index).unwrap());
        }
        order.add(pizza);
    }
    order
}

fn bench_pizza_price(c: &mut Criterion) {
    let catalog = Catalog::default();
    let mut pizza = catalog.pizza(0).unwrap();
    for index in 0..catalog.topping_count() {
        pizza.add_topping(catalog.topping(index).unwrap());
    }

    c.bench_function("menu/pizza_price", |b| {
        b.iter(|| std::hint::black_box(&pizza).price());
    });
}

fn bench_catalog_copy(c: &mut Criterion) {
    let catalog = Catalog::default();

    c.bench_function("menu/catalog_get", |b| {
        b.iter(|| catalog.get(ItemKind::Drink, 1).unwrap());
    });
}

fn bench_receipt(c: &mut Criterion) {
    let catalog = Catalog::default();
    let order = loaded_pizza_order(&catalog, 100);

    c.bench_function("menu/receipt_100_pizzas", |b| {
        b.iter(|| {
            let receipt = Receipt::from_order(&order);
            let mut out = Vec::with_capacity(8 * 1024);
            receipt.write_to(&mut out, "T").unwrap();
            out
        });
    });
}

criterion_group!(benches, bench_pizza_price, bench_catalog_copy, bench_receipt);
criterion_main!(benches);
