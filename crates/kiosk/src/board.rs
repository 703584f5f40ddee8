//! Menu board printed to the customer.

use std::io::{self, Write};

use menu::{Catalog, ItemKind};

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Welcome to Pizzeria Simulator ===")
}

/// Lists every item as `<code><index>: <name>`, pizzas first, then drinks, then sides.
pub fn write_menu<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "\n--- MENU ---")?;
    for kind in ItemKind::ALL {
        for (index, name) in catalog.names(kind).enumerate() {
            writeln!(out, "{}{index}: {name}", kind.code())?;
        }
    }
    Ok(())
}

pub fn write_toppings<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "\n--- TOPPINGS ---")?;
    for (index, topping) in catalog.toppings().iter().enumerate() {
        writeln!(out, "{index}: {topping}")?;
    }
    Ok(())
}
