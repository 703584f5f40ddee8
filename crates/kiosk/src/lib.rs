//! Interactive console ordering for the pizzeria simulator.
//!
//! Shows the menu board, runs an [`OrderSession`] over the customer's input,
//! and prints the receipt. Logging goes through `tracing`; console output is
//! written only to the supplied writer.

pub mod board;
pub mod command;
pub mod config;
pub mod error;
pub mod input;
pub mod session;

use std::io::{BufRead, Write};

use menu::{Catalog, Order, Receipt};

pub use command::{Command, CommandError};
pub use config::{Config, LogFormat};
pub use error::KioskError;
pub use session::{OrderSession, SessionState};

/// Runs one complete ordering session: banner, menu, order loop, receipt.
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: R,
    mut out: W,
    config: &Config,
) -> error::Result<Order> {
    board::write_banner(&mut out)?;
    board::write_menu(&mut out, catalog)?;

    let (order, mut out) = OrderSession::new(catalog, input, out).run()?;

    Receipt::from_order(&order).write_to(&mut out, &config.currency)?;
    Ok(order)
}
