//! Receipt rendering.

use std::io::{self, Write};

use common::Money;

use crate::order::Order;

/// A printed summary of a finished order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    lines: Vec<String>,
    total: Money,
}

impl Receipt {
    /// Captures each item's summary line and the order total.
    pub fn from_order(order: &Order) -> Self {
        Self {
            lines: order.items().iter().map(ToString::to_string).collect(),
            total: order.total(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Writes the receipt, ending with `Total: <amount> <currency>`.
    pub fn write_to<W: Write>(&self, out: &mut W, currency: &str) -> io::Result<()> {
        writeln!(out, "\n=== Your Order ===")?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "Total: {} {currency}", self.total)?;
        out.flush()
    }
}
