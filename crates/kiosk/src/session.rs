//! Interactive order composition.

use std::io::{BufRead, Write};

use menu::{Catalog, ItemKind, MenuItem, Order, Pizza, PizzaSize, Priced};

use crate::board;
use crate::command::Command;
use crate::error::Result;
use crate::input::TokenReader;

pub const ITEM_PROMPT: &str = "Enter item code (e.g., P0, D1, S0), or 'done': ";
pub const SIZE_PROMPT: &str = "Choose size (1=Small, 2=Medium, 3=Large): ";
pub const TOPPINGS_PROMPT: &str = "Add toppings? (y/n): ";
pub const TOPPING_INDEX_PROMPT: &str = "Enter topping indexes separated by space (end with -1): ";

/// Ends the topping list.
const TOPPING_SENTINEL: i64 = -1;

/// Where the session is in its lifecycle.
///
/// ```text
/// Idle ──(done | end of input)──► Finalizing
///  ▲  │
///  └──┘ item code (valid or not)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the next item code.
    #[default]
    Idle,

    /// Ordering is over; no more input is read (terminal state).
    Finalizing,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Finalizing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Finalizing => "Finalizing",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reads item codes and customizations from `input` and builds up an order.
///
/// The catalog is only read; every ordered item is a customized copy of a
/// template.
pub struct OrderSession<'a, R, W> {
    catalog: &'a Catalog,
    input: TokenReader<R>,
    out: W,
    order: Order,
    state: SessionState,
}

impl<'a, R: BufRead, W: Write> OrderSession<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, out: W) -> Self {
        Self {
            catalog,
            input: TokenReader::new(input),
            out,
            order: Order::new(),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Runs until `done` or end of input and returns the finished order
    /// together with the output sink.
    #[tracing::instrument(skip_all)]
    pub fn run(mut self) -> Result<(Order, W)> {
        while !self.state.is_terminal() {
            self.step()?;
        }

        tracing::info!(
            items = self.order.len(),
            total = %self.order.total(),
            "order finalized"
        );
        Ok((self.order, self.out))
    }

    /// Handles one item code. Returns the state afterwards.
    pub fn step(&mut self) -> Result<SessionState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        self.prompt(&format!("\n{ITEM_PROMPT}"))?;
        let Some(token) = self.input.next_token()? else {
            tracing::debug!("input exhausted, finalizing order");
            return Ok(self.finish());
        };

        match token.parse::<Command>() {
            Ok(Command::Done) => {
                self.finish();
            }
            Ok(Command::Select { kind, index }) => self.select(kind, index)?,
            Err(err) => {
                tracing::debug!(%token, error = %err, "rejected item code");
                self.reject()?;
            }
        }

        Ok(self.state)
    }

    fn select(&mut self, kind: ItemKind, index: usize) -> Result<()> {
        let item = match self.catalog.get(kind, index) {
            Ok(item) => item,
            Err(err) => {
                tracing::debug!(error = %err, "rejected item selection");
                return self.reject();
            }
        };

        let item = match item {
            MenuItem::Pizza(pizza) => match self.customize_pizza(pizza)? {
                Some(pizza) => MenuItem::Pizza(pizza),
                None => {
                    tracing::debug!("input ended during pizza customization, discarding it");
                    self.finish();
                    return Ok(());
                }
            },
            other => other,
        };

        self.add_to_order(item);
        Ok(())
    }

    /// Asks for size and toppings. `None` means input ran out before the
    /// size or the yes/no answer was given; running out inside the topping
    /// list keeps the toppings read so far.
    fn customize_pizza(&mut self, mut pizza: Pizza) -> Result<Option<Pizza>> {
        let Some(size) = self.read_size()? else {
            return Ok(None);
        };
        pizza.set_size(size);

        self.prompt(TOPPINGS_PROMPT)?;
        let Some(answer) = self.input.next_token()? else {
            return Ok(None);
        };
        if !answer.starts_with(['y', 'Y']) {
            return Ok(Some(pizza));
        }

        board::write_toppings(&mut self.out, self.catalog)?;
        self.prompt(TOPPING_INDEX_PROMPT)?;
        loop {
            let Some(token) = self.input.next_token()? else {
                tracing::debug!("input ended inside topping list");
                break;
            };
            let Ok(index) = token.parse::<i64>() else {
                tracing::debug!(%token, "skipped non-numeric topping index");
                continue;
            };
            if index == TOPPING_SENTINEL {
                break;
            }

            // Out-of-range toppings are skipped without telling the customer.
            let topping = usize::try_from(index)
                .ok()
                .map(|index| self.catalog.topping(index));
            match topping {
                Some(Ok(topping)) => pizza.add_topping(topping),
                Some(Err(err)) => tracing::debug!(error = %err, "skipped topping"),
                None => tracing::debug!(index, "skipped negative topping index"),
            }
        }

        Ok(Some(pizza))
    }

    /// Re-prompts until a size in 1..=3 is entered.
    fn read_size(&mut self) -> Result<Option<PizzaSize>> {
        loop {
            self.prompt(SIZE_PROMPT)?;
            let Some(token) = self.input.next_token()? else {
                return Ok(None);
            };

            match token.parse::<i64>().ok().and_then(PizzaSize::from_choice) {
                Some(size) => return Ok(Some(size)),
                None => {
                    tracing::debug!(%token, "rejected size choice");
                    writeln!(self.out, "Invalid size.")?;
                }
            }
        }
    }

    fn add_to_order(&mut self, item: MenuItem) {
        let kind = item.kind();
        tracing::info!(
            kind = kind.as_str(),
            name = item.name(),
            price = %item.price(),
            "item added to order"
        );
        metrics::counter!("kiosk_items_ordered_total", "kind" => kind.as_str()).increment(1);
        self.order.add(item);
    }

    fn reject(&mut self) -> Result<()> {
        writeln!(self.out, "Invalid input.")?;
        Ok(())
    }

    fn finish(&mut self) -> SessionState {
        self.state = SessionState::Finalizing;
        self.state
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}
