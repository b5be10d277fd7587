//! The demonstration: two local cells, one exchange.

use cellswap_core::Cell;
use tracing::{debug, info};

/// Initial values of the two demonstration cells.
#[derive(Debug, Clone, Copy)]
pub struct DemoOptions {
    /// Initial value of the first cell
    pub first: i32,
    /// Initial value of the second cell
    pub second: i32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        DemoOptions {
            first: 100,
            second: 200,
        }
    }
}

/// Cell values after the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOutcome {
    /// First cell, holding the second's initial value
    pub first: Cell,
    /// Second cell, holding the first's initial value
    pub second: Cell,
}

impl DemoOutcome {
    /// Process exit status for this outcome: the first cell's value.
    pub fn exit_status(&self) -> u8 {
        exit_status(self.first.get())
    }
}

/// Create both cells, exchange them once, and return what they hold.
pub fn run(options: DemoOptions) -> DemoOutcome {
    let mut m = Cell::new(options.first);
    let mut n = Cell::new(options.second);
    debug!(%m, %n, "before exchange");

    m.exchange_with(&mut n);

    info!(%m, %n, "after exchange");
    DemoOutcome { first: m, second: n }
}

/// Truncate `value` to the low 8 bits a POSIX host keeps of an exit status.
pub fn exit_status(value: i32) -> u8 {
    (value & 0xff) as u8
}
