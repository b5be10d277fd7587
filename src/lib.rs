//! # cellswap
//!
//! Exchange the values held in two integer cells.
//!
//! ## Quick Start
//!
//! ```
//! use cellswap::prelude::*;
//!
//! let mut m = Cell::new(100);
//! let mut n = Cell::new(200);
//! m.exchange_with(&mut n);
//! assert_eq!((m.get(), n.get()), (200, 100));
//!
//! // Plain locals work the same way
//! let (mut a, mut b) = (-5, 5);
//! exchange(&mut a, &mut b);
//! assert_eq!((a, b), (5, -5));
//! ```
//!
//! ## Aliasing
//!
//! [`exchange`] borrows both locations mutably, so passing the same location
//! twice does not compile. [`exchange_at`] addresses slots by index and
//! returns [`Error::Aliased`] instead.

#![warn(missing_docs)]

pub mod prelude;

pub use cellswap_core::{exchange, exchange_at, exchanged, Cell, Error, Result};
