//! Core types for cellswap
//!
//! This crate defines the swap operation and the storage types it works on.
//! The facade crate `cellswap` re-exports everything here.
//!
//! ## Layers
//!
//! - [`exchange`] / [`exchanged`]: the unchecked operation over two `&mut`
//!   borrows. The borrow checker guarantees the two locations are distinct.
//! - [`exchange_at`]: slots of a slice addressed by index, checked at runtime.

#![warn(missing_docs)]

pub mod cell;
pub mod error;
pub mod swap;

pub use cell::Cell;
pub use error::{Error, Result};
pub use swap::{exchange, exchange_at, exchanged};
