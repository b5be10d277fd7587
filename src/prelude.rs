//! Convenient imports for cellswap.
//!
//! ```
//! use cellswap::prelude::*;
//!
//! let mut cells = [Cell::new(100), Cell::new(200)];
//! exchange_at(&mut cells, 0, 1)?;
//! assert_eq!(cells[0].get(), 200);
//! # Ok::<(), cellswap::Error>(())
//! ```

// Operations
pub use crate::{exchange, exchange_at, exchanged};

// Types
pub use crate::Cell;

// Error handling
pub use crate::{Error, Result};
