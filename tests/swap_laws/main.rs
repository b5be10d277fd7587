//! Swap Law Test Suite
//!
//! Integration tests for the public cellswap API.
//!
//! ## Modules
//!
//! - `scenarios`: Concrete exchanges on locals and cells
//! - `properties`: Swap laws over arbitrary values

mod scenarios;
