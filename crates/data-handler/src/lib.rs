//! Reading price files and persisting frontier reports.
//!
//! This crate is the only place in the workspace that touches the filesystem.

pub mod error;
pub mod loader;
pub mod writer;

pub use error::DataError;
pub use loader::{load_price_table, read_price_table};
pub use writer::write_report;
