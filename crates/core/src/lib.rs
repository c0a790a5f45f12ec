//! Domain building blocks shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod task;
pub mod types;
