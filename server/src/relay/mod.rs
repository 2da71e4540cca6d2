//! Command relay core
//!
//! The store holding the current command and its bounded history.

mod store;

pub use store::CommandStore;
