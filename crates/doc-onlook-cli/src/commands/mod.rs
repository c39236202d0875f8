//! Command implementations.

pub mod find;
pub mod send;

pub use find::run_find;
pub use send::run_send;
