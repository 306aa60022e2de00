//! Application Layer
//!
//! App initialization, global action handlers and window management.

mod application;

pub use application::*;
