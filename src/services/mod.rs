//! Service Layer
//!
//! I/O at the edge of the application. The only external interface is the
//! one-shot catalog load at startup.

mod catalog_source;

pub use catalog_source::*;
