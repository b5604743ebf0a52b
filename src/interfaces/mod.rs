//! User interfaces
//!
//! The terminal user interface is the only front end.

pub mod tui;
