//! GifDeck - A wallet-gated media link gallery for the terminal
//!
//! This library provides the core functionality for the GifDeck app:
//! wallet session management, the in-memory link collection, and the
//! terminal user interface.
//!
//! # Architecture
//! - `wallet`: Wallet provider abstraction and connection session
//! - `collection`: Ordered media link collection and input editor
//! - `interfaces`: User interface (TUI)
//! - `system`: Configuration, logging, panic handling
//! - `errors`: Unified error type

pub mod collection;
pub mod errors;
pub mod interfaces;
pub mod system;
pub mod wallet;
