//! Demo Deck Core - Shared types library.
//!
//! This crate provides common types used across all Demo Deck components:
//! - `storage` - Persistent key-value store adapter
//! - `tasks` - Task list manager and filters
//! - `shop` - Shop state reducer and quick basket
//! - `weather` - Current-weather client and refresh loop
//! - `cli` - Command-line driver for the demos
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
