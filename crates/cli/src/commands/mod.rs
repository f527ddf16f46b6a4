//! Subcommand implementations.
//!
//! Commands write their human-readable output to a caller-supplied writer;
//! diagnostics go through `tracing` to stderr.

pub mod basket;
pub mod cart;
pub mod shop;
pub mod tasks;
pub mod weather;

use demo_deck_shop::{BasketError, ShopError};
use demo_deck_storage::StorageError;
use demo_deck_tasks::TaskError;
use demo_deck_weather::WeatherError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `deck` subcommands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Task(#[from] TaskError),

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error(transparent)]
    Basket(#[from] BasketError),

    #[error("{}", .0.user_message())]
    Weather(#[from] WeatherError),

    #[error("Invalid weather endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
