//! Shop error types.

use demo_deck_core::ProductId;
use thiserror::Error;

/// Errors raised while dispatching to the shop.
#[derive(Debug, Error)]
pub enum ShopError {
    /// An action kind the reducer does not know. This is a programming
    /// error on the sender's side and is never absorbed.
    #[error("Unknown action type: {0}")]
    UnknownAction(String),

    /// A known action kind whose payload did not decode.
    #[error("Malformed action: {0}")]
    MalformedAction(#[from] serde_json::Error),

    /// Product id not present in the catalog.
    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),
}
