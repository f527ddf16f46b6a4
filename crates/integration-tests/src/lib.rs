//! Integration tests for Demo Deck.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p demo-deck-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cross_view_sync` - Several views of one store, as browser tabs share an origin
//! - `file_persistence` - State surviving separate runs against one data directory
//! - `shop_scenarios` - Catalog, cart and wire-form flows through the public API
//! - `weather_dashboard` - Dashboard over the real HTTP client
//!
//! This library only holds shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use demo_deck_core::ProductId;
use demo_deck_shop::{CartRestore, Product, Shop, demo_catalog};
use demo_deck_storage::{Store, StorageError};
use tempfile::TempDir;

/// A file-backed store in a fresh temporary directory.
///
/// Keep the `TempDir` alive for as long as the store is used.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn temp_file_store() -> Result<(TempDir, Store), StorageError> {
    let dir = tempfile::tempdir()?;
    let store = Store::file(dir.path())?;
    Ok((dir, store))
}

/// A new view of `store` with the demo catalog and exact cart restore.
#[must_use]
pub fn open_shop(store: &Store) -> Shop {
    Shop::open(store.open_view(), demo_catalog(), CartRestore::Exact)
}

/// Demo catalog product by id.
#[must_use]
pub fn catalog_product(id: i32) -> Option<Product> {
    demo_catalog()
        .into_iter()
        .find(|p| p.id == ProductId::new(id))
}
