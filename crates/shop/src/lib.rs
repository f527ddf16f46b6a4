//! Demo Deck Shop - Product listing and shopping cart state.
//!
//! # Architecture
//!
//! All shop state lives in one [`ShopState`] value owned by a [`Shop`].
//! Changes happen only through [`ShopAction`]s passed to the pure [`reduce`]
//! function; filtered listings and cart totals are derived on every read.
//! The cart is persisted under [`CART_KEY`] after every cart action.
//!
//! # Modules
//!
//! - [`catalog`] - `Product` and the compiled-in demo catalog
//! - [`action`] - `ShopAction`, including its JSON wire form
//! - [`state`] - `ShopState`, `CartLine`, the reducer and derived views
//! - [`shop`] - `Shop`, the persisted state holder
//! - [`basket`] - The simple hand-entered cart demo
//!
//! # Example
//!
//! ```rust
//! use demo_deck_core::{ProductId, SortBy};
//! use demo_deck_shop::{CartRestore, Shop, ShopAction, demo_catalog};
//! use demo_deck_storage::Store;
//!
//! let mut shop = Shop::open(Store::memory().open_view(), demo_catalog(), CartRestore::Exact);
//! shop.dispatch(ShopAction::SetSortBy(SortBy::PriceLow));
//! shop.add_product(ProductId::new(1)).unwrap();
//! assert_eq!(shop.cart_item_count(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod basket;
pub mod catalog;
pub mod error;
pub mod shop;
pub mod state;

pub use action::ShopAction;
pub use basket::{Basket, BasketError, BasketItem, demo_basket};
pub use catalog::{Product, demo_catalog};
pub use error::ShopError;
pub use shop::{CART_KEY, CartRestore, Shop};
pub use state::{ALL_CATEGORIES, CartLine, ShopState, reduce};
