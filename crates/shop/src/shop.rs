//! The persisted shop: state plus the cart slot.

use std::collections::HashMap;

use demo_deck_core::ProductId;
use demo_deck_storage::{PersistentSlot, RemoteUpdates, StoreView};
use rust_decimal::Decimal;
use tracing::{debug, error, instrument};

use crate::action::ShopAction;
use crate::catalog::Product;
use crate::error::ShopError;
use crate::state::{CartLine, ShopState, reduce};

/// Storage key for the cart.
pub const CART_KEY: &str = "shopping-cart";

/// How a persisted cart is turned back into state on open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartRestore {
    /// Keep stored quantities. Duplicate ids are merged, empty lines dropped.
    #[default]
    Exact,
    /// Add each stored line once, so every quantity comes back as 1.
    Replay,
}

impl std::str::FromStr for CartRestore {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "replay" => Ok(Self::Replay),
            _ => Err(format!("invalid cart restore mode: {s}")),
        }
    }
}

impl CartRestore {
    fn apply(self, state: ShopState, stored: &[CartLine]) -> ShopState {
        match self {
            Self::Exact => state.with_cart(merge_lines(stored)),
            Self::Replay => stored
                .iter()
                .map(|line| ShopAction::AddToCart(line.to_product()))
                .fold(state, reduce),
        }
    }
}

/// One line per id in first-seen order, quantities summed, zero lines dropped.
fn merge_lines(stored: &[CartLine]) -> Vec<CartLine> {
    let mut merged: Vec<CartLine> = Vec::with_capacity(stored.len());
    let mut index: HashMap<ProductId, usize> = HashMap::new();
    for line in stored {
        match index.get(&line.id).and_then(|&i| merged.get_mut(i)) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => {
                index.insert(line.id, merged.len());
                merged.push(line.clone());
            }
        }
    }
    merged.retain(|line| line.quantity > 0);
    merged
}

/// Shop state owned by one view, with the cart written through to storage.
#[derive(Debug)]
pub struct Shop {
    state: ShopState,
    slot: PersistentSlot<Vec<CartLine>>,
    remote: RemoteUpdates<Vec<CartLine>>,
}

impl Shop {
    /// Build the initial state for `products` and restore the stored cart.
    ///
    /// The cart is written back only if restoring changed it.
    #[must_use]
    pub fn open(view: StoreView, products: Vec<Product>, restore: CartRestore) -> Self {
        let slot = PersistentSlot::new(view, CART_KEY);
        let stored: Vec<CartLine> = slot.load(Vec::new());
        let state = restore.apply(ShopState::new(products), &stored);

        if state.cart() != stored.as_slice() {
            debug!(?restore, lines = state.cart().len(), "Normalized restored cart");
            slot.save(&state.cart().to_vec());
        }

        let remote = slot.watch();
        Self {
            state,
            slot,
            remote,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ShopState {
        &self.state
    }

    /// Apply an action. Cart actions persist the whole cart afterwards.
    pub fn dispatch(&mut self, action: ShopAction) {
        let touches_cart = action.touches_cart();
        debug!(kind = action.kind(), "Dispatching shop action");
        self.state = reduce(std::mem::take(&mut self.state), action);
        if touches_cart {
            self.slot.save(&self.state.cart().to_vec());
        }
    }

    /// Decode and apply an action in its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::UnknownAction` for an unknown action kind and
    /// `ShopError::MalformedAction` for invalid JSON. State is unchanged on error.
    #[instrument(skip(self, json))]
    pub fn dispatch_json(&mut self, json: &str) -> Result<(), ShopError> {
        let action = match ShopAction::from_json(json) {
            Ok(action) => action,
            Err(e @ ShopError::UnknownAction(_)) => {
                error!(error = %e, "Rejected shop action");
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        self.dispatch(action);
        Ok(())
    }

    /// Catalog lookup.
    #[must_use]
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.state.products().iter().find(|p| p.id == id)
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::UnknownProduct` if `id` is not in the catalog.
    pub fn add_product(&mut self, id: ProductId) -> Result<(), ShopError> {
        let product = self
            .find_product(id)
            .cloned()
            .ok_or(ShopError::UnknownProduct(id))?;
        self.dispatch(ShopAction::AddToCart(product));
        Ok(())
    }

    pub fn remove_product(&mut self, id: ProductId) {
        self.dispatch(ShopAction::RemoveFromCart(id));
    }

    /// Set a line's quantity; zero or less removes it.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        self.dispatch(ShopAction::UpdateQuantity { id, quantity });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(ShopAction::ClearCart);
    }

    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.state.cart_total()
    }

    #[must_use]
    pub fn cart_item_count(&self) -> u64 {
        self.state.cart_item_count()
    }

    /// Adopt the latest cart written by another view, if any.
    ///
    /// Lines are normalized as on an exact restore, so the cart keeps one line
    /// per product whatever the other view wrote.
    pub fn sync_remote(&mut self) -> bool {
        let Some(cart) = self.remote.take() else {
            return false;
        };
        let cart = merge_lines(&cart);
        debug!(lines = cart.len(), "Adopting cart written by another view");
        self.state = std::mem::take(&mut self.state).with_cart(cart);
        true
    }
}
