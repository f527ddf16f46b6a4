//! Hand-entered basket: free-text items validated on entry. Not persisted.

use std::str::FromStr;

use demo_deck_core::BasketItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItem {
    pub id: BasketItemId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasketError {
    #[error("Please fill in all fields with valid values")]
    InvalidFields,

    #[error("Item already exists in cart: {0}")]
    AlreadyInCart(String),
}

/// The basket contents and the next id to hand out.
#[derive(Debug, Clone)]
pub struct Basket {
    items: Vec<BasketItem>,
    next_id: i32,
}

impl Basket {
    /// Start from `initial`; new ids continue at `initial.len() + 1`.
    #[must_use]
    pub fn new(initial: Vec<BasketItem>) -> Self {
        let next_id = i32::try_from(initial.len())
            .unwrap_or(i32::MAX)
            .saturating_add(1);
        Self {
            items: initial,
            next_id,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    /// Validate and append an item.
    ///
    /// # Errors
    ///
    /// Returns `BasketError::InvalidFields` if the name is blank, the price is
    /// not a non-negative decimal, or the quantity is not a positive integer.
    /// Returns `BasketError::AlreadyInCart` if an item with the same name
    /// (ignoring case) is present.
    pub fn add_item(
        &mut self,
        name: &str,
        price_text: &str,
        quantity_text: &str,
    ) -> Result<BasketItem, BasketError> {
        let name = name.trim();
        let price = Decimal::from_str(price_text.trim()).map_err(|_| BasketError::InvalidFields)?;
        let quantity: u32 = quantity_text
            .trim()
            .parse()
            .map_err(|_| BasketError::InvalidFields)?;
        if name.is_empty() || price.is_sign_negative() || quantity == 0 {
            return Err(BasketError::InvalidFields);
        }

        let lowered = name.to_lowercase();
        if self.items.iter().any(|i| i.name.to_lowercase() == lowered) {
            return Err(BasketError::AlreadyInCart(name.to_string()));
        }

        let item = BasketItem {
            id: BasketItemId::new(self.next_id),
            name: name.to_string(),
            price,
            quantity,
        };
        self.next_id = self.next_id.saturating_add(1);
        self.items.push(item.clone());
        Ok(item)
    }

    /// No-op if `id` is unknown.
    pub fn remove_item(&mut self, id: BasketItemId) {
        self.items.retain(|i| i.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| i.price * Decimal::from(i.quantity))
            .sum()
    }
}

/// The four starter items.
#[must_use]
pub fn demo_basket() -> Vec<BasketItem> {
    [
        (1, "Laptop", 999, 1),
        (2, "Mouse", 25, 2),
        (3, "Keyboard", 45, 1),
        (4, "Monitor", 199, 1),
    ]
    .into_iter()
    .map(|(id, name, price, quantity)| BasketItem {
        id: BasketItemId::new(id),
        name: name.to_string(),
        price: Decimal::from(price),
        quantity,
    })
    .collect()
}
