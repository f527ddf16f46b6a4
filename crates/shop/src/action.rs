//! Shop actions.
//!
//! The wire form is `{"type": "ADD_TO_CART", "payload": {...}}`. Decoding
//! distinguishes an unknown `type` (fatal, see [`ShopError::UnknownAction`])
//! from a known type with a bad payload.

use demo_deck_core::{ProductId, SortBy, ViewMode};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::ShopError;

/// A request to transition the shop state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShopAction {
    SetProducts(Vec<Product>),
    SetCategoryFilter(String),
    SetSearchTerm(String),
    SetSortBy(SortBy),
    AddToCart(Product),
    RemoveFromCart(ProductId),
    UpdateQuantity { id: ProductId, quantity: i64 },
    ClearCart,
    ToggleCartSidebar,
    SetViewMode(ViewMode),
}

/// Wire names of every action kind.
pub const ACTION_TYPES: &[&str] = &[
    "SET_PRODUCTS",
    "SET_CATEGORY_FILTER",
    "SET_SEARCH_TERM",
    "SET_SORT_BY",
    "ADD_TO_CART",
    "REMOVE_FROM_CART",
    "UPDATE_QUANTITY",
    "CLEAR_CART",
    "TOGGLE_CART_SIDEBAR",
    "SET_VIEW_MODE",
];

impl ShopAction {
    /// Decode an action from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::UnknownAction` if the `type` field is missing or
    /// names no known action, and `ShopError::MalformedAction` if the JSON
    /// or the payload is invalid.
    pub fn from_json(json: &str) -> Result<Self, ShopError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        if !ACTION_TYPES.contains(&kind) {
            return Err(ShopError::UnknownAction(kind.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The wire name of this action.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetProducts(_) => "SET_PRODUCTS",
            Self::SetCategoryFilter(_) => "SET_CATEGORY_FILTER",
            Self::SetSearchTerm(_) => "SET_SEARCH_TERM",
            Self::SetSortBy(_) => "SET_SORT_BY",
            Self::AddToCart(_) => "ADD_TO_CART",
            Self::RemoveFromCart(_) => "REMOVE_FROM_CART",
            Self::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            Self::ClearCart => "CLEAR_CART",
            Self::ToggleCartSidebar => "TOGGLE_CART_SIDEBAR",
            Self::SetViewMode(_) => "SET_VIEW_MODE",
        }
    }

    /// Whether this action can change the cart.
    #[must_use]
    pub const fn touches_cart(&self) -> bool {
        matches!(
            self,
            Self::AddToCart(_)
                | Self::RemoveFromCart(_)
                | Self::UpdateQuantity { .. }
                | Self::ClearCart
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_unit_action() {
        let action = ShopAction::from_json(r#"{"type": "CLEAR_CART"}"#).unwrap();
        assert_eq!(action, ShopAction::ClearCart);
    }

    #[test]
    fn test_from_json_payload_actions() {
        let action =
            ShopAction::from_json(r#"{"type": "SET_SORT_BY", "payload": "price-low"}"#).unwrap();
        assert_eq!(action, ShopAction::SetSortBy(SortBy::PriceLow));

        let action = ShopAction::from_json(
            r#"{"type": "UPDATE_QUANTITY", "payload": {"id": 4, "quantity": -2}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            ShopAction::UpdateQuantity {
                id: ProductId::new(4),
                quantity: -2
            }
        );
    }

    #[test]
    fn test_from_json_unknown_kind_is_distinct_error() {
        let err = ShopAction::from_json(r#"{"type": "APPLY_COUPON", "payload": "X"}"#).unwrap_err();
        assert!(matches!(err, ShopError::UnknownAction(ref kind) if kind == "APPLY_COUPON"));

        let err = ShopAction::from_json(r#"{"payload": 1}"#).unwrap_err();
        assert!(matches!(err, ShopError::UnknownAction(ref kind) if kind.is_empty()));
    }

    #[test]
    fn test_from_json_bad_payload_is_malformed() {
        let err = ShopAction::from_json(r#"{"type": "REMOVE_FROM_CART", "payload": "x"}"#)
            .unwrap_err();
        assert!(matches!(err, ShopError::MalformedAction(_)));
    }

    #[test]
    fn test_kind_matches_wire_name() {
        let action = ShopAction::SetViewMode(ViewMode::List);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.kind());
        assert!(ACTION_TYPES.contains(&action.kind()));
    }
}
