//! Integration tests for shop flows through the public API.

#![allow(clippy::unwrap_used)]

use demo_deck_core::{ProductId, SortBy, ViewMode};
use demo_deck_integration_tests::{catalog_product, open_shop};
use demo_deck_shop::{ShopAction, ShopError, ShopState, demo_catalog, reduce};
use demo_deck_storage::Store;
use rust_decimal::Decimal;

// =============================================================================
// Browsing
// =============================================================================

#[test]
fn test_search_category_and_sort_compose() {
    let mut shop = open_shop(&Store::memory());
    shop.dispatch(ShopAction::SetCategoryFilter("Electronics".to_string()));
    shop.dispatch(ShopAction::SetSearchTerm("wireless".to_string()));
    shop.dispatch(ShopAction::SetSortBy(SortBy::PriceLow));

    let names: Vec<&str> = shop
        .state()
        .filtered_products()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Wireless Keyboard", "Wireless Headphones", "Wireless Earbuds"]
    );
}

#[test]
fn test_rating_sort_puts_best_rated_first() {
    let state = reduce(
        ShopState::new(demo_catalog()),
        ShopAction::SetSortBy(SortBy::Rating),
    );
    let ratings: Vec<Decimal> = state.filtered_products().iter().map(|p| p.rating).collect();
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(state.filtered_products()[0].name, "Electric Bike");
}

#[test]
fn test_filters_do_not_touch_cart() {
    let mut shop = open_shop(&Store::memory());
    shop.add_product(ProductId::new(5)).unwrap();
    shop.dispatch(ShopAction::SetCategoryFilter("Home".to_string()));
    shop.dispatch(ShopAction::SetViewMode(ViewMode::List));

    assert_eq!(shop.cart_item_count(), 1);
    assert!(shop.state().filtered_products().iter().all(|p| p.category == "Home"));
}

// =============================================================================
// Cart Flow
// =============================================================================

#[test]
fn test_full_cart_flow() {
    let mut shop = open_shop(&Store::memory());

    shop.add_product(ProductId::new(4)).unwrap();
    shop.add_product(ProductId::new(4)).unwrap();
    shop.add_product(ProductId::new(21)).unwrap();
    assert_eq!(shop.cart_item_count(), 3);
    assert_eq!(shop.cart_total(), Decimal::new(2 * 69999 + 1999, 2));

    shop.set_quantity(ProductId::new(21), 10);
    assert_eq!(shop.cart_total(), Decimal::new(2 * 69999 + 10 * 1999, 2));

    shop.set_quantity(ProductId::new(4), -3);
    assert_eq!(shop.cart_item_count(), 10);

    shop.remove_product(ProductId::new(21));
    assert!(shop.state().cart_is_empty());
    assert_eq!(shop.cart_total(), Decimal::ZERO);
}

#[test]
fn test_cart_sidebar_toggle_is_not_a_cart_change() {
    let store = Store::memory();
    let mut tab_a = open_shop(&store);
    let mut tab_b = open_shop(&store);

    tab_a.dispatch(ShopAction::ToggleCartSidebar);
    assert!(tab_a.state().is_cart_open());
    assert!(!tab_b.sync_remote());
}

// =============================================================================
// Wire Form
// =============================================================================

#[test]
fn test_wire_actions_drive_the_shop() {
    let mut shop = open_shop(&Store::memory());
    let product = serde_json::to_string(&catalog_product(13).unwrap()).unwrap();

    shop.dispatch_json(&format!(r#"{{"type": "ADD_TO_CART", "payload": {product}}}"#))
        .unwrap();
    shop.dispatch_json(r#"{"type": "UPDATE_QUANTITY", "payload": {"id": 13, "quantity": 2}}"#)
        .unwrap();
    shop.dispatch_json(r#"{"type": "SET_VIEW_MODE", "payload": "list"}"#)
        .unwrap();

    assert_eq!(shop.cart_item_count(), 2);
    assert_eq!(shop.state().view_mode(), ViewMode::List);
}

#[test]
fn test_unknown_wire_action_is_fatal_and_changes_nothing() {
    let store = Store::memory();
    let mut shop = open_shop(&store);
    shop.add_product(ProductId::new(1)).unwrap();
    let before = shop.state().clone();

    let err = shop
        .dispatch_json(r#"{"type": "APPLY_DISCOUNT", "payload": 10}"#)
        .unwrap_err();
    assert!(matches!(err, ShopError::UnknownAction(ref kind) if kind == "APPLY_DISCOUNT"));
    assert_eq!(shop.state(), &before);
}

#[test]
fn test_unrecognized_sort_keeps_catalog_order() {
    let mut shop = open_shop(&Store::memory());
    shop.dispatch_json(r#"{"type": "SET_SORT_BY", "payload": "newest"}"#)
        .unwrap();

    assert_eq!(
        shop.state().sort_by(),
        &SortBy::Unrecognized("newest".to_string())
    );
    let ids: Vec<i32> = shop
        .state()
        .filtered_products()
        .iter()
        .map(|p| p.id.get())
        .collect();
    assert_eq!(ids, (1..=30).collect::<Vec<_>>());
}
