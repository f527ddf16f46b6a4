//! Shop state, the reducer and derived views.

use std::cmp::Ordering;

use demo_deck_core::{ProductId, SortBy, ViewMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::action::ShopAction;
use crate::catalog::Product;

/// Category filter value that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// One product in the cart. At most one line exists per product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Decimal,
    #[serde(default)]
    pub stock: u32,
}

impl CartLine {
    /// A fresh line for `product` with quantity 1.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            category: product.category.clone(),
            image: product.image.clone(),
            rating: product.rating,
            stock: product.stock,
        }
    }

    /// The product this line was created from.
    #[must_use]
    pub fn to_product(&self) -> Product {
        Product {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            category: self.category.clone(),
            image: self.image.clone(),
            rating: self.rating,
            stock: self.stock,
        }
    }

    /// `price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Everything the shop demo knows.
///
/// Only [`reduce`] produces new states; fields are read-only from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopState {
    products: Vec<Product>,
    category_filter: String,
    search_term: String,
    sort_by: SortBy,
    cart: Vec<CartLine>,
    is_cart_open: bool,
    view_mode: ViewMode,
}

impl Default for ShopState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ShopState {
    /// Initial state for a catalog: no filters, name order, empty cart.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            category_filter: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            sort_by: SortBy::Name,
            cart: Vec::new(),
            is_cart_open: false,
            view_mode: ViewMode::Grid,
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn category_filter(&self) -> &str {
        &self.category_filter
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn sort_by(&self) -> &SortBy {
        &self.sort_by
    }

    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.is_cart_open
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Same state with the cart replaced wholesale.
    pub(crate) fn with_cart(mut self, cart: Vec<CartLine>) -> Self {
        self.cart = cart;
        self
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// `"All"` followed by each distinct product category in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.iter().skip(1).any(|c| *c == product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Products passing the category and search filters, in `sort_by` order.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        let needle = self.search_term.to_lowercase();
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                self.category_filter == ALL_CATEGORIES || p.category == self.category_filter
            })
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect();

        match &self.sort_by {
            SortBy::Name => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
            SortBy::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
            SortBy::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortBy::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortBy::Unrecognized(_) => {}
        }
        products
    }

    /// Sum of `price * quantity` over the cart.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities over the cart.
    #[must_use]
    pub fn cart_item_count(&self) -> u64 {
        self.cart.iter().map(|line| u64::from(line.quantity)).sum()
    }

    #[must_use]
    pub fn cart_is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}

/// Dictionary order: case-insensitive first, then case-sensitive to break ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Apply one action to a state.
#[must_use]
pub fn reduce(mut state: ShopState, action: ShopAction) -> ShopState {
    match action {
        ShopAction::SetProducts(products) => state.products = products,
        ShopAction::SetCategoryFilter(category) => state.category_filter = category,
        ShopAction::SetSearchTerm(term) => state.search_term = term,
        ShopAction::SetSortBy(sort_by) => state.sort_by = sort_by,
        ShopAction::AddToCart(product) => {
            match state.cart.iter_mut().find(|line| line.id == product.id) {
                Some(line) => line.quantity = line.quantity.saturating_add(1),
                None => state.cart.push(CartLine::for_product(&product)),
            }
        }
        ShopAction::RemoveFromCart(id) => state.cart.retain(|line| line.id != id),
        ShopAction::UpdateQuantity { id, quantity } => {
            if quantity <= 0 {
                state.cart.retain(|line| line.id != id);
            } else if let Some(line) = state.cart.iter_mut().find(|line| line.id == id) {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
        }
        ShopAction::ClearCart => state.cart.clear(),
        ShopAction::ToggleCartSidebar => state.is_cart_open = !state.is_cart_open,
        ShopAction::SetViewMode(mode) => state.view_mode = mode,
    }
    state
}
