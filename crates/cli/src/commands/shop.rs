//! `deck shop` - catalog browsing and raw action dispatch.

use std::io::Write;

use demo_deck_core::{Price, SortBy};
use demo_deck_shop::{Product, Shop, ShopAction};
use tracing::warn;

use super::{CommandError, cart};

/// Listing options; unset fields keep the shop defaults.
#[derive(Debug, Default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortBy>,
}

pub fn products(shop: &mut Shop, query: ProductQuery, out: &mut impl Write) -> Result<(), CommandError> {
    if let Some(category) = query.category {
        if !shop.state().categories().contains(&category) {
            warn!(%category, "Unknown category, listing will be empty");
        }
        shop.dispatch(ShopAction::SetCategoryFilter(category));
    }
    if let Some(search) = query.search {
        shop.dispatch(ShopAction::SetSearchTerm(search));
    }
    if let Some(sort) = query.sort {
        if let SortBy::Unrecognized(name) = &sort {
            warn!(sort = %name, "Unrecognized sort order, keeping catalog order");
        }
        shop.dispatch(ShopAction::SetSortBy(sort));
    }

    let state = shop.state();
    let listed = state.filtered_products();
    for product in &listed {
        write_product(product, out)?;
    }
    writeln!(
        out,
        "{} of {} products | category: {} | sort: {}",
        listed.len(),
        state.products().len(),
        state.category_filter(),
        state.sort_by()
    )?;
    Ok(())
}

pub fn categories(shop: &Shop, out: &mut impl Write) -> Result<(), CommandError> {
    for category in shop.state().categories() {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

/// Apply an action given in its JSON wire form, then show the cart.
pub fn dispatch(shop: &mut Shop, json: &str, out: &mut impl Write) -> Result<(), CommandError> {
    shop.dispatch_json(json)?;
    cart::show(shop, out)
}

fn write_product(product: &Product, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "#{:<3} {} {:<28} {:>10}  {} stars  {:<12} {} in stock",
        product.id,
        product.image,
        product.name,
        Price::usd(product.price).display(),
        product.rating,
        product.category,
        product.stock
    )
}
