//! `deck cart` - the persisted shopping cart.

use std::io::Write;

use demo_deck_core::{Price, ProductId};
use demo_deck_shop::{Shop, ShopError};

use super::CommandError;

pub fn show(shop: &Shop, out: &mut impl Write) -> Result<(), CommandError> {
    let state = shop.state();
    if state.cart_is_empty() {
        writeln!(out, "Cart is empty.")?;
        return Ok(());
    }

    for line in state.cart() {
        writeln!(
            out,
            "#{:<3} {} {:<28} {:>3} x {:>10} = {:>10}",
            line.id,
            line.image,
            line.name,
            line.quantity,
            Price::usd(line.price).display(),
            Price::usd(line.subtotal()).display()
        )?;
    }
    writeln!(
        out,
        "{} items | total {}",
        state.cart_item_count(),
        Price::usd(state.cart_total()).display()
    )?;
    Ok(())
}

pub fn add(shop: &mut Shop, id: ProductId, out: &mut impl Write) -> Result<(), CommandError> {
    shop.add_product(id)?;
    show(shop, out)
}

pub fn remove(shop: &mut Shop, id: ProductId, out: &mut impl Write) -> Result<(), CommandError> {
    require_catalog(shop, id)?;
    shop.remove_product(id);
    show(shop, out)
}

/// Set a line's quantity; zero or negative removes the line.
pub fn set(shop: &mut Shop, id: ProductId, quantity: i64, out: &mut impl Write) -> Result<(), CommandError> {
    require_catalog(shop, id)?;
    shop.set_quantity(id, quantity);
    show(shop, out)
}

pub fn clear(shop: &mut Shop, out: &mut impl Write) -> Result<(), CommandError> {
    shop.clear_cart();
    show(shop, out)
}

fn require_catalog(shop: &Shop, id: ProductId) -> Result<(), ShopError> {
    shop.find_product(id)
        .map(|_| ())
        .ok_or(ShopError::UnknownProduct(id))
}
