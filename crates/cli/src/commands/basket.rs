//! `deck basket` - the hand-entered basket.
//!
//! The basket is not persisted: every invocation starts from the starter
//! items and shows the result of one change.

use std::io::Write;

use demo_deck_core::{BasketItemId, Price};
use demo_deck_shop::Basket;

use super::CommandError;

pub fn show(basket: &Basket, out: &mut impl Write) -> Result<(), CommandError> {
    if basket.items().is_empty() {
        writeln!(out, "Basket is empty.")?;
        return Ok(());
    }

    for item in basket.items() {
        writeln!(
            out,
            "#{:<3} {:<20} {:>3} x {:>10}",
            item.id,
            item.name,
            item.quantity,
            Price::usd(item.price).display()
        )?;
    }
    writeln!(out, "Total: {}", Price::usd(basket.total()).display())?;
    Ok(())
}

pub fn add(
    basket: &mut Basket,
    name: &str,
    price: &str,
    quantity: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let item = basket.add_item(name, price, quantity)?;
    tracing::debug!(id = %item.id, name = %item.name, "Added basket item");
    show(basket, out)
}

pub fn remove(basket: &mut Basket, id: BasketItemId, out: &mut impl Write) -> Result<(), CommandError> {
    basket.remove_item(id);
    show(basket, out)
}

pub fn clear(basket: &mut Basket, out: &mut impl Write) -> Result<(), CommandError> {
    basket.clear();
    show(basket, out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use demo_deck_shop::{BasketError, demo_basket};

    use super::*;

    fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), CommandError>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_starter_items_and_total() {
        let basket = Basket::new(demo_basket());
        let text = output(|out| show(&basket, out));
        assert!(text.contains("Laptop"));
        assert!(text.contains("Monitor"));
        assert!(text.ends_with("Total: $1293.00\n"));
    }

    #[test]
    fn test_add_shows_new_item_with_next_id() {
        let mut basket = Basket::new(demo_basket());
        let text = output(|out| add(&mut basket, "  Webcam ", "59.50", "2", out));
        assert!(text.contains("#5   Webcam"));
        assert!(text.ends_with("Total: $1412.00\n"));
    }

    #[test]
    fn test_add_rejects_invalid_and_duplicate() {
        let mut basket = Basket::new(demo_basket());
        let mut out = Vec::new();
        assert!(matches!(
            add(&mut basket, "Cable", "abc", "1", &mut out),
            Err(CommandError::Basket(BasketError::InvalidFields))
        ));
        assert!(matches!(
            add(&mut basket, "Cable", "5", "0", &mut out),
            Err(CommandError::Basket(BasketError::InvalidFields))
        ));
        assert!(matches!(
            add(&mut basket, "mouse", "5", "1", &mut out),
            Err(CommandError::Basket(BasketError::AlreadyInCart(_)))
        ));
        assert!(out.is_empty());
        assert_eq!(basket.items().len(), 4);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut basket = Basket::new(demo_basket());
        let text = output(|out| remove(&mut basket, BasketItemId::new(1), out));
        assert!(!text.contains("Laptop"));
        assert!(text.ends_with("Total: $294.00\n"));

        let text = output(|out| clear(&mut basket, out));
        assert_eq!(text, "Basket is empty.\n");
    }
}
