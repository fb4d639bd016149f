//! In-memory cart state machine.
//!
//! Per product the cart moves between two states:
//!
//! ```text
//! Absent --add--> Present(1)
//! Present(n) --add--> Present(n + 1)
//! Present(n) --update(m > 0)--> Present(m)
//! Present(n) --update(0) | remove--> Absent
//! ```
//!
//! Removing or updating an absent product does nothing. Every operation is
//! total: there is no input for which the cart returns an error.

use tracing::{debug, trace};
use crate::domain::{CartItem, Product, ProductId};

/// Ordered cart contents, at most one line per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    ///
    /// An existing line keeps its position and gains one unit; otherwise a
    /// new line with quantity 1 is appended. No stock check happens here.
    /// A line already at `u32::MAX` units stays there.
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.position(product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                debug!(product_id = product.id, quantity = item.quantity, "Incremented cart line");
            }
            None => {
                self.items.push(CartItem::new(*product));
                debug!(product_id = product.id, "Appended cart line");
            }
        }
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let before = self.items.len();
        self.items.retain(|item| item.id() != product_id);
        if self.items.len() == before {
            trace!(product_id, "Remove ignored, product not in cart");
        } else {
            debug!(product_id, "Removed cart line");
        }
    }

    /// Sets the quantity of an existing line; zero removes the line.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: u32) {
        if new_quantity == 0 {
            self.remove_from_cart(product_id);
            return;
        }
        match self.items.iter_mut().find(|item| item.id() == product_id) {
            Some(item) => {
                item.quantity = new_quantity;
                debug!(product_id, quantity = new_quantity, "Updated cart line");
            }
            None => trace!(product_id, "Update ignored, product not in cart"),
        }
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total_price(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.items
            .iter()
            .find(|item| item.id() == product_id)
            .map(|item| item.quantity)
    }

    /// Units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == product_id)
    }
}
