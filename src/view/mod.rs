//! Read-only presentation model.
//!
//! Everything here is derived from the current cart and filter state on
//! each call; nothing is cached between state changes.

mod controls;

pub use controls::*;

use std::fmt;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::domain::{Category, Product, ProductId};
use crate::filter::ViewFilter;

pub const EMPTY_CART_TEXT: &str = "Ваша корзина пуста";
pub const DISCOUNT_BADGE: &str = "Скидка";
pub const OUT_OF_STOCK_BADGE: &str = "Нет в наличии";

pub fn format_price(amount: u64) -> String {
    format!("{amount} ₽")
}

/// A catalog grid tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub price: String,
    /// Struck-through old price, present only for discounted products.
    pub old_price: Option<String>,
    /// Shows the "Скидка" badge.
    pub discounted: bool,
    /// The add-to-cart button is disabled for out-of-stock products.
    pub add_enabled: bool,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let discounted = product.is_discounted();
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            category: product.category,
            image: product.image,
            price: format_price(product.price),
            old_price: product.old_price.filter(|_| discounted).map(format_price),
            discounted,
            add_enabled: product.in_stock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: ProductId,
    pub name: &'static str,
    pub unit_price: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    /// Badge number on the cart button: distinct lines, not units.
    pub line_count: usize,
    pub units: u64,
    pub total: u64,
}

impl CartSummary {
    pub fn header(&self) -> String {
        if self.line_count == 0 {
            EMPTY_CART_TEXT.to_string()
        } else {
            format!("Товаров в корзине: {}", self.line_count)
        }
    }

    /// Total line, hidden while the cart is empty.
    pub fn total_text(&self) -> Option<String> {
        (self.line_count > 0).then(|| format_price(self.total))
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| CartLine {
                id: item.id(),
                name: item.product.name,
                unit_price: format_price(item.product.price),
                quantity: item.quantity,
            })
            .collect();
        Self {
            lines,
            line_count: cart.len(),
            units: cart.total_quantity(),
            total: cart.total_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub category: Category,
    pub active: bool,
}

/// Everything the page renders for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontView {
    pub categories: Vec<CategoryButton>,
    pub selected: Category,
    pub products: Vec<ProductCard>,
    pub cart: CartSummary,
}

impl StorefrontView {
    pub fn derive(catalog: &Catalog, filter: &ViewFilter, cart: &Cart) -> Self {
        let selected = filter.selected();
        let categories = catalog
            .categories()
            .iter()
            .map(|&category| CategoryButton { category, active: category == selected })
            .collect();
        let products = filter
            .visible_products(catalog.products())
            .iter()
            .map(ProductCard::from)
            .collect();
        Self {
            categories,
            selected,
            products,
            cart: CartSummary::from(cart),
        }
    }
}

impl fmt::Display for ProductCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}] {}", self.id, self.category, self.name)?;
        if self.discounted {
            write!(f, " [{DISCOUNT_BADGE}]")?;
        }
        if !self.add_enabled {
            write!(f, " [{OUT_OF_STOCK_BADGE}]")?;
        }
        write!(f, ": {}", self.price)?;
        if let Some(old) = &self.old_price {
            write!(f, " (было {old})")?;
        }
        write!(f, "\n      {} <{}>", self.description, self.image)
    }
}

impl fmt::Display for StorefrontView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bar: Vec<String> = self
            .categories
            .iter()
            .map(|b| if b.active { format!("[{}]", b.category) } else { b.category.to_string() })
            .collect();
        writeln!(f, "{}", bar.join(" | "))?;
        writeln!(f, "{}: {}", self.selected, self.products.len())?;
        for card in &self.products {
            writeln!(f, "  {card}")?;
        }
        write!(f, "{}", self.cart.header())?;
        if self.cart.units > 0 {
            write!(f, " ({} шт.)", self.cart.units)?;
        }
        writeln!(f)?;
        for line in &self.cart.lines {
            writeln!(f, "  {} × {} ({})", line.name, line.quantity, line.unit_price)?;
        }
        if let Some(total) = self.cart.total_text() {
            write!(f, "Итого: {total}")?;
        }
        Ok(())
    }
}
