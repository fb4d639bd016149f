use super::Category;

/// Stable identity key of a catalog entry.
pub type ProductId = u32;

/// Represents a product in the catalog.
///
/// Products are defined at build time and never change afterwards, so all
/// text fields borrow from static data and the whole record is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Price in whole roubles.
    pub price: u64,
    pub old_price: Option<u64>,
    /// Path of the static image asset, resolved by the presentation layer.
    pub image: &'static str,
    pub in_stock: bool,
}

impl Product {
    pub const fn new(
        id: ProductId,
        name: &'static str,
        description: &'static str,
        category: Category,
        price: u64,
        image: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            price,
            old_price: None,
            image,
            in_stock: true,
        }
    }

    pub const fn with_old_price(mut self, old_price: u64) -> Self {
        self.old_price = Some(old_price);
        self
    }

    pub const fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// A product is discounted only when its old price is above the current one.
    pub fn is_discounted(&self) -> bool {
        matches!(self.old_price, Some(old) if old > self.price)
    }
}
