use super::{Product, ProductId};

/// One line in the active cart: a product plus how many units of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self { product, quantity: 1 }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}
