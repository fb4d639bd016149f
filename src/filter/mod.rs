//! Category filtering over the catalog.

use tracing::debug;
use crate::domain::{Category, Product};

/// Returns the products shown for `selected`, in catalog order.
///
/// The [`Category::All`] sentinel returns every product.
pub fn visible_products(products: &[Product], selected: Category) -> Vec<Product> {
    if selected.is_all() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.category == selected)
        .copied()
        .collect()
}

/// Holds the currently selected category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewFilter {
    selected: Category,
}

impl ViewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn select(&mut self, category: Category) {
        debug!(category = %category, "Selected category");
        self.selected = category;
    }

    /// Selects by display label. Unknown labels leave the selection as is
    /// and come back as `None`.
    pub fn set_selected_category(&mut self, label: &str) -> Option<Category> {
        let category = Category::from_label(label)?;
        self.select(category);
        Some(category)
    }

    pub fn visible_products(&self, products: &[Product]) -> Vec<Product> {
        visible_products(products, self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_returns_full_catalog_in_order() {
        let products = Catalog::storefront().products();
        let visible = visible_products(products, Category::All);
        assert_eq!(visible, products);
    }

    #[test]
    fn test_specific_categories() {
        let products = Catalog::storefront().products();
        assert_eq!(ids(&visible_products(products, Category::WallMaterials)), [1, 4]);
        assert_eq!(ids(&visible_products(products, Category::DryMixes)), [2, 5]);
        assert_eq!(ids(&visible_products(products, Category::Tools)), [3, 6]);
    }

    #[test]
    fn test_filter_is_exact_subsequence() {
        let products = Catalog::storefront().products();
        for category in Category::ALL.into_iter().filter(|c| !c.is_all()) {
            let visible = visible_products(products, category);
            let expected: Vec<_> = products.iter().filter(|p| p.category == category).copied().collect();
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn test_select_tools_by_label() {
        let mut filter = ViewFilter::new();
        assert_eq!(filter.selected(), Category::All);

        assert_eq!(filter.set_selected_category("Инструменты"), Some(Category::Tools));
        let visible = filter.visible_products(Catalog::storefront().products());
        assert_eq!(ids(&visible), [3, 6]);
        assert!(visible.iter().all(|p| p.category == Category::Tools));
    }

    #[test]
    fn test_unknown_label_keeps_selection() {
        let mut filter = ViewFilter::new();
        filter.select(Category::DryMixes);
        assert_eq!(filter.set_selected_category("Окна"), None);
        assert_eq!(filter.selected(), Category::DryMixes);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(visible_products(&[], Category::Tools).is_empty());
        assert!(visible_products(&[], Category::All).is_empty());
    }
}
