//! The fixed product catalog.

use crate::domain::{Category, Product, ProductId};

const BRICKS_IMAGE: &str = "/img/705425fa-c1a4-4100-84fe-e9fd02d56e3c.jpg";
const MIXES_IMAGE: &str = "/img/2f650151-affa-49b4-a01f-10cd663daa48.jpg";
const TOOLS_IMAGE: &str = "/img/af55420b-6aec-467b-83f7-30afe7ed42f9.jpg";

static PRODUCTS: [Product; 6] = [
    Product::new(
        1,
        "Кирпич керамический",
        "Высококачественный строительный кирпич",
        Category::WallMaterials,
        1200,
        BRICKS_IMAGE,
    )
    .with_old_price(1400),
    Product::new(
        2,
        "Цемент М500",
        "Портландцемент марки М500, мешок 50кг",
        Category::DryMixes,
        450,
        MIXES_IMAGE,
    ),
    Product::new(
        3,
        "Набор инструментов",
        "Профессиональный набор строительных инструментов",
        Category::Tools,
        3500,
        TOOLS_IMAGE,
    ),
    Product::new(
        4,
        "Гипсокартон КНАУФ",
        "Гипсокартонный лист 2500x1200x12,5мм",
        Category::WallMaterials,
        380,
        BRICKS_IMAGE,
    ),
    Product::new(
        5,
        "Шпаклевка финишная",
        "Готовая финишная шпаклевка, 20кг",
        Category::DryMixes,
        520,
        MIXES_IMAGE,
    )
    .with_old_price(600),
    Product::new(
        6,
        "Перфоратор Makita",
        "Профессиональный перфоратор 800Вт",
        Category::Tools,
        8900,
        TOOLS_IMAGE,
    )
    .out_of_stock(),
];

static STOREFRONT: Catalog = Catalog {
    products: &PRODUCTS,
    categories: &Category::ALL,
};

/// Read-only view over an ordered product list and the category bar.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
    categories: &'static [Category],
}

impl Catalog {
    /// The storefront's built-in catalog.
    pub fn storefront() -> &'static Catalog {
        &STOREFRONT
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn find(&self, id: ProductId) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_storefront_catalog_shape() {
        let catalog = Catalog::storefront();
        assert_eq!(catalog.products().len(), 6);
        let ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.categories(), &Category::ALL);
    }

    #[test]
    fn test_ids_unique_and_prices_positive() {
        let catalog = Catalog::storefront();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.products().len());
        assert!(catalog.products().iter().all(|p| p.id > 0 && p.price > 0));
        assert!(catalog.products().iter().all(|p| !p.category.is_all()));
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::storefront();
        let brick = catalog.find(1).expect("brick");
        assert_eq!(brick.price, 1200);
        assert_eq!(brick.old_price, Some(1400));
        assert!(brick.is_discounted());

        let drill = catalog.find(6).expect("drill");
        assert!(!drill.in_stock);

        assert!(catalog.find(0).is_none());
        assert!(catalog.find(42).is_none());
    }
}
