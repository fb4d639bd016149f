use std::fmt;

/// Catalog categories, in the order the category bar shows them.
///
/// [`Category::All`] is the sentinel meaning "no filter"; no product carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    WallMaterials,
    DryMixes,
    Tools,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::WallMaterials,
        Category::DryMixes,
        Category::Tools,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::All => "Все товары",
            Category::WallMaterials => "Стеновые материалы",
            Category::DryMixes => "Сухие смеси",
            Category::Tools => "Инструменты",
        }
    }

    /// Looks a category up by its exact display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub const fn is_all(self) -> bool {
        matches!(self, Category::All)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
