pub mod category;
pub mod product;
pub mod cart_item;

pub use category::*;
pub use product::*;
pub use cart_item::*;
