use tokio::sync::oneshot;
use crate::domain::{CartItem, Category, Product, ProductId};
use crate::session::SessionError;
use crate::view::StorefrontView;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// One message per user action. Each variant carries its parameters and a
/// oneshot channel for the reply.
#[derive(Debug)]
pub enum SessionRequest {
    AddToCart {
        product_id: ProductId,
        respond_to: ServiceResponse<(), SessionError>,
    },
    RemoveFromCart {
        product_id: ProductId,
        respond_to: ServiceResponse<(), SessionError>,
    },
    UpdateQuantity {
        product_id: ProductId,
        quantity: u32,
        respond_to: ServiceResponse<(), SessionError>,
    },
    GetTotalPrice {
        respond_to: ServiceResponse<u64, SessionError>,
    },
    GetCartItems {
        respond_to: ServiceResponse<Vec<CartItem>, SessionError>,
    },
    SetSelectedCategory {
        label: String,
        respond_to: ServiceResponse<Category, SessionError>,
    },
    GetSelectedCategory {
        respond_to: ServiceResponse<Category, SessionError>,
    },
    GetVisibleProducts {
        respond_to: ServiceResponse<Vec<Product>, SessionError>,
    },
    PlaceOrder {
        respond_to: ServiceResponse<u64, SessionError>,
    },
    GetView {
        respond_to: ServiceResponse<StorefrontView, SessionError>,
    },
    Shutdown,
}
