use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::domain::{CartItem, Category, Product, ProductId};
use crate::messages::SessionRequest;
use crate::session::SessionError;
use crate::view::StorefrontView;

/// Interaction surface the presentation layer calls into.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        debug!("Sending shutdown");
        self.sender
            .send(SessionRequest::Shutdown)
            .await
            .map_err(|_| SessionError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(SessionClient => fn add_to_cart(product_id: ProductId) -> () as SessionRequest::AddToCart, Error = SessionError);
client_method!(SessionClient => fn remove_from_cart(product_id: ProductId) -> () as SessionRequest::RemoveFromCart, Error = SessionError);
client_method!(SessionClient => fn update_quantity(product_id: ProductId, quantity: u32) -> () as SessionRequest::UpdateQuantity, Error = SessionError);
client_method!(SessionClient => fn total_price() -> u64 as SessionRequest::GetTotalPrice, Error = SessionError);
client_method!(SessionClient => fn cart_items() -> Vec<CartItem> as SessionRequest::GetCartItems, Error = SessionError);
client_method!(SessionClient => fn set_selected_category(label: String) -> Category as SessionRequest::SetSelectedCategory, Error = SessionError);
client_method!(SessionClient => fn selected_category() -> Category as SessionRequest::GetSelectedCategory, Error = SessionError);
client_method!(SessionClient => fn visible_products() -> Vec<Product> as SessionRequest::GetVisibleProducts, Error = SessionError);
client_method!(SessionClient => fn place_order() -> u64 as SessionRequest::PlaceOrder, Error = SessionError);
client_method!(SessionClient => fn view() -> StorefrontView as SessionRequest::GetView, Error = SessionError);
