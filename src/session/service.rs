use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::clients::SessionClient;
use crate::domain::{Category, Product, ProductId};
use crate::filter::ViewFilter;
use crate::messages::{ServiceResponse, SessionRequest};
use crate::view::StorefrontView;
use super::SessionError;

/// Owns the state of one browsing session.
///
/// Requests are taken off the channel one at a time and each handler runs to
/// completion before the next is read, so cart and filter mutations never
/// interleave.
pub struct SessionService {
    receiver: mpsc::Receiver<SessionRequest>,
    catalog: &'static Catalog,
    cart: Cart,
    filter: ViewFilter,
}

impl SessionService {
    pub fn new(buffer_size: usize, catalog: &'static Catalog) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            catalog,
            cart: Cart::new(),
            filter: ViewFilter::new(),
        };
        let client = SessionClient::new(sender);
        (service, client)
    }

    #[instrument(name = "session_service", skip(self))]
    pub async fn run(mut self) {
        info!("SessionService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::AddToCart { product_id, respond_to } => {
                    self.handle_add_to_cart(product_id, respond_to);
                }
                SessionRequest::RemoveFromCart { product_id, respond_to } => {
                    self.handle_remove_from_cart(product_id, respond_to);
                }
                SessionRequest::UpdateQuantity { product_id, quantity, respond_to } => {
                    self.handle_update_quantity(product_id, quantity, respond_to);
                }
                SessionRequest::GetTotalPrice { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.total_price()));
                }
                SessionRequest::GetCartItems { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.items().to_vec()));
                }
                SessionRequest::SetSelectedCategory { label, respond_to } => {
                    self.handle_set_selected_category(label, respond_to);
                }
                SessionRequest::GetSelectedCategory { respond_to } => {
                    let _ = respond_to.send(Ok(self.filter.selected()));
                }
                SessionRequest::GetVisibleProducts { respond_to } => {
                    self.handle_visible_products(respond_to);
                }
                SessionRequest::PlaceOrder { respond_to } => {
                    self.handle_place_order(respond_to);
                }
                SessionRequest::GetView { respond_to } => {
                    let view = StorefrontView::derive(self.catalog, &self.filter, &self.cart);
                    let _ = respond_to.send(Ok(view));
                }
                SessionRequest::Shutdown => {
                    info!("SessionService shutting down");
                    break;
                }
            }
        }
        info!("SessionService stopped");
    }

    /// Stock gate for the presentation: unknown and out-of-stock products
    /// never reach the cart.
    #[instrument(skip(self, respond_to))]
    fn handle_add_to_cart(&mut self, product_id: ProductId, respond_to: ServiceResponse<(), SessionError>) {
        debug!("Processing add_to_cart request");
        let Some(product) = self.catalog.find(product_id) else {
            warn!("Product not found");
            let _ = respond_to.send(Err(SessionError::UnknownProduct(product_id)));
            return;
        };
        if !product.in_stock {
            warn!(product_name = %product.name, "Rejected out-of-stock product");
            let _ = respond_to.send(Err(SessionError::OutOfStock(product_id)));
            return;
        }
        self.cart.add_to_cart(product);
        info!(
            product_name = %product.name,
            quantity = self.cart.quantity_of(product_id).unwrap_or_default(),
            total = self.cart.total_price(),
            "Added to cart"
        );
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_remove_from_cart(&mut self, product_id: ProductId, respond_to: ServiceResponse<(), SessionError>) {
        debug!("Processing remove_from_cart request");
        self.cart.remove_from_cart(product_id);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        respond_to: ServiceResponse<(), SessionError>,
    ) {
        debug!("Processing update_quantity request");
        self.cart.update_quantity(product_id, quantity);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_set_selected_category(&mut self, label: String, respond_to: ServiceResponse<Category, SessionError>) {
        debug!("Processing set_selected_category request");
        match self.filter.set_selected_category(&label) {
            Some(category) => {
                let _ = respond_to.send(Ok(category));
            }
            None => {
                warn!("Unknown category label");
                let _ = respond_to.send(Err(SessionError::UnknownCategory(label)));
            }
        }
    }

    fn handle_visible_products(&self, respond_to: ServiceResponse<Vec<Product>, SessionError>) {
        let products = self.filter.visible_products(self.catalog.products());
        debug!(category = %self.filter.selected(), count = products.len(), "Derived visible products");
        let _ = respond_to.send(Ok(products));
    }

    /// Checkout is not wired to anything: the order is logged and the cart stays as it is.
    #[instrument(skip(self, respond_to))]
    fn handle_place_order(&self, respond_to: ServiceResponse<u64, SessionError>) {
        if self.cart.is_empty() {
            debug!("Place order pressed with an empty cart");
        }
        let total = self.cart.total_price();
        info!(lines = self.cart.len(), total, "Place order requested, nothing submitted");
        let _ = respond_to.send(Ok(total));
    }

    #[cfg(test)]
    pub(crate) fn cart(&self) -> &[crate::domain::CartItem] {
        self.cart.items()
    }
}
