use tracing::{debug, instrument};
use crate::clients::SessionClient;
use crate::domain::Category;
use crate::session::SessionError;
use super::{CartLine, ProductCard, StorefrontView};

/// Turns clicks on rendered controls into session requests.
///
/// Holds no state besides the client: after every click the caller asks for
/// a fresh [`StorefrontView`].
#[derive(Clone)]
pub struct Controls {
    client: SessionClient,
}

impl Controls {
    pub fn new(client: SessionClient) -> Self {
        Self { client }
    }

    /// A disabled button swallows the click.
    #[instrument(skip(self, card), fields(product_id = card.id))]
    pub async fn click_add(&self, card: &ProductCard) -> Result<(), SessionError> {
        if !card.add_enabled {
            debug!("Add button disabled, click ignored");
            return Ok(());
        }
        self.client.add_to_cart(card.id).await
    }

    pub async fn click_increment(&self, line: &CartLine) -> Result<(), SessionError> {
        self.client.update_quantity(line.id, line.quantity.saturating_add(1)).await
    }

    /// Going below one unit drops the line.
    pub async fn click_decrement(&self, line: &CartLine) -> Result<(), SessionError> {
        self.client.update_quantity(line.id, line.quantity.saturating_sub(1)).await
    }

    pub async fn click_remove(&self, line: &CartLine) -> Result<(), SessionError> {
        self.client.remove_from_cart(line.id).await
    }

    pub async fn click_category(&self, category: Category) -> Result<Category, SessionError> {
        self.client.set_selected_category(category.label().to_string()).await
    }

    pub async fn click_place_order(&self) -> Result<u64, SessionError> {
        self.client.place_order().await
    }

    pub async fn render(&self) -> Result<StorefrontView, SessionError> {
        self.client.view().await
    }
}
