use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct AddProductParams {
    pub cart: Cart,
    pub product_id: ProductId,
}

#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    /// Returns the persisted cart, or `None` when nothing changed.
    async fn execute(&self, params: AddProductParams) -> Result<Option<Cart>, CartError>;
}
