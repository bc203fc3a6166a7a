use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateProductAmountParams {
    pub cart: Cart,
    pub product_id: ProductId,
    /// Requested quantity. Any value is accepted here; values below one
    /// are ignored by the use case before the item is looked up, so an id
    /// missing from the cart is only reported for amounts of one or more.
    pub amount: i64,
}

#[async_trait]
pub trait UpdateProductAmountUseCase: Send + Sync {
    /// Returns the persisted cart, or `None` when the request was ignored.
    async fn execute(&self, params: UpdateProductAmountParams)
    -> Result<Option<Cart>, CartError>;
}
