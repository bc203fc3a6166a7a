use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::logger::Logger;

pub struct RemoveProductUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Removing product from cart: {}", params.product_id));

        let updated = params.cart.without_product(params.product_id)?;
        self.repository.save(&updated)?;

        self.logger
            .info(&format!("Product removed from cart: {}", params.product_id));
        Ok(updated)
    }
}
