use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::catalog::services::ProductCatalogService;
use crate::domain::logger::Logger;

pub struct AddProductUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalogService>,
    pub update_amount: Arc<dyn UpdateProductAmountUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Option<Cart>, CartError> {
        let AddProductParams { cart, product_id } = params;

        self.logger
            .info(&format!("Adding product to cart: {}", product_id));

        let product = self
            .catalog
            .get_product(product_id)
            .await
            .map_err(CartError::ProductUnavailable)?;

        // Re-adding goes through the amount update so stock is checked again.
        if let Some(existing) = cart.find(product_id) {
            let amount = existing.amount + 1;
            self.logger.info(&format!(
                "Product {} already in cart, raising amount to {}",
                product_id, amount
            ));
            return self
                .update_amount
                .execute(UpdateProductAmountParams {
                    cart,
                    product_id,
                    amount,
                })
                .await;
        }

        let updated = cart.with_new_product(product)?;
        self.repository.save(&updated)?;

        self.logger
            .info(&format!("Product added to cart: {}", product_id));
        Ok(Some(updated))
    }
}
