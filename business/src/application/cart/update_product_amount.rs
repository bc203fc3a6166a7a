use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::catalog::services::StockService;
use crate::domain::logger::Logger;

pub struct UpdateProductAmountUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub stock: Arc<dyn StockService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateProductAmountParams,
    ) -> Result<Option<Cart>, CartError> {
        let UpdateProductAmountParams {
            cart,
            product_id,
            amount,
        } = params;

        self.logger.info(&format!(
            "Updating amount of product {} to {}",
            product_id, amount
        ));

        if amount < 1 {
            self.logger
                .debug(&format!("Ignoring amount {} below one for {}", amount, product_id));
            return Ok(None);
        }

        let existing = cart.find(product_id).ok_or(CartError::ItemNotInCart)?;
        if existing.amount <= 0 {
            self.logger.debug(&format!(
                "Ignoring update of {} with stored amount {}",
                product_id, existing.amount
            ));
            return Ok(None);
        }

        let stock = self
            .stock
            .get_stock(product_id)
            .await
            .map_err(CartError::StockUnavailable)?;

        if amount > stock.amount {
            self.logger.info(&format!(
                "Requested {} of {} but only {} in stock",
                amount, product_id, stock.amount
            ));
            return Err(CartError::OutOfStock);
        }

        let updated = cart.with_amount(product_id, amount)?;
        self.repository.save(&updated)?;

        self.logger.info(&format!(
            "Amount of product {} set to {}",
            product_id, amount
        ));
        Ok(Some(updated))
    }
}
