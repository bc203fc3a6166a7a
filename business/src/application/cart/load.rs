use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::load::LoadCartUseCase;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct LoadCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCartUseCase for LoadCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        self.logger.debug("Loading stored cart");

        match self.repository.load() {
            Ok(Some(cart)) => {
                self.logger
                    .info(&format!("Stored cart loaded with {} items", cart.len()));
                Ok(cart)
            }
            Ok(None) => {
                self.logger.info("No stored cart, starting empty");
                Ok(Cart::new())
            }
            // An unreadable payload must not keep the shopper from using the cart.
            Err(RepositoryError::Corrupted) => {
                self.logger
                    .warn("Stored cart could not be decoded, starting empty");
                Ok(Cart::new())
            }
            Err(other) => Err(CartError::Repository(other)),
        }
    }
}
