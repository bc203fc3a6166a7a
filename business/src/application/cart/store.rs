use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::notice::{CartOperation, user_message};
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::cart::use_cases::load::LoadCartUseCase;
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::shared::value_objects::ProductId;

/// Quantity change requested by the cart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

pub struct CartUseCases {
    pub load: Arc<dyn LoadCartUseCase>,
    pub add_product: Arc<dyn AddProductUseCase>,
    pub remove_product: Arc<dyn RemoveProductUseCase>,
    pub update_product_amount: Arc<dyn UpdateProductAmountUseCase>,
}

/// The single cart of the running application.
///
/// Built once at startup and shared as `Arc<CartStore>`. Every operation
/// reads the snapshot current at call time, runs its use case, and on
/// success publishes the already persisted cart to subscribers.
///
/// Catalog and validation failures never reach the caller: they are
/// reported through the [`Notifier`]. Only storage write failures are
/// returned, since the persisted state can no longer be trusted.
///
/// Two overlapping operations both start from the same snapshot, so the
/// one that settles last wins.
pub struct CartStore {
    state: watch::Sender<Cart>,
    add_product: Arc<dyn AddProductUseCase>,
    remove_product: Arc<dyn RemoveProductUseCase>,
    update_product_amount: Arc<dyn UpdateProductAmountUseCase>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Loads the stored cart and builds the store around it.
    pub async fn open(
        use_cases: CartUseCases,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, CartError> {
        let cart = use_cases.load.execute().await?;
        let (state, _) = watch::channel(cart);

        Ok(Self {
            state,
            add_product: use_cases.add_product,
            remove_product: use_cases.remove_product,
            update_product_amount: use_cases.update_product_amount,
            notifier,
            logger,
        })
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Receiver that sees every accepted mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    pub async fn add_product(&self, product_id: ProductId) -> Result<(), RepositoryError> {
        let result = self
            .add_product
            .execute(AddProductParams {
                cart: self.cart(),
                product_id,
            })
            .await;

        self.settle(CartOperation::AddProduct, result)
    }

    pub async fn remove_product(&self, product_id: ProductId) -> Result<(), RepositoryError> {
        let result = self
            .remove_product
            .execute(RemoveProductParams {
                cart: self.cart(),
                product_id,
            })
            .await
            .map(Some);

        self.settle(CartOperation::RemoveProduct, result)
    }

    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<(), RepositoryError> {
        let result = self
            .update_product_amount
            .execute(UpdateProductAmountParams {
                cart: self.cart(),
                product_id: update.product_id,
                amount: update.amount,
            })
            .await;

        self.settle(CartOperation::UpdateProductAmount, result)
    }

    fn settle(
        &self,
        operation: CartOperation,
        result: Result<Option<Cart>, CartError>,
    ) -> Result<(), RepositoryError> {
        match result {
            Ok(Some(cart)) => {
                self.state.send_replace(cart);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(CartError::Repository(error)) => {
                self.logger
                    .error(&format!("Cart {} could not be persisted: {}", operation, error));
                Err(error)
            }
            Err(error) => {
                self.logger
                    .warn(&format!("Cart {} failed: {}", operation, error));
                self.notifier.error(user_message(operation, &error));
                Ok(())
            }
        }
    }
}
