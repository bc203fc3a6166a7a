use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Durable storage for the cart snapshot.
///
/// Synchronous on purpose: the store persists and then publishes the new
/// state without an await point in between.
pub trait CartRepository: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Cart>, RepositoryError>;
    fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
