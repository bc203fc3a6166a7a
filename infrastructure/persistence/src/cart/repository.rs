use std::sync::Arc;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::storage::KeyValueStorage;

/// Storage key of the cart snapshot.
pub const CART_KEY: &str = "@RocketShoes:cart";

/// Cart repository writing the whole cart as one JSON array under [`CART_KEY`].
pub struct CartRepositoryStorage {
    storage: Arc<dyn KeyValueStorage>,
}

impl CartRepositoryStorage {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

impl CartRepository for CartRepositoryStorage {
    fn load(&self) -> Result<Option<Cart>, RepositoryError> {
        let Some(raw) = self.storage.get(CART_KEY).map_err(|e| {
            tracing::error!(error = %e, "cart storage read failed");
            RepositoryError::Persistence
        })?
        else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            tracing::warn!(error = %e, "stored cart is not valid JSON");
            RepositoryError::Corrupted
        })
    }

    fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(cart).map_err(|_| RepositoryError::Persistence)?;

        self.storage.set(CART_KEY, &raw).map_err(|e| {
            tracing::error!(error = %e, "cart storage write failed");
            RepositoryError::Persistence
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage, StorageError};
    use business::domain::catalog::model::CatalogProduct;
    use business::domain::shared::value_objects::ProductId;
    use rust_decimal::Decimal;

    fn cart() -> Cart {
        Cart::new()
            .with_new_product(CatalogProduct {
                id: ProductId::new(42),
                title: "Tênis de Caminhada Leve Confortável".to_string(),
                price: Decimal::new(17990, 2),
                image: "https://cdn.example.com/42.jpg".to_string(),
            })
            .unwrap()
    }

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Poisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[test]
    fn should_load_none_when_nothing_stored() {
        let repository = CartRepositoryStorage::new(Arc::new(MemoryStorage::new()));

        assert!(repository.load().unwrap().is_none());
    }

    #[test]
    fn should_write_cart_json_under_fixed_key() {
        let storage = Arc::new(MemoryStorage::new());
        let repository = CartRepositoryStorage::new(storage.clone());

        repository.save(&cart()).unwrap();

        let raw = storage.get("@RocketShoes:cart").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["id"], 42);
        assert_eq!(json[0]["amount"], 1);
        assert_eq!(json[0]["price"], 179.9);
    }

    #[test]
    fn should_load_what_was_saved_after_reopening_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let repository = CartRepositoryStorage::new(Arc::new(FileStorage::open(&path).unwrap()));
        repository.save(&cart()).unwrap();
        drop(repository);

        let reopened = CartRepositoryStorage::new(Arc::new(FileStorage::open(&path).unwrap()));
        assert_eq!(reopened.load().unwrap(), Some(cart()));
    }

    #[test]
    fn should_load_nothing_from_damaged_storage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "garbage").unwrap();

        let repository = CartRepositoryStorage::new(Arc::new(FileStorage::open(&path).unwrap()));

        assert!(repository.load().unwrap().is_none());
        repository.save(&cart()).unwrap();
        assert_eq!(repository.load().unwrap(), Some(cart()));
    }

    #[test]
    fn should_report_corrupted_payload() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(CART_KEY, "[{\"id\":").unwrap();
        let repository = CartRepositoryStorage::new(storage);

        assert!(matches!(
            repository.load().unwrap_err(),
            RepositoryError::Corrupted
        ));
    }

    #[test]
    fn should_map_storage_failures_to_persistence() {
        let repository = CartRepositoryStorage::new(Arc::new(BrokenStorage));

        assert!(matches!(
            repository.load().unwrap_err(),
            RepositoryError::Persistence
        ));
        assert!(matches!(
            repository.save(&cart()).unwrap_err(),
            RepositoryError::Persistence
        ));
    }
}
