use crate::domain::catalog::errors::CatalogError;
use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_unavailable")]
    ProductUnavailable(#[source] CatalogError),
    #[error("cart.stock_unavailable")]
    StockUnavailable(#[source] CatalogError),
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.item_not_in_cart")]
    ItemNotInCart,
    #[error("cart.item_already_in_cart")]
    ItemAlreadyInCart,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
