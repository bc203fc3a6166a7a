use rust_decimal::Decimal;

use crate::domain::shared::value_objects::ProductId;

/// A product record as served by the remote catalog. It carries no cart
/// quantity; that only exists once the product becomes a line item.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
}

/// Available quantity for a product. Always fetched fresh, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock {
    pub id: ProductId,
    pub amount: i64,
}
