use super::errors::CartError;

pub const ADD_PRODUCT_FAILED: &str = "Erro na adição do produto";
pub const REMOVE_PRODUCT_FAILED: &str = "Erro na remoção do produto";
pub const UPDATE_AMOUNT_FAILED: &str = "Erro na alteração de quantidade do produto";
pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";

/// The cart operation a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl std::fmt::Display for CartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOperation::AddProduct => write!(f, "add_product"),
            CartOperation::RemoveProduct => write!(f, "remove_product"),
            CartOperation::UpdateProductAmount => write!(f, "update_product_amount"),
        }
    }
}

impl CartOperation {
    fn failure_message(self) -> &'static str {
        match self {
            CartOperation::AddProduct => ADD_PRODUCT_FAILED,
            CartOperation::RemoveProduct => REMOVE_PRODUCT_FAILED,
            CartOperation::UpdateProductAmount => UPDATE_AMOUNT_FAILED,
        }
    }
}

/// Message shown to the shopper when `operation` fails with `error`.
///
/// Stock failures keep the quantity-change wording even when they come
/// from adding a product that is already in the cart.
pub fn user_message(operation: CartOperation, error: &CartError) -> &'static str {
    match error {
        CartError::OutOfStock => OUT_OF_STOCK,
        CartError::StockUnavailable(_) => UPDATE_AMOUNT_FAILED,
        CartError::ProductUnavailable(_) => ADD_PRODUCT_FAILED,
        CartError::ItemNotInCart
        | CartError::ItemAlreadyInCart
        | CartError::Repository(_) => operation.failure_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::errors::CatalogError;

    #[test]
    fn should_use_out_of_stock_message_for_any_operation() {
        assert_eq!(
            user_message(CartOperation::AddProduct, &CartError::OutOfStock),
            OUT_OF_STOCK
        );
        assert_eq!(
            user_message(CartOperation::UpdateProductAmount, &CartError::OutOfStock),
            OUT_OF_STOCK
        );
    }

    #[test]
    fn should_report_stock_lookup_failure_as_amount_change_error() {
        let error = CartError::StockUnavailable(CatalogError::Unavailable);

        assert_eq!(
            user_message(CartOperation::AddProduct, &error),
            UPDATE_AMOUNT_FAILED
        );
    }

    #[test]
    fn should_report_product_lookup_failure_as_add_error() {
        let error = CartError::ProductUnavailable(CatalogError::NotFound);

        assert_eq!(
            user_message(CartOperation::AddProduct, &error),
            ADD_PRODUCT_FAILED
        );
    }

    #[test]
    fn should_word_missing_item_by_operation() {
        assert_eq!(
            user_message(CartOperation::RemoveProduct, &CartError::ItemNotInCart),
            REMOVE_PRODUCT_FAILED
        );
        assert_eq!(
            user_message(CartOperation::UpdateProductAmount, &CartError::ItemNotInCart),
            UPDATE_AMOUNT_FAILED
        );
    }
}
