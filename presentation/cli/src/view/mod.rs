pub mod cart_view;
pub mod format;
