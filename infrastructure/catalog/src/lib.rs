pub mod client;
pub mod product_catalog;
pub mod stock;

#[cfg(test)]
mod test_server;
