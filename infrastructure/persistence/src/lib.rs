pub mod storage;
pub mod cart {
    pub mod repository;
}
