pub mod db;
pub mod memory;
pub mod snapshot {
    pub mod entity;
    pub mod repository;
}
