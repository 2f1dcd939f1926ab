pub mod db;
pub mod error;
pub mod models;
pub mod repos;

pub use db::{connect, connect_in_memory, MIGRATOR};
pub use error::{StoreError, StoreResult};
