// Service exports
pub mod api;
pub mod cache;

pub use api::{DirectoryClient, DirectoryError};
pub use cache::ProfileCache;
