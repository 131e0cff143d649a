pub mod api_client;
pub mod auth_service;
pub mod error;
pub mod storage;

pub use api_client::ApiClient;
pub use error::{ApiError, AuthError};
pub use storage::{LocalStorage, MemoryStorage, StorageBackend, StorageError};
