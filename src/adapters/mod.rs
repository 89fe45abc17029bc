// Adapters layer: concrete implementations for external systems (http, token storage).

pub mod http;
pub mod storage;

pub use http::HttpCoachApi;
pub use storage::{FileTokenStore, MemoryTokenStore};
