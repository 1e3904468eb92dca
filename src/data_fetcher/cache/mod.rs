pub mod cached_client;
pub mod types;

// Re-export the caching decorator
pub use cached_client::CachedClient;
// Re-export cache entry types
pub use types::*;
