pub mod store;
pub mod token;
pub mod token_cache;

pub use store::{remember, CacheStore, MemoryStore};
pub use token::CachedToken;
pub use token_cache::TokenCache;
