//! Local response cache for the session data service.
//!
//! Enabling the cache creates its directory; every successful probe response
//! is stored there keyed by request URL.

pub mod entry;
pub mod store;

pub use entry::CacheEntry;
pub use store::ResponseCache;
