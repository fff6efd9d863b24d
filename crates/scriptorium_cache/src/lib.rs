//! Memoizing side-table for expensive calls.
//!
//! Results are stored on disk keyed by a type tag plus a SHA-256 digest of the call
//! arguments, so a repeated call with the same arguments is answered from the cache
//! instead of re-running a download or a model request.

#![warn(missing_docs)]

mod cache;

pub use cache::{CacheKey, MemoCache, MemoCacheConfig, MemoCacheConfigBuilder};
