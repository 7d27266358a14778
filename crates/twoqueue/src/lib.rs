//! # twoqueue
//!
//! Thread-safe fixed-size 2Q cache.
//!
//! 2Q improves on a plain LRU by tracking recently and frequently used
//! entries separately, so a burst of one-time accesses cannot flush the
//! entries that keep coming back.
//!
//! ## Architecture
//! - **Recent (A1in)**: values for keys seen once
//! - **Ghost (A1out)**: keys recently evicted from recent, no values
//! - **Frequent (Am)**: LRU of keys that came back while still in ghost
//! - **Storage**: every tier is an [`LruStore`], an AHash map over a slot
//!   arena with O(1) promotion and eviction
//! - **Locking**: one `parking_lot` mutex over all three tiers
//!
//! ## Example
//! ```
//! use twoqueue::TwoQueue;
//!
//! let cache = TwoQueue::new(256);
//! cache.set("hello", 5);
//! assert_eq!(cache.get(&"hello"), Some(5));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod lru;
mod stats;
mod two_queue;

pub use config::TwoQueueConfig;
pub use error::{Error, Result};
pub use lru::{Evicted, Iter, LruStore};
pub use stats::CacheStats;
pub use two_queue::TwoQueue;
