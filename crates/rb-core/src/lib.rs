//! rusty-bbs/crates/rb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for the bulletin board.
//! Nothing in here knows about HTTP or about a particular database.

pub mod error;
pub mod models;
pub mod ratelimit;
pub mod sanitize;
pub mod service;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use ratelimit::TokenBucket;
pub use sanitize::sanitize;
pub use service::PostService;
pub use traits::*;
