//! Storage layer backing the [`DataStore`](crate::DataStore). Provides:
//! - Insertion-ordered entity collections ([`Collection`])
//! - Login state against the fixed admin list ([`Session`])
//! - Timestamp-based record identities ([`IdGenerator`])
//!
//! Everything lives in process memory and is discarded on exit.

mod collection;
mod ids;
mod session;

pub use collection::Collection;
pub use ids::IdGenerator;
pub use session::Session;
