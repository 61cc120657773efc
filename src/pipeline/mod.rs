//! Pipeline entry points for deduplication passes.
//!
//! - `key`: derive the dedupe key for a crawl document
//! - `dedupe`: run one pass over a corpus shard

pub mod dedupe;
pub mod key;

pub use dedupe::{dedupe_file, run};
pub use key::DocumentKey;
