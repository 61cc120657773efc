//! Redis-backed membership store.
//!
//! Keys live under a per-batch namespace, so shards of one crawl batch
//! processed on different machines (or in sequence) share a single key
//! set, while unrelated batches never collide.

use redis::{Client, Connection};

use crate::checker::DupeChecker;
use crate::error::Result;
use crate::models::RedisConfig;

/// Key set held in Redis, shared across processes.
pub struct RedisChecker {
    conn: Connection,
    namespace: String,
}

impl RedisChecker {
    /// Connect to the server at `url` and claim keys under `namespace`.
    ///
    /// The namespace is prepended verbatim to every key, so pass it
    /// with its trailing separator (see [`batch_namespace`]).
    pub fn connect(url: &str, namespace: impl Into<String>) -> Result<Self> {
        let client = Client::open(url)?;
        let mut conn = client.get_connection()?;
        // Fail the run up front rather than midway through the stream.
        redis::cmd("PING").query::<String>(&mut conn)?;
        Ok(Self {
            conn,
            namespace: namespace.into(),
        })
    }

    /// Connect using configured settings, namespaced to one batch.
    pub fn for_batch(config: &RedisConfig, batch: &str) -> Result<Self> {
        Self::connect(&config.url(), batch_namespace(&config.namespace, batch))
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key)
    }
}

impl DupeChecker for RedisChecker {
    fn is_new(&mut self, key: &str) -> Result<bool> {
        // SETNX is the atomic check-and-set: exactly one claimant per
        // key sees 1, even with concurrent shard workers.
        let claimed: i64 = redis::cmd("SETNX")
            .arg(self.namespaced(key))
            .arg(1)
            .query(&mut self.conn)?;
        Ok(claimed == 1)
    }
}

/// Namespace for one batch's key set: `<root>:<batch>:`.
pub fn batch_namespace(root: &str, batch: &str) -> String {
    format!("{root}:{batch}:")
}
