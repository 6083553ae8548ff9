//! Processor configuration records
//!
//! Both records are fixed at construction. Their fields are recognized and
//! carried through settings files, but no processing step reads them yet:
//! batching, timeouts, retries and database connections are reserved.

use serde::{Deserialize, Serialize};

/// Processing limits (reserved)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Items per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Per-batch timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Retry attempts for a failed item
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
}

const fn default_batch_size() -> usize {
    100
}

const fn default_timeout_seconds() -> u64 {
    30
}

const fn default_retry_count() -> u32 {
    3
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            timeout_seconds: default_timeout_seconds(),
            retry_count: default_retry_count(),
        }
    }
}

/// Database connection parameters (reserved)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Server host name
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database name
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "testdb".to_string(),
        }
    }
}
