use serde::{Deserialize, Serialize};

/// One row of the `kv` table. The record id mirrors `key`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurrealEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SurrealKey {
    pub key: String,
}
