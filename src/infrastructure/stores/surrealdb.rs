use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::repositories::repository::RepositoryResult;
use crate::domain::repositories::store::KeyValueStore;
use crate::infrastructure::models::entry::{SurrealEntry, SurrealKey};

pub struct SurrealStore {
    db: Arc<Surreal<Client>>,
}

impl SurrealStore {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const KV: &str = "kv";

#[async_trait]
impl KeyValueStore for SurrealStore {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        let entry: Option<SurrealEntry> = self.db.select((KV, key.to_owned())).await?;

        Ok(entry.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: String) -> RepositoryResult<()> {
        let _: Option<SurrealEntry> = self
            .db
            .upsert((KV, key.to_owned()))
            .content(SurrealEntry {
                key: key.to_owned(),
                value,
            })
            .await?;

        Ok(())
    }

    async fn insert_if_absent(&self, key: &str, value: String) -> RepositoryResult<bool> {
        let created: Result<Option<SurrealEntry>, surrealdb::Error> = self
            .db
            .create((KV, key.to_owned()))
            .content(SurrealEntry {
                key: key.to_owned(),
                value,
            })
            .await;

        match created {
            Ok(_) => Ok(true),
            // CREATE refuses an existing record id
            Err(_) if self.get(key).await?.is_some() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete(&self, key: &str) -> RepositoryResult<()> {
        let _: Option<SurrealEntry> = self.db.delete((KV, key.to_owned())).await?;

        Ok(())
    }

    async fn list(&self, prefix: &str) -> RepositoryResult<Vec<String>> {
        let keys: Vec<SurrealKey> = self
            .db
            .query("SELECT key FROM type::table($table) WHERE string::starts_with(key, $prefix) ORDER BY key ASC")
            .bind(("table", KV))
            .bind(("prefix", prefix.to_owned()))
            .await?
            .take(0)?;

        Ok(keys.into_iter().map(|k| k.key).collect())
    }
}
