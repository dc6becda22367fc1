use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::repository::RepositoryResult;
use crate::domain::repositories::store::KeyValueStore;

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> RepositoryResult<()> {
        self.entries.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn insert_if_absent(&self, key: &str, value: String) -> RepositoryResult<bool> {
        match self.entries.write().await.entry(key.to_owned()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(true)
            }
        }
    }

    async fn delete(&self, key: &str) -> RepositoryResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> RepositoryResult<Vec<String>> {
        let entries = self.entries.read().await;

        Ok(entries
            .range(prefix.to_owned()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.to_owned())
            .collect())
    }
}
