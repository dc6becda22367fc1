use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::session::Session;
use crate::domain::repositories::repository::RepositoryResult;
use crate::domain::repositories::session::SessionRepository;
use crate::domain::repositories::store::{KeyValueStore, SESSION_KEY};
use crate::infrastructure::models::session::StoredSession;

pub struct SessionRepositoryImpl {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn save(&self, session: &Session) -> RepositoryResult<()> {
        let record = serde_json::to_string(&StoredSession::from(session))?;

        self.store.set(SESSION_KEY, record).await
    }

    async fn load(&self) -> RepositoryResult<Option<Session>> {
        match self.store.get(SESSION_KEY).await? {
            Some(record) => Ok(Some(
                serde_json::from_str::<StoredSession>(&record)?.into(),
            )),
            None => Ok(None),
        }
    }

    async fn clear(&self) -> RepositoryResult<()> {
        self.store.delete(SESSION_KEY).await
    }
}
