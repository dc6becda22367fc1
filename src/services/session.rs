use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use crate::domain::{
    error::{AppError, AppResult},
    models::{account::Credentials, session::Session},
    repositories::{account::AccountRepository, session::SessionRepository},
    services::session::SessionService,
};
use crate::services::account::verify_password;

pub struct SessionServiceImpl {
    accounts: Arc<dyn AccountRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl SessionServiceImpl {
    pub fn new(accounts: Arc<dyn AccountRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { accounts, sessions }
    }
}

#[async_trait]
impl SessionService for SessionServiceImpl {
    #[tracing::instrument(skip_all, fields(email = %credentials.email))]
    async fn login(&self, credentials: Credentials) -> AppResult<Session> {
        credentials.validate()?;

        let account = match self.accounts.find_by_email(&credentials.email).await? {
            Some(account) => account,
            None => return Err(AppError::InvalidCredentials()),
        };

        verify_password(&credentials.password, &account.password)?;

        let session = Session::start(&account, Utc::now());

        self.sessions.save(&session).await?;

        tracing::info!(role = ?session.role, "session started");

        Ok(session)
    }

    #[tracing::instrument(skip_all)]
    async fn logout(&self) -> AppResult<()> {
        self.sessions.clear().await?;

        Ok(())
    }

    async fn restore(&self) -> AppResult<Option<Session>> {
        Ok(self.sessions.load().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::account::{Registration, Role};
    use crate::domain::repositories::store::KeyValueStore;
    use crate::domain::services::account::AccountService;
    use crate::infrastructure::repositories::{
        account::AccountRepositoryImpl, session::SessionRepositoryImpl,
    };
    use crate::infrastructure::stores::memory::MemoryStore;
    use crate::services::account::AccountServiceImpl;
    use rstest::*;

    struct Context {
        store: Arc<MemoryStore>,
        service: SessionServiceImpl,
    }

    #[fixture]
    async fn context() -> Context {
        let store = Arc::new(MemoryStore::new());
        let accounts: Arc<dyn AccountRepository> =
            Arc::new(AccountRepositoryImpl::new(store.clone()));

        AccountServiceImpl::new(accounts.clone())
            .register(Registration {
                name: "Tech".to_string(),
                email: "tech@helpdesk.io".to_string(),
                password: "s3cret".to_string(),
                confirm_password: "s3cret".to_string(),
                role: Role::Technician,
            })
            .await
            .unwrap();

        let sessions = Arc::new(SessionRepositoryImpl::new(store.clone()));

        Context {
            store,
            service: SessionServiceImpl::new(accounts, sessions),
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[rstest]
    #[awt]
    #[tokio::test]
    async fn test_login_persists_session_without_password(#[future] context: Context) {
        let session = context
            .service
            .login(credentials("tech@helpdesk.io", "s3cret"))
            .await
            .unwrap();

        assert_eq!(session.email, "tech@helpdesk.io");
        assert_eq!(session.role, Role::Technician);

        let record = context.store.get("current_user").await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&record).unwrap();

        assert_eq!(value["email"], "tech@helpdesk.io");
        assert_eq!(value["name"], "Tech");
        assert!(value.get("password").is_none());
        assert!(value.get("loginAt").is_some());
    }

    #[rstest]
    #[case::wrong_password("tech@helpdesk.io", "wrong!")]
    #[case::unknown_email("ghost@helpdesk.io", "s3cret")]
    #[awt]
    #[tokio::test]
    async fn test_login_rejects_bad_credentials(
        #[future] context: Context,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let err = context
            .service
            .login(credentials(email, password))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::InvalidCredentials());
        assert!(context.store.get("current_user").await.unwrap().is_none());
    }

    #[rstest]
    #[awt]
    #[tokio::test]
    async fn test_login_requires_both_fields(#[future] context: Context) {
        let err = context
            .service
            .login(credentials("tech@helpdesk.io", ""))
            .await
            .unwrap_err();

        assert_eq!(err.code, 422);

        let fields = serde_json::from_str::<serde_json::Value>(&err.message).unwrap();
        assert_eq!(fields["password"], "Password is required");
        assert!(fields.get("email").is_none());
    }

    #[rstest]
    #[awt]
    #[tokio::test]
    async fn test_restore_then_logout(#[future] context: Context) {
        assert_eq!(context.service.restore().await.unwrap(), None);

        let session = context
            .service
            .login(credentials("tech@helpdesk.io", "s3cret"))
            .await
            .unwrap();

        assert_eq!(context.service.restore().await.unwrap(), Some(session));

        context.service.logout().await.unwrap();
        assert_eq!(context.service.restore().await.unwrap(), None);

        // logging out twice is harmless
        assert!(context.service.logout().await.is_ok());
    }
}
