use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, Registration},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString, rand_core::OsRng,
    },
};

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    #[tracing::instrument(skip_all, fields(email = %registration.email, role = ?registration.role))]
    async fn register(&self, registration: Registration) -> AppResult<Account> {
        registration.validate()?;

        if self.repository.is_account(&registration.email).await? {
            return Err(AppError::Conflict("Account already exists"));
        }

        let account = Account {
            name: registration.name,
            email: registration.email,
            password: encrypt_password(&registration.password)?,
            role: registration.role,
            created_at: Utc::now(),
        };

        // a concurrent signup may have claimed the email since the check above
        if !self.repository.insert(&account).await? {
            return Err(AppError::Conflict("Account already exists"));
        }

        tracing::info!("account registered");

        Ok(account)
    }
}

pub fn encrypt_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash);

    argon2.verify_password(password.as_bytes(), &hash?)
}
