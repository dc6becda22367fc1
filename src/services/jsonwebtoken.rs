use crate::domain::error::{AppError, AppResult};
use crate::domain::models::jsonwebtoken::{AccessToken, Claims};
use crate::domain::models::session::Session;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JsonWebTokenError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

const TOKEN_LIFETIME_HOURS: i64 = 1;

#[derive(Clone)]
pub struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    pub fn from_rsa_pem(
        private_key: Vec<u8>,
        public_key: Vec<u8>,
    ) -> Result<Self, JsonWebTokenError> {
        Ok(KeyPair {
            encoding: EncodingKey::from_rsa_pem(&private_key)?,
            decoding: DecodingKey::from_rsa_pem(&public_key)?,
        })
    }
}

pub struct JsonWebTokenServiceImpl {
    keys: KeyPair,
}

impl JsonWebTokenServiceImpl {
    pub fn new(keys: KeyPair) -> Self {
        JsonWebTokenServiceImpl { keys }
    }
}

impl JsonWebTokenService for JsonWebTokenServiceImpl {
    fn generate_token(&self, session: &Session) -> AppResult<AccessToken> {
        let now = Utc::now();

        let expiration = (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp();

        let claims = Claims {
            sub: session.email.to_owned(),
            name: session.name.to_owned(),
            role: session.role,
            login_at: session.login_at.timestamp_millis(),
            exp: expiration as usize,
            iat: now.timestamp() as usize,
        };

        let header = Header::new(Algorithm::RS256);

        let token = encode(&header, &claims, &self.keys.encoding)
            .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

        Ok(AccessToken { token, expiration })
    }

    fn validate_token(&self, token: &str) -> AppResult<Claims> {
        match decode::<Claims>(
            token,
            &self.keys.decoding,
            &Validation::new(Algorithm::RS256),
        ) {
            Ok(token) => Ok(token.claims),
            Err(error) => match error.kind() {
                ErrorKind::ExpiredSignature
                | ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::InvalidIssuer
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => Err(AppError::Unauthorized()),
                _ => Err(AppError::InternalError().trace(&format!("{error:?}"))),
            },
        }
    }
}
