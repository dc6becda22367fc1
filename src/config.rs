use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
    pub surrealdb: SurrealDbConfig,
    pub jsonwebtoken: JsonWebTokenConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct JsonWebTokenConfig {
    pub public_keyfile: String,
    pub private_keyfile: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans over OTLP/gRPC in addition to stdout.
    pub otlp: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    SurrealDb,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

impl AppConfig {
    fn defaults() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "helpdesk".to_string(),
            },
            http: HttpConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                allowed_origin: "http://localhost:8080".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                otlp: false,
            },
            store: StoreConfig {
                backend: StoreBackend::Memory,
            },
            jsonwebtoken: JsonWebTokenConfig {
                public_keyfile: "config/public_key.pem".to_string(),
                private_keyfile: "config/private_key.pem".to_string(),
            },
            surrealdb: SurrealDbConfig {
                host: "localhost".to_string(),
                port: 8000,
                username: "root".to_string(),
                password: "root".to_string(),
                namespace: "helpdesk".to_string(),
                database: "helpdesk".to_string(),
                migration: true,
            },
        }
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::defaults()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        AppConfig::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_use_memory_store() {
        Jail::expect_with(|_| {
            let config = AppConfig::load()?;

            assert_eq!(config.store.backend, StoreBackend::Memory);
            assert_eq!(config.http.port, 8080);
            assert!(!config.logging.otlp);

            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_overrides() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [store]
                backend = "surrealdb"

                [surrealdb]
                port = 9000
                "#,
            )?;
            jail.set_env("APP_HTTP__PORT", "9090");
            jail.set_env("APP_LOGGING__LEVEL", "debug");

            let config = AppConfig::load()?;

            assert_eq!(config.store.backend, StoreBackend::SurrealDb);
            assert_eq!(config.surrealdb.port, 9000);
            assert_eq!(config.surrealdb.namespace, "helpdesk");
            assert_eq!(config.http.port, 9090);
            assert_eq!(config.logging.level, "debug");

            Ok(())
        });
    }
}
