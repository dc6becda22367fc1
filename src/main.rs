mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod services;
mod telemetry;

use config::{AppConfig, StoreBackend, StoreConfig, SurrealDbConfig};
use container::Container;
use domain::repositories::store::KeyValueStore;
use infrastructure::databases::surrealdb;
use infrastructure::stores::{memory::MemoryStore, surrealdb::SurrealStore};
use services::jsonwebtoken::KeyPair;

use actix_web::HttpServer;
use std::fs;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Migration(String),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
    #[error(transparent)]
    JsonWebToken(#[from] jsonwebtoken::errors::Error),
    #[error("{0}: {1}")]
    ReadKey(String, String),
}

async fn open_store(
    store_config: &StoreConfig,
    db_config: &SurrealDbConfig,
) -> Result<Arc<dyn KeyValueStore>, StartupError> {
    match store_config.backend {
        StoreBackend::Memory => {
            tracing::warn!("using the in-memory store, data is lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::SurrealDb => {
            let conn = surrealdb::connect(db_config).await?;

            if db_config.migration {
                surrealdb::migrate(&conn)
                    .await
                    .map_err(StartupError::Migration)?;
            }

            Ok(Arc::new(SurrealStore::new(Arc::new(conn))))
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;

    let provider = telemetry::configure(&config.service, &config.logging)?;

    let store = open_store(&config.store, &config.surrealdb).await?;

    let private_key = read_key(&config.jsonwebtoken.private_keyfile)?;
    let public_key = read_key(&config.jsonwebtoken.public_keyfile)?;

    let keys = KeyPair::from_rsa_pem(private_key, public_key)?;

    let container = Arc::new(Container::new(store, keys));
    let allowed_origin = config.http.allowed_origin.to_owned();

    tracing::info!(host = %config.http.host, port = config.http.port, "listening");

    HttpServer::new(move || app::create(Arc::clone(&container), allowed_origin.clone()))
        .bind((config.http.host.as_str(), config.http.port))?
        .run()
        .await?;

    telemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}

fn read_key(keyfile: &str) -> Result<Vec<u8>, StartupError> {
    fs::read(keyfile).map_err(|err| StartupError::ReadKey(err.to_string(), keyfile.to_string()))
}
