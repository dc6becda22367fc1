use crate::config::SurrealDbConfig;

use include_dir::{Dir, include_dir};
use surrealdb::{
    Error, Surreal,
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
};
use surrealdb_migrations::MigrationRunner;

pub const MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migration");

pub async fn connect(db_config: &SurrealDbConfig) -> Result<Surreal<Client>, Error> {
    let db = Surreal::new::<Ws>(format!("{}:{}", db_config.host, db_config.port)).await?;

    db.signin(Root {
        username: db_config.username.as_str(),
        password: db_config.password.as_str(),
    })
    .await?;

    db.use_ns(db_config.namespace.as_str())
        .use_db(db_config.database.as_str())
        .await?;

    tracing::info!(
        host = %db_config.host,
        port = db_config.port,
        namespace = %db_config.namespace,
        "connected to surrealdb"
    );

    Ok(db)
}

/// Applies the embedded `kv` schema.
pub async fn migrate(db: &Surreal<Client>) -> Result<(), String> {
    MigrationRunner::new(db)
        .load_files(&MIGRATIONS_DIR)
        .up()
        .await
        .map_err(|err| err.to_string())
}
