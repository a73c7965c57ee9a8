pub mod listing;
pub mod models;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use util::{config, paths};

/// Opens the connection pool described by `DATABASE_PATH`.
///
/// A plain file path is opened in read-write-create mode after its parent directory
/// has been created; SQLite does not create intermediate directories itself.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = paths::database_url(&path_or_url);

    if url != path_or_url {
        if let Err(err) = paths::ensure_parent_dir(&path_or_url) {
            tracing::warn!(path = %path_or_url, error = %err, "Could not create database directory");
        }
    }

    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(false);

    Database::connect(options).await
}
