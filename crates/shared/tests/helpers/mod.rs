use std::{path::PathBuf, str::FromStr};

use fridgekit_shared::SqliteStore;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<SqliteStore> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    fridgekit_db::migrate(&pool).await?;

    Ok(SqliteStore::new(pool))
}
