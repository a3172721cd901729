use std::{path::PathBuf, str::FromStr};

use fridgekit_shared::{SqliteStore, State};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State<SqliteStore>> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    fridgekit_db::migrate(&pool).await?;

    Ok(State::new(SqliteStore::new(pool)))
}
