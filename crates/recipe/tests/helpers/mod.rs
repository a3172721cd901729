use std::{path::PathBuf, str::FromStr};

use fridgekit_shared::{CookingLevel, SqliteStore, State};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State<SqliteStore>> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    fridgekit_db::migrate(&pool).await?;

    Ok(State::new(SqliteStore::new(pool)))
}

pub async fn set_cooking_level(
    state: &State<SqliteStore>,
    level: CookingLevel,
) -> anyhow::Result<()> {
    let settings = fridgekit_settings::Command::new(state.clone());
    let current = settings.load().await?;
    settings
        .update(fridgekit_settings::UpdateInput {
            theme: current.theme,
            user_name: current.user_name,
            auto_delete_expired: current.auto_delete_expired,
            cooking_level: level,
            soon_days: current.soon_days,
        })
        .await?;

    Ok(())
}
