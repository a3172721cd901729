use std::{path::PathBuf, str::FromStr};

use fridgekit_shared::{ManualClock, SqliteStore, State};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use time::{Date, macros::date};

pub const TODAY: Date = date!(2024 - 05 - 20);

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<(State<SqliteStore>, ManualClock)> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    fridgekit_db::migrate(&pool).await?;

    let clock = ManualClock::at(TODAY);
    let state = State::new(SqliteStore::new(pool)).with_clock(clock.clone());

    Ok((state, clock))
}

#[allow(dead_code)]
pub async fn enable_auto_delete(state: &State<SqliteStore>) -> anyhow::Result<()> {
    let settings = fridgekit_settings::Command::new(state.clone());
    let current = settings.load().await?;
    settings
        .update(fridgekit_settings::UpdateInput {
            theme: current.theme,
            user_name: current.user_name,
            auto_delete_expired: true,
            cooking_level: current.cooking_level,
            soon_days: current.soon_days,
        })
        .await?;

    Ok(())
}
