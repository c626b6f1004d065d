use std::str::FromStr;

use sqlx::MySqlPool;
use sqlx::mysql::MySqlConnectOptions;

use crate::config::Config;

pub async fn init_db(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    let mut options = MySqlConnectOptions::from_str(&config.database_url)?;
    if let Some(key) = &config.database_key {
        options = options.password(key);
    }

    MySqlPool::connect_with(options).await
}
