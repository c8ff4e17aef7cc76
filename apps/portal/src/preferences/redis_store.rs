use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::info;

use crate::errors::AppError;
use crate::preferences::PreferenceStore;

const KEY_PREFIX: &str = "skillmatch:";
/// Set holding every key this store has written, so `clear` never scans.
const INDEX_KEY: &str = "skillmatch:__keys";

/// Redis-backed store for deployments that run more than one portal process
/// against the same browser profile.
#[derive(Clone)]
pub struct RedisPreferenceStore {
    conn: MultiplexedConnection,
}

impl RedisPreferenceStore {
    pub async fn connect(url: &str) -> Result<Self, AppError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Redis preference store connected");
        Ok(Self { conn })
    }
}

fn namespaced(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

#[async_trait]
impl PreferenceStore for RedisPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(namespaced(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        let full = namespaced(key);
        redis::pipe()
            .atomic()
            .set(&full, value)
            .ignore()
            .sadd(INDEX_KEY, &full)
            .ignore()
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        let full = namespaced(key);
        redis::pipe()
            .atomic()
            .del(&full)
            .ignore()
            .srem(INDEX_KEY, &full)
            .ignore()
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        let written: Vec<String> = conn.smembers(INDEX_KEY).await?;
        let mut pipe = redis::pipe();
        pipe.atomic();
        for key in &written {
            pipe.del(key).ignore();
        }
        pipe.del(INDEX_KEY).ignore();
        pipe.query_async::<_, ()>(&mut conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(namespaced("theme"), "skillmatch:theme");
        assert!(INDEX_KEY.starts_with(KEY_PREFIX));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        assert!(matches!(
            RedisPreferenceStore::connect("not-a-redis-url").await,
            Err(AppError::Redis(_))
        ));
    }
}
