use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::{Deserialize, Serialize};

use crate::config::settings::{section, ConfigError, ConfigMap};

/// Cache connection settings.
///
/// Connection parameters (host, port, db index, credentials) travel in the
/// URL and are forwarded to the client verbatim.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    pub url: String,
}

impl CacheConfig {
    /// Read the `CACHE` section of a loaded config
    pub fn from_config(config: &ConfigMap) -> Result<Self, ConfigError> {
        section(config, "CACHE")
    }
}

/// Redis client wrapper with connection pooling
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// Create a new Redis client from the cache config
    ///
    /// Connection failures propagate from the redis client unchanged.
    pub async fn connect(config: &CacheConfig) -> Result<Self, redis::RedisError> {
        log::info!("Initializing Redis connection...");
        log::info!("Redis URL: {}", Self::mask_password(&config.url));

        let client = Client::open(config.url.as_str())?;
        let manager = ConnectionManager::new(client).await?;

        log::info!("Redis connection initialized successfully");

        Ok(Self { manager })
    }

    /// Test Redis connection
    pub async fn test_connection(&self) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        let _: String = redis::cmd("PING").query_async::<String>(&mut conn).await?;
        log::info!("Redis connection test successful");
        Ok(())
    }

    /// Set a key-value pair with expiration (in seconds)
    pub async fn set_ex(
        &self,
        key: &str,
        value: &str,
        expiration_seconds: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.set_ex(key, value, expiration_seconds).await
    }

    /// Get a value by key
    pub async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.get(key).await
    }

    /// Delete a key
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }

    /// Check if a key exists
    pub async fn exists(&self, key: &str) -> Result<bool, redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.exists(key).await
    }

    /// Mask password in Redis URL for logging
    fn mask_password(url: &str) -> String {
        if let Some(at_pos) = url.rfind('@') {
            if let Some(colon_pos) = url[..at_pos].rfind(':') {
                let mut masked = url.to_string();
                masked.replace_range(colon_pos + 1..at_pos, "****");
                return masked;
            }
        }
        url.to_string()
    }
}

// Implement Debug manually to avoid leaking credentials
impl std::fmt::Debug for RedisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisClient")
            .field("manager", &"ConnectionManager { ... }")
            .finish()
    }
}
