pub mod client;

pub use client::{CacheConfig, RedisClient};
