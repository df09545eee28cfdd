pub mod pool;

pub use pool::{DatabaseConfig, DbPool};
