pub mod logging;
pub mod settings;

pub use logging::{configure_logging, LoggingConfig};
pub use settings::{load_app_config, section, ConfigError, ConfigMap};
