//! Configuration module

mod site;

pub use site::CategoryConfig;
pub use site::ConfigError;
pub use site::ServerConfig;
pub use site::SiteConfig;
