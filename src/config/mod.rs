// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from built-in defaults and the environment.
    ///
    /// `PORT`, when set and non-empty, overrides the listening port. It is
    /// the variable container platforms inject, so it wins over every other
    /// source. An unparseable value is a startup error.
    pub fn load() -> Result<Self, config::ConfigError> {
        let port = std::env::var("PORT").ok();
        Self::load_with_port(port.as_deref())
    }

    fn load_with_port(port: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .add_source(config::Environment::with_prefix("SERVER"));

        if let Some(port) = port {
            if !port.is_empty() {
                builder = builder.set_override("server.port", port)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::load_with_port(None).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn test_port_override() {
        let cfg = Config::load_with_port(Some("9090")).unwrap();
        assert_eq!(cfg.server.port, 9090);
    }

    #[test]
    fn test_empty_port_falls_back_to_default() {
        let cfg = Config::load_with_port(Some("")).unwrap();
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(Config::load_with_port(Some("not-a-port")).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_with_port(Some("9090")).unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 9090);
        assert!(addr.ip().is_unspecified());
    }
}
