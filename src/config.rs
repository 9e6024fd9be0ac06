// Configuration module
// Layers an optional config.toml and SERVER_* environment variables over
// coded defaults. The defaults reproduce the fixed surface of the original
// server: port 30000, document root = working directory, index.html index.

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub files: FilesConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

/// Where request paths are resolved.
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Directory request paths are resolved against.
    pub document_root: String,
    /// Document served for the root path.
    pub index_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

impl Config {
    /// Load configuration from `config.toml` (optional) and environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 30000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("files.document_root", ".")?
            .set_default("files.index_file", "index.html")?
            .set_default("http.server_name", "Emograph/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared, read-only application state. Requests are stateless; this only
/// carries the loaded configuration.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_surface() {
        let cfg = Config::load_from("does-not-exist").expect("defaults apply");
        assert_eq!(cfg.server.port, 30000);
        assert_eq!(cfg.files.document_root, ".");
        assert_eq!(cfg.files.index_file, "index.html");
        assert!(cfg.logging.access_log);
        assert!(cfg.server.workers.is_none());
        assert_eq!(cfg.performance.max_connections, None);
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        let cfg = Config::load_from("does-not-exist").expect("defaults apply");
        let addr = cfg.get_socket_addr().expect("valid address");
        assert_eq!(addr.port(), 30000);
        assert!(addr.ip().is_loopback());
    }
}
