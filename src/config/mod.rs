//! Configuration management

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Directory name used under the platform config dir
const APP_DIR_NAME: &str = "portfolio-site";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Directory holding the compiled web client, served under /assets/client
    #[serde(default = "default_client_dir")]
    pub client_dir: PathBuf,

    /// Module script injected into the page to hydrate it (e.g.
    /// `/assets/client/portfolio.js`). The page is served fully rendered
    /// without it; only the toggle and reveal animation need the client.
    #[serde(default)]
    pub client_script: Option<String>,
}

fn default_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_client_dir() -> PathBuf {
    PathBuf::from("public/client")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            client_dir: default_client_dir(),
            client_script: None,
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.bind_address, self.port))
    }
}

/// Get config directory (PORTFOLIO_CONFIG_DIR or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Load configuration.
///
/// Precedence, highest first: PORTFOLIO_PORT / PORT, other `PORTFOLIO_*`
/// environment variables, `config.*` in the config dir, defaults.
pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("bind_address", default_bind_address())?
        .set_default("client_dir", default_client_dir().to_string_lossy().into_owned())?
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // PORTFOLIO_BIND_ADDRESS, PORTFOLIO_CLIENT_SCRIPT, ...
        .add_source(
            ::config::Environment::with_prefix("PORTFOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // PORTFOLIO_PORT > PORT (container platforms) > config > default
    if let Ok(port) = std::env::var("PORTFOLIO_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const ENV_VARS: &[&str] = &[
        "PORTFOLIO_CONFIG_DIR",
        "PORTFOLIO_PORT",
        "PORT",
        "PORTFOLIO_BIND_ADDRESS",
        "PORTFOLIO_CLIENT_DIR",
        "PORTFOLIO_CLIENT_SCRIPT",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.client_dir, PathBuf::from("public/client"));
        assert!(config.client_script.is_none());
    }

    #[test]
    #[serial]
    fn test_config_file_is_read() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "port = 9100\nbind_address = \"127.0.0.1\"\nclient_script = \"/assets/client/portfolio.js\"\n",
        )
        .unwrap();
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9100);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(
            config.client_script.as_deref(),
            Some("/assets/client/portfolio.js")
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "port = 9100\n").unwrap();
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());
        env::set_var("PORTFOLIO_PORT", "9200");
        env::set_var("PORTFOLIO_BIND_ADDRESS", "127.0.0.1");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9200);
        assert_eq!(config.bind_address, "127.0.0.1");
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn test_portfolio_port_takes_precedence_over_port() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());
        env::set_var("PORT", "3000");
        env::set_var("PORTFOLIO_PORT", "4000");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_socket_addr() {
        let config = Config {
            bind_address: "127.0.0.1".to_string(),
            port: 8081,
            ..Config::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8081");

        let bad = Config {
            bind_address: "not an address".to_string(),
            ..Config::default()
        };
        assert!(bad.socket_addr().is_err());
    }
}
