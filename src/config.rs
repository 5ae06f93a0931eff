//! Server configuration from command-line flags and environment variables.

use clap::Parser;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "ChatGPT App Template - MCP tools and widgets over HTTP", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory holding the built widget assets (globals.css, <widget>.css, <widget>.js)
    #[arg(long, env = "ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log: Option<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The configured assets directory, or one located from the working directory.
    pub fn resolve_assets_dir(&self) -> PathBuf {
        match &self.assets_dir {
            Some(dir) => dir.clone(),
            None => {
                let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                locate_assets_directory(&current_dir)
            }
        }
    }

    /// `--log` wins over `RUST_LOG`; the default is `info`.
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        }
    }
}

/// Attempts to locate the assets directory using a multi-step strategy
pub fn locate_assets_directory(current_dir: &Path) -> PathBuf {
    // Strategy to locate assets:
    // 1. ./assets
    // 2. ../assets (if running from a subdir)
    // 3. Fallback to "assets" relative path

    if current_dir.join("assets").exists() {
        return current_dir.join("assets");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("assets").exists() {
            return parent.join("assets");
        }
    }

    PathBuf::from("assets") // Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_flags() {
        let config = ServerConfig::try_parse_from([
            "chatgpt_app_template",
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
            "--assets-dir",
            "/srv/widgets",
            "--log",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:9100".parse::<SocketAddr>().unwrap());
        assert_eq!(config.resolve_assets_dir(), PathBuf::from("/srv/widgets"));
        assert_eq!(config.log.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_bad_port() {
        let result = ServerConfig::try_parse_from(["chatgpt_app_template", "--port", "http"]);
        assert!(result.is_err());
    }

    #[test]
    fn locates_assets_in_current_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        assert_eq!(locate_assets_directory(dir.path()), dir.path().join("assets"));
    }

    #[test]
    fn locates_assets_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        let nested = dir.path().join("server");
        std::fs::create_dir(&nested).unwrap();
        assert_eq!(locate_assets_directory(&nested), dir.path().join("assets"));
    }

    #[test]
    fn falls_back_to_relative_assets() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(locate_assets_directory(&nested), PathBuf::from("assets"));
    }
}
