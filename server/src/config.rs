use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context};
use connect_four::{DEFAULT_DEPTH, MAX_DEPTH};

const ADDR_VAR: &str = "CONNECT_FOUR_ADDR";
const DEPTH_VAR: &str = "CONNECT_FOUR_DEPTH";
const STATIC_DIR_VAR: &str = "CONNECT_FOUR_STATIC_DIR";
const LOG_VAR: &str = "CONNECT_FOUR_LOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub depth: usize,
    pub static_dir: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            depth: DEFAULT_DEPTH,
            static_dir: PathBuf::from("web/dist"),
            log_filter: "info,tower_http=debug".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(addr) = lookup(ADDR_VAR) {
            config.addr = addr
                .parse()
                .with_context(|| format!("{ADDR_VAR}={addr} is not a socket address"))?;
        }
        if let Some(depth) = lookup(DEPTH_VAR) {
            config.depth = depth
                .parse()
                .with_context(|| format!("{DEPTH_VAR}={depth} is not a number"))?;
        }
        if let Some(dir) = lookup(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            bail!("{DEPTH_VAR} must be between 1 and {MAX_DEPTH}, got {}", self.depth);
        }
        Ok(())
    }
}
