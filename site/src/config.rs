//! Server settings, read from the environment after `.env` has been loaded.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;

pub const ADDR_VAR: &str = "SITE_ADDR";
pub const DIST_DIR_VAR: &str = "SITE_DIST_DIR";
pub const ASSETS_DIR_VAR: &str = "SITE_ASSETS_DIR";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DIST_DIR: &str = "../dist";
const DEFAULT_ASSETS_DIR: &str = "../assets";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    /// Trunk output, holds `index.html` and the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults are relative to the `site` crate so `cargo run -p site`
    /// works from anywhere in the workspace.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw_addr
            .parse()
            .with_context(|| format!("{ADDR_VAR}={raw_addr:?} is not a socket address"))?;

        let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let dir = |var: &str, default: &str| match lookup(var) {
            Some(value) if !value.trim().is_empty() => PathBuf::from(value),
            _ => crate_dir.join(default),
        };

        Ok(Self {
            addr,
            dist_dir: dir(DIST_DIR_VAR, DEFAULT_DIST_DIR),
            assets_dir: dir(ASSETS_DIR_VAR, DEFAULT_ASSETS_DIR),
        })
    }
}
