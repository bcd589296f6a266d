use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "skinshop-rs",
    version,
    about = "Minimal skin-trading storefront catalog server"
)]
pub struct Cli {
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    #[arg(
        long = "data-dir",
        short = 'd',
        visible_alias = "data-folder",
        value_name = "DIR"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(long = "assets-root", value_name = "DIR")]
    pub assets_root: Option<PathBuf>,

    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    pub assets_root: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    bind: Option<SocketAddr>,
    #[serde(alias = "data_folder")]
    data_dir: Option<PathBuf>,
    assets_root: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let from_file = read_file_config(cli.config.as_deref())?;

        let bind = cli
            .bind
            .or(from_file.bind)
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8480)));
        let data_dir = cli
            .data_dir
            .or(from_file.data_dir)
            .unwrap_or_else(|| PathBuf::from("./data"));
        let assets_root = cli
            .assets_root
            .or(from_file.assets_root)
            .unwrap_or_else(|| PathBuf::from("./assets"));

        Ok(Self {
            bind,
            data_dir,
            assets_root,
        })
    }
}

fn read_file_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
