// File: crates/finboard-core/src/error.rs
// Summary: Crate error type for the fallible edges (config, file output, rasterization).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("raster: {0}")]
    Raster(String),
}

pub type Result<T> = std::result::Result<T, Error>;
