//! Error taxonomy shared by the foodpick crates

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Venue store query failed
    #[cfg(feature = "sqlx")]
    #[error("Venue store error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}
