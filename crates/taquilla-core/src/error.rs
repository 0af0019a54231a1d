//! Error types for taquilla

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
