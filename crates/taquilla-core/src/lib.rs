//! taquilla-core: Core library for the taquilla ticket tracker
//!
//! Provides the ticket data model and the in-memory repository behind the
//! console menu. No persistence, no daemon - ticket state lives for the
//! lifetime of the process.

pub mod config;
pub mod error;
pub mod id;
pub mod repository;
pub mod ticket;

pub use config::Config;
pub use error::Error;
pub use id::{DEFAULT_SEED, IdSequence};
pub use repository::Repository;
pub use ticket::{Status, Ticket};

/// Result type for taquilla operations
pub type Result<T> = std::result::Result<T, Error>;
