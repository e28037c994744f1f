//! Process-wide configuration.
//!
//! Everything the server needs from its environment is gathered here once at
//! startup and passed down explicitly; nothing else in the crate reads
//! ambient state.
use std::{net::SocketAddr, path::PathBuf};

/// Immutable settings shared by the acceptor and the storage gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the server listens on for client connections.
    pub address: SocketAddr,
    /// Location of the persistent SQLite store.
    pub store: PathBuf,
}

impl Config {
    pub fn new(address: SocketAddr, store: PathBuf) -> Self {
        Self { address, store }
    }
}
