//! Persistent store access.
//!
//! The durable state behind the protocol lives in a single SQLite file. This
//! module owns every interaction with it: the [`StorageGateway`] executes
//! classified commands one connection per call, and [`schema`] creates the
//! base tables the first time a server starts over a fresh store.
//!
//! Concurrency control is delegated entirely to SQLite's own file locking;
//! sessions never share a connection, so the store file is the only shared
//! resource in the process.
pub mod gateway;
pub mod schema;

pub use gateway::StorageGateway;
