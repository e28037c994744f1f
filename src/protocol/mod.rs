//! Client-server communication protocol.
//!
//! This module defines the communication protocol used between SQL clients
//! and the gateway server: message framing, command classification, and the
//! connection-handling loop itself.
//!
//! # Overview
//!
//! The protocol is deliberately minimal. A client opens a TCP connection and
//! holds it for as long as it likes; each request is a UTF-8 SQL string
//! terminated by a single NUL byte, and each request produces exactly one
//! NUL-terminated UTF-8 response. There is no handshake, no length prefix,
//! and no pipelining: within one connection, the n-th response always
//! answers the n-th request.
//!
//! # Key Components
//!
//! - [`FrameTransport`]: Sentinel-byte framing over any bidirectional stream
//!   (e.g. TCP).
//! - [`Command`]: Classification of a decoded message as a row-returning
//!   query or a state-changing mutation.
//! - [`SqlServer`]: The accept loop; hands each connection to a bounded
//!   worker pool and returns to accepting.
//!
//! # Wire Format
//!
//! Both directions carry NUL-terminated UTF-8 text:
//!
//! - Request: any SQL statement. A payload containing the sentinel byte is
//!   truncated at its first occurrence.
//! - Response: `done` for a successful mutation, space-joined fields and
//!   newline-joined rows for a successful query (empty string for zero
//!   rows), or `Error: ` followed by the engine's description for any
//!   failure.
//!
//! Undecodable byte sequences in a request are replaced rather than
//! rejected, so a framing-level decode problem never costs a client its
//! connection.
//!
//! # See Also
//!
//! - [`store`](crate::store): Gateway that ultimately executes classified
//!   commands against the persistent store.
mod command;
mod server;
mod thread;
mod transport;

use thread::ThreadPool;

pub use command::Command;
pub use server::SqlServer;
pub use transport::{FrameTransport, TransportError};
