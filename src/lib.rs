pub mod config;
pub mod protocol;
pub mod store;

pub use config::Config;
pub use protocol::{Command, FrameTransport, SqlServer};
pub use store::StorageGateway;
