pub mod config;
pub mod host;
pub mod protocol;

pub use config::HostConfig;
pub use host::{Host, HostError};
pub use protocol::{Request, Response};
