use std::io;

use air_host::{Host, HostConfig};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_env("AIR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = HostConfig::from_env();
    let host = Host::new(config).map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    host.serve_stdio()
}
