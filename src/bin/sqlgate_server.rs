use std::{error::Error, net::SocketAddr, path::PathBuf, process};

use clap::Parser;
use log::info;
use sqlgate::{Config, SqlServer};

#[derive(Debug, Parser)]
struct Cli {
    /// Path to the persistent store file
    store: PathBuf,
    /// Listen for new connections at address
    address: SocketAddr,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();

    // Outstanding sessions are not joined on shutdown; releasing the
    // listening socket is all that is required.
    ctrlc::set_handler(|| {
        info!("shutting down");
        process::exit(0);
    })?;

    let server = SqlServer::new(Config::new(cli.address, cli.store))?;
    server.listen()?;
    Ok(())
}
