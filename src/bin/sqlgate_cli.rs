use clap::Parser;
use std::{
    error::Error,
    io::{self, BufRead, Write},
    net::{SocketAddr, TcpStream},
};

use sqlgate::FrameTransport;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Server address to connect to
    address: SocketAddr,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let stream = TcpStream::connect(cli.address)?;
    println!("connected to {}", cli.address);
    let mut transport = FrameTransport::new(stream);

    loop {
        let mut line = String::default();

        write!(&mut stdout, "> ")?;
        stdout.flush()?;

        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let statement = line.trim_end();

        if statement == ".exit" {
            break;
        }
        if statement.is_empty() {
            continue;
        }

        transport.send(statement)?;
        match transport.receive()? {
            Some(response) => println!("{response}"),
            None => {
                eprintln!("server closed the connection");
                break;
            }
        }
    }

    Ok(())
}
