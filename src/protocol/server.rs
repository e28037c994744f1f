use std::net::{TcpListener, TcpStream};

use log::{debug, info, warn};

use crate::{
    Config,
    store::{StorageGateway, schema},
};

use super::{Command, FrameTransport, ThreadPool, TransportError};

const WORKERS: usize = 16;

/// Accept loop over the listening socket.
///
/// Each accepted connection becomes one session on the worker pool; the
/// acceptor never waits for a session to finish. A session failing, however
/// badly, only ever costs that one client its connection.
pub struct SqlServer {
    config: Config,
    gateway: StorageGateway,
    pool: ThreadPool,
}

impl SqlServer {
    /// Bootstrap the store schema and prepare the worker pool.
    pub fn new(config: Config) -> Result<Self, rusqlite::Error> {
        schema::bootstrap(&config.store)?;
        Ok(Self {
            gateway: StorageGateway::new(config.store.clone()),
            config,
            pool: ThreadPool::new(WORKERS),
        })
    }

    /// Bind the listening socket and accept until the process is stopped.
    pub fn listen(self) -> Result<(), TransportError> {
        let listener = TcpListener::bind(self.config.address)?;
        info!("listening at {}", self.config.address);
        self.serve(listener)
    }

    fn serve(self, listener: TcpListener) -> Result<(), TransportError> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let gateway = self.gateway.clone();
                    self.pool.execute(move || {
                        if let Err(e) = handle_connection(stream, gateway) {
                            warn!("connection ended abruptly: {e}");
                        }
                    });
                }
                Err(e) => warn!("broken connection: {e:?}"),
            }
        }
        Ok(())
    }
}

/// One session: receive, classify, dispatch, respond, until the peer hangs
/// up. Storage failures come back as payloads and keep the loop alive; a
/// transport failure ends the session and drops the socket.
fn handle_connection(stream: TcpStream, gateway: StorageGateway) -> Result<(), TransportError> {
    let peer = stream.peer_addr()?;
    info!("client connected from {peer}");

    let mut transport = FrameTransport::new(stream);
    loop {
        let Some(message) = transport.receive()? else {
            break;
        };
        debug!("received: {message}");

        let payload = match Command::from(message) {
            Command::Query(sql) => gateway.execute_query(&sql),
            Command::Mutation(sql) => gateway.execute_mutation(&sql),
        };
        transport.send(&payload)?;
    }

    info!("client {peer} disconnected");
    Ok(())
}
