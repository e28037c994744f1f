use std::io::{self, Read, Write};

use thiserror::Error;

/// Marks the end of one message in either direction.
const TERMINATOR: u8 = 0x00;
const CHUNK_SIZE: usize = 1024;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Transport IO Error: {0}")]
    Io(#[from] io::Error),
}

/// Sentinel-byte framing over a bidirectional byte stream.
pub struct FrameTransport<T: Read + Write> {
    stream: T,
}

impl<T: Read + Write> FrameTransport<T> {
    pub fn new(stream: T) -> Self {
        Self { stream }
    }

    /// Read one message, accumulating chunks until the terminator appears.
    ///
    /// Returns `None` when the peer shuts down its sending side before a
    /// terminator is seen. Bytes following the terminator in the same read
    /// are discarded; one message per cycle. Undecodable sequences are
    /// replaced, not rejected.
    pub fn receive(&mut self) -> Result<Option<String>, TransportError> {
        let mut data = Vec::new();
        let mut chunk = [0u8; CHUNK_SIZE];

        loop {
            let read = self.stream.read(&mut chunk)?;
            if read == 0 {
                return Ok(None);
            }
            data.extend_from_slice(&chunk[..read]);

            if let Some(at) = data.iter().position(|&b| b == TERMINATOR) {
                return Ok(Some(String::from_utf8_lossy(&data[..at]).into_owned()));
            }
        }
    }

    /// Write one message followed by the terminator as a single frame.
    pub fn send(&mut self, text: &str) -> Result<(), TransportError> {
        let mut frame = Vec::with_capacity(text.len() + 1);
        frame.extend_from_slice(text.as_bytes());
        frame.push(TERMINATOR);

        self.stream.write_all(&frame)?;
        self.stream.flush()?;
        Ok(())
    }
}
