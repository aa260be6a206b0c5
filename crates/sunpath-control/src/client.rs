//! Blocking client for the control server

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::ControlError;
use crate::protocol::{ControlCommand, ControlResponse};

/// One TCP connection to a running control server.
pub struct ControlClient {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl ControlClient {
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self, ControlError> {
        let stream = TcpStream::connect(addr)?;
        stream.set_read_timeout(Some(Duration::from_secs(30)))?;
        let writer = stream.try_clone()?;
        Ok(Self {
            reader: BufReader::new(stream),
            writer,
        })
    }

    /// Send one command and wait for its response line.
    pub fn send(&mut self, cmd: &ControlCommand) -> Result<ControlResponse, ControlError> {
        let mut json_str = serde_json::to_string(cmd)?;
        json_str.push('\n');
        self.writer.write_all(json_str.as_bytes())?;
        self.writer.flush()?;

        let mut response_line = String::new();
        if self.reader.read_line(&mut response_line)? == 0 {
            return Err(ControlError::Closed);
        }
        Ok(serde_json::from_str(&response_line)?)
    }
}
