//! UDP datagram output for hosts with `std`

use std::io;
use std::net::{ToSocketAddrs, UdpSocket};

use super::PixelSink;

/// Connected, non-blocking UDP socket
///
/// A send that would block is reported as an error and the datagram is
/// dropped; the transport never waits on the network.
#[derive(Debug)]
pub struct UdpSink {
    socket: UdpSocket,
}

impl UdpSink {
    /// Bind to `local` and direct every datagram at `remote`
    pub fn connect(local: impl ToSocketAddrs, remote: impl ToSocketAddrs) -> io::Result<Self> {
        let socket = UdpSocket::bind(local)?;
        socket.connect(remote)?;
        socket.set_nonblocking(true)?;
        Ok(Self { socket })
    }

    pub fn from_socket(socket: UdpSocket) -> io::Result<Self> {
        socket.set_nonblocking(true)?;
        Ok(Self { socket })
    }

    pub fn socket(&self) -> &UdpSocket {
        &self.socket
    }
}

impl PixelSink for UdpSink {
    type Error = io::Error;

    async fn send(&mut self, datagram: &[u8]) -> Result<(), Self::Error> {
        self.socket.send(datagram).map(|_| ())
    }
}
