use std::io;
use std::net::{SocketAddr, UdpSocket};

/// Largest datagram the reader accepts in one receive.
pub const MAX_DATAGRAM_SIZE: usize = 65536;

pub trait Reader {
    /// Reads one datagram into `buf`. `Ok(None)` means the transport is
    /// closed and no more datagrams will arrive.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>>;
}

pub struct UdpReader {
    socket: UdpSocket,
}

impl UdpReader {
    pub fn bind(addr: SocketAddr) -> io::Result<Self> {
        Ok(Self {
            socket: UdpSocket::bind(addr)?,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl Reader for UdpReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        let (len, peer) = self.socket.recv_from(buf)?;
        tracing::debug!(len, %peer, "datagram received");
        Ok(Some(len))
    }
}
