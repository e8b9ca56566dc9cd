use std::net::{SocketAddr, ToSocketAddrs};

use structopt::StructOpt;

use crate::error::Result;

#[derive(Debug, StructOpt)]
#[structopt(name = "pinba-dump", about = "Dump Pinba requests received over UDP")]
pub struct CliOpt {
    /// Local endpoint to listen on, host:port
    #[structopt(
        long = "in",
        short = "i",
        default_value = "0.0.0.0:30002",
        parse(try_from_str = parse_listen_addr)
    )]
    pub listen: SocketAddr,

    /// Print request details and debug logs
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

// Listens on IPv4 only, so take the first IPv4 address the endpoint resolves to.
fn parse_listen_addr(s: &str) -> Result<SocketAddr> {
    s.to_socket_addrs()
        .map_err(|e| ("can't resolve address", e))?
        .find(SocketAddr::is_ipv4)
        .ok_or_else(|| format!("no IPv4 address for '{}'", s).into())
}
