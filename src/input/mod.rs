mod decoder;
mod reader;
mod request;

pub use decoder::{Decoder, ProtobufDecoder};
pub use reader::{Reader, UdpReader, MAX_DATAGRAM_SIZE};
pub use request::Request;
