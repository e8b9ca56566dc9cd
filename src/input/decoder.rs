use prost::Message;

use super::request::Request;
use crate::error::Result;

pub trait Decoder {
    fn decode(&self, buf: &[u8]) -> Result<Request>;
}

pub struct ProtobufDecoder {}

impl ProtobufDecoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ProtobufDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for ProtobufDecoder {
    fn decode(&self, buf: &[u8]) -> Result<Request> {
        Request::decode(buf).map_err(|e| ("protobuf decoding failed", e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protobuf_decoder_decode() -> std::result::Result<(), String> {
        let request = Request {
            hostname: "web1".into(),
            server_name: "example.com".into(),
            script_name: "/index.php".into(),
            request_time: 0.25,
            timer_value: vec![0.5],
            timer_hit_count: vec![3],
            timer_tag_count: vec![1],
            timer_tag_name: vec![0],
            timer_tag_value: vec![1],
            dictionary: vec!["group".into(), "db".into()],
            status: Some(200),
            ..Default::default()
        };

        let decoded = ProtobufDecoder::new().decode(&request.encode_to_vec())?;
        assert_eq!(decoded, request);
        assert_eq!(decoded.memory_footprint, None);
        assert_eq!(decoded.schema, None);
        Ok(())
    }

    #[test]
    fn test_protobuf_decoder_packed_repeated() -> std::result::Result<(), String> {
        // Field 11 (timer_value), packed: two little-endian floats 0.5 and 1.5.
        let buf = [
            0x5a, 0x08, 0x00, 0x00, 0x00, 0x3f, 0x00, 0x00, 0xc0, 0x3f,
        ];
        let decoded = ProtobufDecoder::new().decode(&buf)?;
        assert_eq!(decoded.timer_value, vec![0.5, 1.5]);
        Ok(())
    }

    #[test]
    fn test_protobuf_decoder_decode_error() {
        match ProtobufDecoder::new().decode(&[0xff, 0xff, 0xff]) {
            Err(e) => assert_eq!(e.message(), "protobuf decoding failed"),
            Ok(_) => panic!("garbage input should not decode"),
        }
    }
}
