pub mod decoder;
pub mod encoder;
pub mod server;
pub mod wire;

pub use decoder::{decode_flags, decode_question, decode_request, DecodedRequest};
pub use encoder::{encode_header, encode_question, encode_record};
pub use server::DnsServerHandler;
pub use wire::ResponseFlags;
