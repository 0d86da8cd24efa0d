//! Transport layer: wire-format details (query encoding, plaintext decoding).

mod plain_text;
mod query;

pub use plain_text::{DecodeError, decode_plain_text_response};
pub use query::{encode_request_url, parse_base_url};
