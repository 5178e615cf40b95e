//! The token format the embedded datasets are shipped in: zlib-deflated bytes,
//! base64-encoded with the standard padded alphabet.

use std::io::{Read, Write};

use base64::{prelude::BASE64_STANDARD, Engine};
use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};

use crate::error::FontResult;

pub fn decompress(token: &str) -> FontResult<String> {
    let compressed = BASE64_STANDARD.decode(token.trim())?;

    let mut decoder = ZlibDecoder::new(&*compressed);
    let mut buffer = Vec::new();
    decoder.read_to_end(&mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}

/// Inverse of [`decompress`]. The build script produces the shipped tokens with
/// this; nothing at runtime needs it.
pub fn compress(raw: &[u8]) -> FontResult<String> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(raw)?;

    Ok(BASE64_STANDARD.encode(encoder.finish()?))
}
