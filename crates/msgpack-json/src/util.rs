//! Convenience one-shot helpers.

use std::sync::Arc;

use crate::codec::MsgPackJson;
use crate::error::MsgPackJsonError;
use crate::packer::MsgPackPacker;
use crate::unpacker::MsgPackUnpacker;
use crate::value::JsonValue;

/// Encode a single value with a default codec.
pub fn encode(value: &JsonValue) -> Result<Vec<u8>, MsgPackJsonError> {
    let mut packer = MsgPackPacker::new();
    MsgPackJson::new().encode(&mut packer, value)?;
    Ok(packer.flush())
}

/// Decode a single value with a default codec.
pub fn decode(data: &[u8]) -> Result<Arc<JsonValue>, MsgPackJsonError> {
    let mut unpacker = MsgPackUnpacker::new(data);
    MsgPackJson::new().decode(&mut unpacker)
}
