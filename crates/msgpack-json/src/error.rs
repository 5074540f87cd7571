//! Codec error type.

use msgpack_json_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MsgPackJsonError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("invalid MessagePack byte at offset {0}")]
    InvalidByte(usize),
    #[error("extension types are not supported")]
    ExtensionUnsupported,
}

impl From<BufferError> for MsgPackJsonError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => MsgPackJsonError::UnexpectedEof,
            BufferError::InvalidUtf8 => MsgPackJsonError::InvalidUtf8,
        }
    }
}
