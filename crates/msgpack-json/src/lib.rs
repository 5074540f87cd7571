//! Bidirectional MessagePack codec for immutable JSON value trees.
//!
//! [`MsgPackJson`] translates a [`JsonValue`] tree to and from the
//! MessagePack binary format, losslessly and structurally: containers keep
//! their order and length, integers keep their magnitude (up to the
//! unsigned 64-bit ceiling of the wire format), and strings keep their
//! exact content. Binary payloads decode to base64 strings; extension
//! types are rejected.
//!
//! Wire-level framing lives in [`MsgPackPacker`] and [`MsgPackUnpacker`];
//! the codec itself only dispatches on [`Format`]/[`ValueType`] and value
//! variants.
//!
//! # Example
//!
//! ```
//! use msgpack_json::{util, JsonValue};
//!
//! let value = JsonValue::from(serde_json::json!(["a", 1, null]));
//! let data = util::encode(&value)?;
//! assert_eq!(*util::decode(&data)?, value);
//! # Ok::<(), msgpack_json::MsgPackJsonError>(())
//! ```

mod codec;
mod error;
mod format;
mod packer;
mod unpacker;
mod value;

pub mod util;

pub use codec::{MsgPackJson, MsgPackJsonBuilder};
pub use error::MsgPackJsonError;
pub use format::{Format, ValueType};
pub use packer::MsgPackPacker;
pub use unpacker::MsgPackUnpacker;
pub use value::JsonValue;
