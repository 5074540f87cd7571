//! `MsgPackJson` — the recursive value-tree codec.

use std::collections::HashMap;
use std::sync::Arc;

use base64::Engine;

use crate::error::MsgPackJsonError;
use crate::format::{Format, ValueType};
use crate::packer::MsgPackPacker;
use crate::unpacker::MsgPackUnpacker;
use crate::value::JsonValue;

const INT_CACHE_MIN: i64 = -128;
const INT_CACHE_MAX: i64 = 127;
const INT_CACHE_SIZE: usize = 256;

/// Bidirectional codec between [`JsonValue`] trees and MessagePack.
///
/// Decoding shares instances where it can: integers in [-128, 127] come
/// from a lazily filled per-instance table, strings registered at build
/// time come from a fixed lookup map, and null/true/false and empty
/// containers are the process-wide singletons. `decode` takes `&mut self`
/// for the integer table; the `Arc`s it returns are freely shareable.
///
/// # Example
///
/// ```
/// use msgpack_json::{JsonValue, MsgPackJson, MsgPackPacker, MsgPackUnpacker};
///
/// let mut codec = MsgPackJson::new();
/// let value = JsonValue::from(serde_json::json!({"id": 7, "ok": true}));
///
/// let mut packer = MsgPackPacker::new();
/// codec.encode(&mut packer, &value)?;
/// let data = packer.flush();
///
/// let decoded = codec.decode(&mut MsgPackUnpacker::new(&data))?;
/// assert_eq!(*decoded, value);
/// # Ok::<(), msgpack_json::MsgPackJsonError>(())
/// ```
pub struct MsgPackJson {
    string_cache: Option<HashMap<String, Arc<JsonValue>>>,
    int_cache: [Option<Arc<JsonValue>>; INT_CACHE_SIZE],
}

/// One-shot configuration for [`MsgPackJson`].
#[derive(Default)]
pub struct MsgPackJsonBuilder {
    cached_strings: Option<Vec<String>>,
}

impl MsgPackJsonBuilder {
    /// Registers string literals to be decoded as shared instances. Useful
    /// when the data carries a fixed vocabulary, e.g. enum tags. The set is
    /// fixed once built; unlisted strings always allocate fresh values.
    pub fn cached_strings<I, S>(mut self, strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cached_strings = Some(strings.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> MsgPackJson {
        let string_cache = self.cached_strings.map(|strings| {
            strings
                .into_iter()
                .map(|s| {
                    let value = Arc::new(JsonValue::Str(s.clone()));
                    (s, value)
                })
                .collect()
        });
        MsgPackJson {
            string_cache,
            int_cache: std::array::from_fn(|_| None),
        }
    }
}

impl Default for MsgPackJson {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackJson {
    /// A codec with no string cache.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> MsgPackJsonBuilder {
        MsgPackJsonBuilder::default()
    }

    /// Encodes one value tree as a single self-delimiting MessagePack
    /// value. Recursion depth equals the tree's nesting depth.
    pub fn encode(
        &self,
        packer: &mut MsgPackPacker,
        value: &JsonValue,
    ) -> Result<(), MsgPackJsonError> {
        match value {
            JsonValue::Null => packer.write_nil(),
            JsonValue::Bool(b) => packer.write_bool(*b),
            JsonValue::Int(i) => {
                if (i32::MIN as i64..=i32::MAX as i64).contains(i) {
                    packer.write_i32(*i as i32);
                } else {
                    packer.write_i64(*i);
                }
            }
            JsonValue::UInt(u) => packer.write_u64(*u),
            JsonValue::Float(f) => packer.write_f64(*f),
            JsonValue::Str(s) => packer.write_str(s),
            JsonValue::Array(items) => {
                packer.write_array_header(items.len());
                for item in items {
                    self.encode(packer, item)?;
                }
            }
            JsonValue::Object(pairs) => {
                packer.write_map_header(pairs.len());
                for (key, val) in pairs {
                    packer.write_str(key);
                    self.encode(packer, val)?;
                }
            }
        }
        Ok(())
    }

    /// Encodes values back-to-back with no envelope. The stream carries no
    /// count; [`decode_list`](MsgPackJson::decode_list) stops on
    /// exhaustion.
    pub fn encode_list(
        &self,
        packer: &mut MsgPackPacker,
        values: &[Arc<JsonValue>],
    ) -> Result<(), MsgPackJsonError> {
        for value in values {
            self.encode(packer, value)?;
        }
        Ok(())
    }

    /// Decodes one value tree.
    ///
    /// Fails on truncated input, on the reserved 0xc1 marker, and on any
    /// extension format; a partially built container is discarded.
    /// Binary payloads decode to base64 strings; there is no reverse
    /// path, so trees that originated as MessagePack binary do not
    /// round-trip back to the binary format. Recursion depth equals the
    /// document's nesting depth and is not bounded here.
    pub fn decode(
        &mut self,
        unpacker: &mut MsgPackUnpacker<'_>,
    ) -> Result<Arc<JsonValue>, MsgPackJsonError> {
        let format = unpacker.peek_format()?;
        let Some(value_type) = format.value_type() else {
            return Err(MsgPackJsonError::InvalidByte(unpacker.position()));
        };
        match value_type {
            ValueType::Map => {
                let size = unpacker.read_map_header()?;
                if size == 0 {
                    return Ok(JsonValue::empty_object());
                }
                let mut pairs = Vec::with_capacity(size);
                for _ in 0..size {
                    let key = unpacker.read_str()?;
                    let value = self.decode(unpacker)?;
                    pairs.push((key, value));
                }
                Ok(Arc::new(JsonValue::Object(pairs)))
            }
            ValueType::Array => {
                let size = unpacker.read_array_header()?;
                if size == 0 {
                    return Ok(JsonValue::empty_array());
                }
                let mut items = Vec::with_capacity(size);
                for _ in 0..size {
                    items.push(self.decode(unpacker)?);
                }
                Ok(Arc::new(JsonValue::Array(items)))
            }
            ValueType::Str => {
                let s = unpacker.read_str()?;
                if let Some(cache) = &self.string_cache {
                    if let Some(cached) = cache.get(&s) {
                        return Ok(cached.clone());
                    }
                }
                Ok(Arc::new(JsonValue::Str(s)))
            }
            ValueType::Integer => {
                if format == Format::Uint64 {
                    // may exceed i64::MAX; skips the small-integer table
                    let u = unpacker.read_u64()?;
                    Ok(Arc::new(JsonValue::uint(u)))
                } else {
                    let i = unpacker.read_i64()?;
                    Ok(self.number(i))
                }
            }
            ValueType::Float => Ok(Arc::new(JsonValue::Float(unpacker.read_f64()?))),
            ValueType::Boolean => Ok(JsonValue::bool(unpacker.read_bool()?)),
            ValueType::Nil => {
                unpacker.read_nil()?;
                Ok(JsonValue::null())
            }
            ValueType::Binary => {
                let payload = unpacker.read_bin()?;
                let encoded = base64::engine::general_purpose::STANDARD.encode(payload);
                Ok(Arc::new(JsonValue::Str(encoded)))
            }
            ValueType::Extension => Err(MsgPackJsonError::ExtensionUnsupported),
        }
    }

    /// Decodes values until the source is exhausted.
    pub fn decode_list(
        &mut self,
        unpacker: &mut MsgPackUnpacker<'_>,
    ) -> Result<Vec<Arc<JsonValue>>, MsgPackJsonError> {
        let mut values = Vec::new();
        while unpacker.has_next() {
            values.push(self.decode(unpacker)?);
        }
        Ok(values)
    }

    /// Integer construction with the [-128, 127] sharing table.
    fn number(&mut self, value: i64) -> Arc<JsonValue> {
        if (INT_CACHE_MIN..=INT_CACHE_MAX).contains(&value) {
            let idx = (value - INT_CACHE_MIN) as usize;
            if let Some(cached) = &self.int_cache[idx] {
                return cached.clone();
            }
            let fresh = Arc::new(JsonValue::Int(value));
            self.int_cache[idx] = Some(fresh.clone());
            fresh
        } else {
            Arc::new(JsonValue::Int(value))
        }
    }
}
