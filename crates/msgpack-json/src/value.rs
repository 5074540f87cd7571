//! [`JsonValue`] — the immutable JSON value tree the codec reads and builds.

use std::sync::{Arc, OnceLock};

/// An immutable JSON value.
///
/// Values are shared via [`Arc`]; the codec never mutates a value after
/// construction. Integral numbers within the signed 64-bit range use
/// [`JsonValue::Int`]; [`JsonValue::UInt`] holds only magnitudes above
/// `i64::MAX`, so two equal numbers always compare equal regardless of the
/// wire width they were decoded from.
///
/// Object fields are an ordered pair list; iteration order is insertion
/// order, and the codec writes map keys in exactly that order.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    /// Integral number within the signed 64-bit range.
    Int(i64),
    /// Integral number above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Str(String),
    Array(Vec<Arc<JsonValue>>),
    Object(Vec<(String, Arc<JsonValue>)>),
}

impl JsonValue {
    /// The shared `Null` singleton.
    pub fn null() -> Arc<JsonValue> {
        static V: OnceLock<Arc<JsonValue>> = OnceLock::new();
        V.get_or_init(|| Arc::new(JsonValue::Null)).clone()
    }

    /// The shared `true`/`false` singletons.
    pub fn bool(value: bool) -> Arc<JsonValue> {
        static T: OnceLock<Arc<JsonValue>> = OnceLock::new();
        static F: OnceLock<Arc<JsonValue>> = OnceLock::new();
        if value {
            T.get_or_init(|| Arc::new(JsonValue::Bool(true))).clone()
        } else {
            F.get_or_init(|| Arc::new(JsonValue::Bool(false))).clone()
        }
    }

    /// The shared empty-array singleton.
    pub fn empty_array() -> Arc<JsonValue> {
        static V: OnceLock<Arc<JsonValue>> = OnceLock::new();
        V.get_or_init(|| Arc::new(JsonValue::Array(Vec::new()))).clone()
    }

    /// The shared empty-object singleton.
    pub fn empty_object() -> Arc<JsonValue> {
        static V: OnceLock<Arc<JsonValue>> = OnceLock::new();
        V.get_or_init(|| Arc::new(JsonValue::Object(Vec::new()))).clone()
    }

    /// Builds an integral number from an unsigned value, narrowing to
    /// [`JsonValue::Int`] when it fits the signed 64-bit range.
    pub fn uint(value: u64) -> JsonValue {
        match i64::try_from(value) {
            Ok(v) => JsonValue::Int(v),
            Err(_) => JsonValue::UInt(value),
        }
    }

    /// Whether this value is an integral number.
    pub fn is_integral(&self) -> bool {
        matches!(self, JsonValue::Int(_) | JsonValue::UInt(_))
    }

    /// Exact signed 64-bit view. `None` when the value is not integral or
    /// its magnitude exceeds `i64::MAX`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Unsigned 64-bit view of a non-negative integral value.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            JsonValue::Int(v) if *v >= 0 => Some(*v as u64),
            JsonValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Floating-point view of any number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Int(v) => Some(*v as f64),
            JsonValue::UInt(v) => Some(*v as f64),
            JsonValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Arc<JsonValue>]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, Arc<JsonValue>)]> {
        match self {
            JsonValue::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Looks up an object field by key.
    pub fn get(&self, key: &str) -> Option<&Arc<JsonValue>> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    JsonValue::uint(u)
                } else {
                    JsonValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => JsonValue::Str(s),
            serde_json::Value::Array(arr) => JsonValue::Array(
                arr.into_iter().map(|v| Arc::new(JsonValue::from(v))).collect(),
            ),
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, Arc::new(JsonValue::from(v))))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for serde_json::Value {
    fn from(v: &JsonValue) -> Self {
        match v {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(*b),
            JsonValue::Int(i) => serde_json::Value::from(*i),
            JsonValue::UInt(u) => serde_json::Value::from(*u),
            JsonValue::Float(f) => serde_json::Value::from(*f),
            JsonValue::Str(s) => serde_json::Value::String(s.clone()),
            JsonValue::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|v| serde_json::Value::from(v.as_ref()))
                    .collect(),
            ),
            JsonValue::Object(pairs) => serde_json::Value::Object(
                pairs
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v.as_ref())))
                    .collect(),
            ),
        }
    }
}
