//! Structured options records.
//!
//! Reserved keys are typed fields; every other key passes through `extra`.
//! A reserved key left in `extra` never reaches the wire: the typed field
//! owns it.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use folium_core::Object;

use crate::error::{ContractError, ContractResult};

/// Options with no reserved keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Options {
    #[serde(flatten)]
    pub extra: Object,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Reserved key of [`ReadOptions::count`].
pub const COUNT_KEY: &str = "__count";

/// Reserved key of [`DeleteOptions::soft_delete`].
pub const SOFT_DELETE_KEY: &str = "__soft_delete";

/// Options of read / fetch operations.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ReadOptions {
    /// Return the number of matches instead of the matches.
    #[serde(rename = "__count", default)]
    pub count: bool,

    #[serde(flatten)]
    pub extra: Object,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options asking for a count.
    pub fn counting() -> Self {
        Self {
            count: true,
            ..Self::default()
        }
    }

    /// Adds a pass-through key. A boolean under `__count` sets the flag.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        route(&mut self.count, &mut self.extra, COUNT_KEY, key.into(), value.into());
        self
    }

    pub fn from_object(object: Object) -> ContractResult<Self> {
        from_object(object)
    }
}

impl Serialize for ReadOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_flagged(serializer, COUNT_KEY, self.count, &self.extra)
    }
}

/// Options of delete operations.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeleteOptions {
    /// Mark records deleted instead of removing them.
    #[serde(rename = "__soft_delete", default)]
    pub soft_delete: bool,

    #[serde(flatten)]
    pub extra: Object,
}

impl DeleteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn soft() -> Self {
        Self {
            soft_delete: true,
            ..Self::default()
        }
    }

    /// Adds a pass-through key. A boolean under `__soft_delete` sets the flag.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let (key, value) = (key.into(), value.into());
        route(&mut self.soft_delete, &mut self.extra, SOFT_DELETE_KEY, key, value);
        self
    }

    pub fn from_object(object: Object) -> ContractResult<Self> {
        from_object(object)
    }
}

impl Serialize for DeleteOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_flagged(serializer, SOFT_DELETE_KEY, self.soft_delete, &self.extra)
    }
}

fn route(flag: &mut bool, extra: &mut Object, reserved: &str, key: String, value: Value) {
    match value {
        Value::Bool(set) if key == reserved => *flag = set,
        value => {
            extra.insert(key, value);
        }
    }
}

/// Writes `reserved` only when set, then every other key of `extra`.
fn serialize_flagged<S: Serializer>(
    serializer: S,
    reserved: &str,
    flag: bool,
    extra: &Object,
) -> Result<S::Ok, S::Error> {
    let passed = extra.iter().filter(|(key, _)| key.as_str() != reserved);
    let mut map = serializer.serialize_map(None)?;
    if flag {
        map.serialize_entry(reserved, &true)?;
    }
    for (key, value) in passed {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

fn from_object<T: serde::de::DeserializeOwned>(object: Object) -> ContractResult<T> {
    serde_json::from_value(Value::Object(object))
        .map_err(|e| ContractError::invalid_options(e.to_string()))
}
