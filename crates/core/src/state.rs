//! Plain key/value state backing models and entities.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{ModelError, ModelResult};
use crate::id::Identifier;
use crate::model::Record;

/// A plain JSON object (insertion ordered).
pub type Object = Map<String, Value>;

/// One state entry: a plain JSON value or the state of a nested model.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Value(Value),
    Model(State),
}

impl Field {
    /// Plain JSON form, unwrapping nested models recursively.
    pub fn to_value(&self) -> Value {
        match self {
            Field::Value(v) => v.clone(),
            Field::Model(state) => Value::Object(state.to_object()),
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Field::Value(v) => Some(v),
            Field::Model(_) => None,
        }
    }

    pub fn as_model(&self) -> Option<&State> {
        match self {
            Field::Model(state) => Some(state),
            Field::Value(_) => None,
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Field::Value(value)
    }
}

impl From<State> for Field {
    fn from(state: State) -> Self {
        Field::Model(state)
    }
}

/// Ordered field name -> [`Field`] mapping.
///
/// Keys keep their first insertion position; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    fields: Vec<(String, Field)>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`State::insert`] for plain values.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, Field::Value(value.into()));
        self
    }

    /// Builder form embedding another model's state.
    pub fn with_model(mut self, key: impl Into<String>, model: &impl Record) -> Self {
        self.insert(key, Field::Model(model.state().clone()));
        self
    }

    /// Insert a field, returning the previous value under `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, field: impl Into<Field>) -> Option<Field> {
        let key = key.into();
        let field = field.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, field)),
            None => {
                self.fields.push((key, field));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, f)| f)
    }

    /// Plain value under `key`; `None` for missing keys and nested models.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(Field::as_value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Identifier stored under `key` (see [`Identifier::from_value`]).
    pub fn identifier(&self, key: &str) -> Option<Identifier> {
        self.get_value(key).and_then(Identifier::from_value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, f)| (k.as_str(), f))
    }

    /// Plain object with every nested model replaced by its own object form.
    pub fn to_object(&self) -> Object {
        self.fields
            .iter()
            .map(|(k, f)| (k.clone(), f.to_value()))
            .collect()
    }

    /// Parse JSON text into a state. The document must be an object.
    pub fn from_json(text: &str) -> ModelResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from(value)
    }
}

impl From<Object> for State {
    fn from(object: Object) -> Self {
        Self {
            fields: object.into_iter().map(|(k, v)| (k, Field::Value(v))).collect(),
        }
    }
}

impl TryFrom<Value> for State {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(object) => Ok(Self::from(object)),
            Value::Null => Err(ModelError::NotAnObject("null")),
            Value::Bool(_) => Err(ModelError::NotAnObject("boolean")),
            Value::Number(_) => Err(ModelError::NotAnObject("number")),
            Value::String(_) => Err(ModelError::NotAnObject("string")),
            Value::Array(_) => Err(ModelError::NotAnObject("array")),
        }
    }
}

impl From<State> for Value {
    fn from(state: State) -> Self {
        Value::Object(state.to_object())
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, field) in &self.fields {
            match field {
                Field::Value(v) => map.serialize_entry(key, v)?,
                Field::Model(state) => map.serialize_entry(key, state)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Object::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_keeps_first_position_and_replaces_value() {
        let mut state = State::new().with("a", 1).with("b", 2);
        let previous = state.insert("a", json!(3));

        assert_eq!(previous, Some(Field::Value(json!(1))));
        assert_eq!(state.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(state.get_value("a"), Some(&json!(3)));
    }

    #[test]
    fn to_object_unwraps_nested_states_recursively() {
        let inner = State::new().with("id", 2).with("name", "inner");
        let mut middle = State::new().with("id", 1);
        middle.insert("child", inner);
        let mut outer = State::new();
        outer.insert("parent", middle);

        assert_eq!(
            Value::Object(outer.to_object()),
            json!({"parent": {"id": 1, "child": {"id": 2, "name": "inner"}}})
        );
    }

    #[test]
    fn to_object_preserves_insertion_order() {
        let state = State::new().with("z", 1).with("a", 2).with("m", 3);
        let keys: Vec<String> = state.to_object().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert_eq!(State::from_json("[1, 2]"), Err(ModelError::NotAnObject("array")));
        assert_eq!(State::from_json("null"), Err(ModelError::NotAnObject("null")));
        assert!(matches!(State::from_json("{"), Err(ModelError::Parse(_))));
    }

    #[test]
    fn nested_model_field_has_no_plain_value() {
        let mut state = State::new();
        state.insert("child", State::new().with("id", 5));

        assert!(state.get_value("child").is_none());
        assert_eq!(state.identifier("child"), None);
        assert!(state.get("child").and_then(Field::as_model).is_some());
    }

    #[test]
    fn serializes_as_its_object_form() {
        let mut state = State::new().with("id", 1);
        state.insert("child", State::new().with("code", "c"));

        let text = serde_json::to_string(&state).unwrap();
        assert_eq!(text, r#"{"id":1,"child":{"code":"c"}}"#);

        let back: State = serde_json::from_str(&text).unwrap();
        assert_eq!(back.to_object(), state.to_object());
    }
}
