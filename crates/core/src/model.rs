//! Model: a serializable value wrapper with an optional, externally assigned `id`.

use serde_json::Value;

use crate::error::ModelResult;
use crate::id::Identifier;
use crate::state::{Object, State};

/// Namespace prefix of every debug tag.
pub const NAMESPACE: &str = "@Folium";

/// Reserved identifier field of a [`Model`].
pub const ID_FIELD: &str = "id";

/// Anything backed by a [`State`] that can be rendered to plain data.
pub trait Record {
    fn state(&self) -> &State;

    /// New plain object; nested models are unwrapped recursively and the
    /// backing state is left untouched.
    fn to_object(&self) -> Object {
        self.state().to_object()
    }

    /// Compact JSON text of [`Record::to_object`].
    fn to_json(&self) -> String {
        Value::Object(self.to_object()).to_string()
    }
}

/// Constructor used to rebuild a typed value from plain state.
pub trait FromState: Sized {
    fn from_state(state: State) -> ModelResult<Self>;
}

/// Generic model value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    state: State,
}

impl Model {
    /// Wrap a copy of `state`. No validation is performed.
    pub fn new(state: impl Into<State>) -> Self {
        Self {
            state: state.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Empty model for test scaffolding.
    pub fn fake() -> Self {
        Self::empty()
    }

    pub fn id(&self) -> Option<Identifier> {
        self.state.identifier(ID_FIELD)
    }

    /// Build `T` from plain state through its [`FromState`] constructor.
    pub fn from_object<T: FromState>(state: impl Into<State>) -> ModelResult<T> {
        T::from_state(state.into())
    }

    /// Parse `text` and delegate to [`Model::from_object`].
    pub fn from_json<T: FromState>(text: &str) -> ModelResult<T> {
        Self::from_object(State::from_json(text)?)
    }

    /// Debug tag: `@Folium\Model\{id}`, or `@Folium\Model\{kind}\{id}` for subtypes.
    pub fn tag(&self, kind: Option<&str>) -> String {
        tag("Model", kind, self.id().as_ref())
    }
}

impl Record for Model {
    fn state(&self) -> &State {
        &self.state
    }
}

impl FromState for Model {
    fn from_state(state: State) -> ModelResult<Self> {
        Ok(Self::new(state))
    }
}

impl From<State> for Model {
    fn from(state: State) -> Self {
        Self::new(state)
    }
}

impl core::fmt::Display for Model {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.tag(None))
    }
}

pub(crate) fn tag(family: &str, kind: Option<&str>, id: Option<&Identifier>) -> String {
    let id = id.map_or_else(|| "undefined".to_owned(), ToString::to_string);
    match kind {
        Some(kind) => format!("{NAMESPACE}\\{family}\\{kind}\\{id}"),
        None => format!("{NAMESPACE}\\{family}\\{id}"),
    }
}

/// Declare a [`Model`] subtype.
///
/// Generates a newtype over `Model` with [`FromState`], [`Record`],
/// `Deref<Target = Model>` and a `Display` tag naming the subtype.
///
/// ```ignore
/// folium_core::model_newtype!(pub Invoice);
///
/// let invoice: Invoice = Model::from_json(r#"{"id": 10}"#)?;
/// assert_eq!(invoice.to_string(), r"@Folium\Model\Invoice\10");
/// ```
#[macro_export]
macro_rules! model_newtype {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        $vis struct $name($crate::Model);

        impl $crate::FromState for $name {
            fn from_state(state: $crate::State) -> $crate::ModelResult<Self> {
                Ok(Self($crate::Model::new(state)))
            }
        }

        impl $crate::Record for $name {
            fn state(&self) -> &$crate::State {
                $crate::Record::state(&self.0)
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::Model;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::core::convert::From<$crate::Model> for $name {
            fn from(model: $crate::Model) -> Self {
                Self(model)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0.tag(Some(stringify!($name))))
            }
        }
    };
}
