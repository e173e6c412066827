//! Entity: a model whose `code` is guaranteed present for its whole lifetime.

use crate::error::{ModelError, ModelResult};
use crate::generator::CodeGenerator;
use crate::id::{Code, Identifier};
use crate::model::{self, FromState, Record};
use crate::state::State;

/// Reserved identifier field of an [`Entity`].
pub const CODE_FIELD: &str = "code";

/// Entity base value.
///
/// Construction either keeps a truthy `code` already present in the state or
/// asks the supplied generator for exactly one. There is no API that changes
/// the code afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    state: State,
    code: Code,
}

impl Entity {
    /// Take ownership of `state`, generating a code if it lacks a truthy one.
    pub fn new<G>(mut state: State, generator: &G) -> ModelResult<Self>
    where
        G: CodeGenerator + ?Sized,
    {
        if let Some(code) = state.identifier(CODE_FIELD).filter(Identifier::is_truthy) {
            return Ok(Self { state, code });
        }

        let code = generator.generate();
        if !code.is_truthy() {
            return Err(ModelError::invalid_code(format!(
                "generator returned a falsy code ({code:?})"
            )));
        }
        tracing::debug!(code = %code, "generated entity code");

        state.insert(CODE_FIELD, code.to_value());
        Ok(Self { state, code })
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Build `T` from plain state through its [`FromState`] constructor.
    pub fn from_object<T: FromState>(state: impl Into<State>) -> ModelResult<T> {
        T::from_state(state.into())
    }

    /// Parse `text` and delegate to [`Entity::from_object`].
    pub fn from_json<T: FromState>(text: &str) -> ModelResult<T> {
        Self::from_object(State::from_json(text)?)
    }

    /// `T` built from an empty state (so with a freshly generated code).
    pub fn fake<T: FromState>() -> ModelResult<T> {
        Self::from_object(State::new())
    }

    /// Debug tag: `@Folium\Entity\{code}`, or `@Folium\Entity\{kind}\{code}`.
    pub fn tag(&self, kind: Option<&str>) -> String {
        model::tag("Entity", kind, Some(&self.code))
    }
}

impl Record for Entity {
    fn state(&self) -> &State {
        &self.state
    }
}

impl core::fmt::Display for Entity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.tag(None))
    }
}

/// Declare an [`Entity`] subtype bound to a code generator.
///
/// The generator expression is evaluated on every construction, so stateful
/// generators should be referenced through a `static`.
///
/// ```ignore
/// static TASK_CODES: SequenceCodeGenerator = SequenceCodeGenerator::starting_at(1);
/// folium_core::entity_newtype!(pub Task, TASK_CODES);
/// ```
#[macro_export]
macro_rules! entity_newtype {
    ($(#[$meta:meta])* $vis:vis $name:ident, $generator:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name($crate::Entity);

        impl $crate::FromState for $name {
            fn from_state(state: $crate::State) -> $crate::ModelResult<Self> {
                $crate::Entity::new(state, &$generator).map(Self)
            }
        }

        impl $crate::Record for $name {
            fn state(&self) -> &$crate::State {
                $crate::Record::state(&self.0)
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::Entity;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0.tag(Some(stringify!($name))))
            }
        }
    };
}
