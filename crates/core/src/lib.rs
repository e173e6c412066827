//! `folium-core`: shared model building blocks.
//!
//! Plain JSON-backed [`Model`] and [`Entity`] values, their identifiers, code
//! generators and the [`Registry`] used to rebuild typed values from plain
//! data. Pure data transformations only; no IO.

pub mod entity;
pub mod error;
pub mod generator;
pub mod id;
pub mod model;
pub mod registry;
pub mod state;

pub use entity::{CODE_FIELD, Entity};
pub use error::{ModelError, ModelResult};
pub use generator::{CodeGenerator, SequenceCodeGenerator, UuidCodeGenerator};
pub use id::{Code, Identifier};
pub use model::{FromState, ID_FIELD, Model, NAMESPACE, Record};
pub use registry::{Factory, Klass, Registry};
pub use state::{Field, Object, State};
