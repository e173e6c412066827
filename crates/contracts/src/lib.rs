//! `folium-contracts`: CRUD / REST method contracts.
//!
//! Traits only: services implement them so they agree on method names,
//! argument shapes and return shapes. No backend lives here.

pub mod criteria;
pub mod crud;
pub mod error;
pub mod options;
pub mod payload;
pub mod rest;

pub use criteria::{Comparator, Criteria, Criterion};
pub use crud::{
    Create, CreateQuery, Crud, CrudQuery, Delete, DeleteQuery, Read, ReadQuery, Resource, Update,
    UpdateQuery,
};
pub use error::{ContractError, ContractResult};
pub use options::{COUNT_KEY, DeleteOptions, Options, ReadOptions, SOFT_DELETE_KEY};
pub use payload::{DeleteTarget, OneOrMore, ReadOutput, UpdateMode};
pub use rest::{
    Fetch, FetchQuery, Replace, ReplaceQuery, Rest, RestQuery, RestUpdate, RestUpdateQuery,
    Retrieve, RetrieveQuery,
};
