//! REST contracts.
//!
//! Create and delete are shared with [`crate::crud`]; fetch, retrieve, replace
//! and the code-addressed update are REST specific.

use folium_core::{Code, Identifier, State};

use crate::criteria::Criteria;
use crate::crud::{Create, CreateQuery, Delete, DeleteQuery, Resource};
use crate::options::{Options, ReadOptions};
use crate::payload::{OneOrMore, ReadOutput};

/// Fetch a collection (or its size).
pub trait Fetch: Resource {
    fn fetch(
        &self,
        criteria: &Criteria,
        fields: &[&str],
        options: &ReadOptions,
    ) -> Result<ReadOutput<Self::Item>, Self::Error>;
}

pub trait FetchQuery: Resource {
    fn fetch(
        &self,
        criteria: &Criteria,
        fields: &[&str],
        options: &ReadOptions,
    ) -> Result<String, Self::Error>;
}

/// Fetch one record by code.
pub trait Retrieve: Resource {
    /// `Ok(None)` when nothing carries `code`. Empty `fields` returns every field.
    fn retrieve(
        &self,
        code: &Code,
        fields: &[&str],
        options: &Options,
    ) -> Result<Option<Self::Item>, Self::Error>;
}

pub trait RetrieveQuery: Resource {
    fn retrieve(
        &self,
        code: &Code,
        fields: &[&str],
        options: &Options,
    ) -> Result<String, Self::Error>;
}

/// Whole-record upsert.
pub trait Replace: Resource {
    fn replace(
        &self,
        items: OneOrMore<Self::Item>,
        options: &Options,
    ) -> Result<Vec<Identifier>, Self::Error>;
}

pub trait ReplaceQuery: Resource {
    fn replace(
        &self,
        items: OneOrMore<Self::Item>,
        options: &Options,
    ) -> Result<String, Self::Error>;
}

/// Partial update of the record carrying `code`.
pub trait RestUpdate: Resource {
    fn update(
        &self,
        code: &Code,
        patch: OneOrMore<State>,
        options: &Options,
    ) -> Result<Vec<Identifier>, Self::Error>;
}

pub trait RestUpdateQuery: Resource {
    fn update(
        &self,
        code: &Code,
        patch: OneOrMore<State>,
        options: &Options,
    ) -> Result<String, Self::Error>;
}

/// Full REST service.
pub trait Rest: Create + Fetch + Retrieve + Replace + RestUpdate + Delete {}

impl<T> Rest for T where T: Create + Fetch + Retrieve + Replace + RestUpdate + Delete {}

/// Full REST query builder.
pub trait RestQuery:
    CreateQuery + FetchQuery + RetrieveQuery + ReplaceQuery + RestUpdateQuery + DeleteQuery
{
}

impl<T> RestQuery for T where
    T: CreateQuery + FetchQuery + RetrieveQuery + ReplaceQuery + RestUpdateQuery + DeleteQuery
{
}
