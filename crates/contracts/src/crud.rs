//! CRUD contracts.
//!
//! Pure method-signature contracts a persistence service implements. Each
//! action trait has a `...Query` twin with the same arguments that returns the
//! query text the backend would run instead of running it.
//!
//! ## Error type
//!
//! Errors are backend specific, so [`Resource::Error`] is associated. The
//! contracts never interpret it.

use folium_core::{Identifier, Object};

use crate::criteria::Criteria;
use crate::options::{DeleteOptions, Options, ReadOptions};
use crate::payload::{OneOrMore, ReadOutput};

/// The record type and error type shared by every contract of one service.
pub trait Resource {
    /// Record handled by the service (a model, an entity or plain state).
    type Item;
    type Error: core::fmt::Debug;
}

/// Create new record(s).
pub trait Create: Resource {
    /// `items` is one record or several. `criteria` is left to the
    /// implementation.
    ///
    /// Returns the identifiers of the created records, in input order.
    fn create(
        &self,
        items: OneOrMore<Self::Item>,
        criteria: &Object,
    ) -> Result<Vec<Identifier>, Self::Error>;
}

pub trait CreateQuery: Resource {
    fn create(
        &self,
        items: OneOrMore<Self::Item>,
        criteria: &Object,
    ) -> Result<String, Self::Error>;
}

/// Read records matching a set of criteria.
pub trait Read: Resource {
    /// - `criteria`: all must match; empty matches everything.
    /// - `fields`: fields to return; empty returns every field.
    /// - `options.count`: return [`ReadOutput::Count`] instead of the records.
    fn read(
        &self,
        criteria: &Criteria,
        fields: &[&str],
        options: &ReadOptions,
    ) -> Result<ReadOutput<Self::Item>, Self::Error>;
}

pub trait ReadQuery: Resource {
    fn read(
        &self,
        criteria: &Criteria,
        fields: &[&str],
        options: &ReadOptions,
    ) -> Result<String, Self::Error>;
}

/// Update record(s).
///
/// With non-empty `criteria` each item is a partial patch applied to the
/// matching records. Without criteria an item replaces the record carrying
/// its identifier, and an item without identifier is created.
/// [`crate::UpdateMode::resolve`] encodes this rule.
pub trait Update: Resource {
    /// Returns the identifiers of the touched records.
    fn update(
        &self,
        items: OneOrMore<Self::Item>,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<Vec<Identifier>, Self::Error>;
}

pub trait UpdateQuery: Resource {
    fn update(
        &self,
        items: OneOrMore<Self::Item>,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<String, Self::Error>;
}

/// Delete record(s).
///
/// Given `items`, only those are deleted and `criteria` is ignored. Without
/// items, `criteria` selects. With neither, every record of the type is
/// deleted ([`crate::DeleteTarget::resolve`]). `options.soft_delete` asks for
/// a logical delete.
pub trait Delete: Resource {
    /// Usually returns nothing (an empty vector); some APIs return the
    /// deleted records.
    fn delete(
        &self,
        items: Option<OneOrMore<Self::Item>>,
        criteria: &Criteria,
        options: &DeleteOptions,
    ) -> Result<Vec<Self::Item>, Self::Error>;
}

pub trait DeleteQuery: Resource {
    fn delete(
        &self,
        items: Option<OneOrMore<Self::Item>>,
        criteria: &Criteria,
        options: &DeleteOptions,
    ) -> Result<String, Self::Error>;
}

/// Full CRUD service.
pub trait Crud: Create + Read + Update + Delete {}

impl<T> Crud for T where T: Create + Read + Update + Delete {}

/// Full CRUD query builder.
pub trait CrudQuery: CreateQuery + ReadQuery + UpdateQuery + DeleteQuery {}

impl<T> CrudQuery for T where T: CreateQuery + ReadQuery + UpdateQuery + DeleteQuery {}
