//! Name -> factory registry used to rebuild typed values from plain data.
//!
//! A registry is constructed and passed around explicitly; there is no
//! process-wide instance. `T` is normally the caller's own sum type, one
//! variant per registered kind, so whatever comes out of the registry is
//! dispatched with an exhaustive `match`.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{ModelError, ModelResult};
use crate::model::FromState;
use crate::state::State;

/// Constructor stored in a [`Registry`].
pub type Factory<T> = Arc<dyn Fn(State) -> ModelResult<T> + Send + Sync>;

/// How [`Registry::from_object`] finds its constructor.
pub enum Klass<'a, T> {
    /// Use this factory directly.
    Factory(Factory<T>),
    /// Resolve a registered name.
    Name(&'a str),
}

impl<'a, T: 'static> Klass<'a, T> {
    /// Factory wrapping `K`'s [`FromState`] constructor.
    pub fn of<K>() -> Self
    where
        K: FromState + Into<T> + 'static,
    {
        Klass::Factory(factory_of::<K, T>())
    }
}

impl<'a, T> From<&'a str> for Klass<'a, T> {
    fn from(name: &'a str) -> Self {
        Klass::Name(name)
    }
}

fn factory_of<K, T>() -> Factory<T>
where
    K: FromState + Into<T> + 'static,
    T: 'static,
{
    Arc::new(|state: State| K::from_state(state).map(Into::into))
}

/// Name -> factory lookup table.
///
/// Registration and lookup go through an `RwLock`, so a registry can be shared
/// through `Arc` between threads.
pub struct Registry<T> {
    factories: RwLock<HashMap<String, Factory<T>>>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Register `factory` under `name`. An existing registration is replaced.
    pub fn register<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn(State) -> ModelResult<T> + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(factory));
    }

    /// Register `K`'s [`FromState`] constructor under `name`.
    pub fn register_type<K>(&self, name: impl Into<String>)
    where
        K: FromState + Into<T> + 'static,
        T: 'static,
    {
        self.insert(name.into(), factory_of::<K, T>());
    }

    fn insert(&self, name: String, factory: Factory<T>) {
        let mut factories = self.factories.write().unwrap_or_else(PoisonError::into_inner);
        if factories.insert(name.clone(), factory).is_some() {
            tracing::warn!(klass = %name, "replacing existing klass registration");
        } else {
            tracing::debug!(klass = %name, "registered klass");
        }
    }

    /// Factory registered under `name`.
    pub fn find(&self, name: &str) -> ModelResult<Factory<T>> {
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);
        factories
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);
        factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = factories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a value from plain state.
    ///
    /// Fails with [`ModelError::KlassNotStated`] when `klass` is `None` and
    /// [`ModelError::KlassNotFound`] when a name is not registered.
    pub fn from_object(
        &self,
        state: impl Into<State>,
        klass: Option<Klass<'_, T>>,
    ) -> ModelResult<T> {
        let factory = match klass {
            Some(Klass::Factory(factory)) => factory,
            Some(Klass::Name(name)) => self.find(name)?,
            None => return Err(ModelError::KlassNotStated),
        };
        factory(state.into())
    }

    /// Parse `text` and delegate to [`Registry::from_object`].
    pub fn from_json(&self, text: &str, klass: Option<Klass<'_, T>>) -> ModelResult<T> {
        self.from_object(State::from_json(text)?, klass)
    }

    /// Value built from an empty state.
    pub fn fake(&self, klass: Option<Klass<'_, T>>) -> ModelResult<T> {
        self.from_object(State::new(), klass)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry").field("names", &self.names()).finish()
    }
}
