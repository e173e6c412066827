//! Argument and return shapes shared by the CRUD and REST contracts.

use serde::{Deserialize, Serialize};

use crate::criteria::Criteria;

/// A single item or a collection of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMore<T> {
    More(Vec<T>),
    One(T),
}

impl<T> OneOrMore<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMore::One(item) => core::slice::from_ref(item),
            OneOrMore::More(items) => items,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMore::One(item) => vec![item],
            OneOrMore::More(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> OneOrMore<U> {
        match self {
            OneOrMore::One(item) => OneOrMore::One(f(item)),
            OneOrMore::More(items) => OneOrMore::More(items.into_iter().map(f).collect()),
        }
    }
}

impl<T> From<Vec<T>> for OneOrMore<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMore::More(items)
    }
}

/// Result of a read: the matches, or only their number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadOutput<T> {
    Count(u64),
    Items(Vec<T>),
}

impl<T> ReadOutput<T> {
    /// Number of matches, whichever form was returned.
    pub fn count(&self) -> u64 {
        match self {
            ReadOutput::Count(n) => *n,
            ReadOutput::Items(items) => items.len() as u64,
        }
    }

    pub fn into_items(self) -> Option<Vec<T>> {
        match self {
            ReadOutput::Items(items) => Some(items),
            ReadOutput::Count(_) => None,
        }
    }
}

/// What a delete call addresses.
///
/// Explicit items win; without items the criteria select; with neither,
/// every record of the type is addressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteTarget<'a, T> {
    Items(&'a [T]),
    Matching(&'a Criteria),
    All,
}

impl<'a, T> DeleteTarget<'a, T> {
    pub fn resolve(items: Option<&'a OneOrMore<T>>, criteria: &'a Criteria) -> Self {
        match items {
            Some(items) if !items.is_empty() => DeleteTarget::Items(items.as_slice()),
            _ if !criteria.is_empty() => DeleteTarget::Matching(criteria),
            _ => DeleteTarget::All,
        }
    }
}

/// How an update call treats one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Criteria were given: patch the matching records with the item's fields.
    Patch,
    /// No criteria, item carries an identifier: replace that record.
    Replace,
    /// No criteria, no identifier: the item is new.
    Create,
}

impl UpdateMode {
    pub fn resolve(has_identifier: bool, criteria: &Criteria) -> Self {
        if !criteria.is_empty() {
            UpdateMode::Patch
        } else if has_identifier {
            UpdateMode::Replace
        } else {
            UpdateMode::Create
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Criterion;
    use folium_core::State;
    use serde_json::json;

    #[test]
    fn one_or_more_accepts_single_object_or_list() {
        let one: OneOrMore<State> = serde_json::from_value(json!({"text": "iron"})).unwrap();
        assert!(matches!(one, OneOrMore::One(_)));
        assert_eq!(one.len(), 1);

        let more: OneOrMore<State> =
            serde_json::from_value(json!([{"text": "iron"}, {"text": "laundry"}])).unwrap();
        assert_eq!(more.len(), 2);
        assert_eq!(more.into_vec()[1].get_value("text"), Some(&json!("laundry")));
    }

    #[test]
    fn map_keeps_shape() {
        assert_eq!(OneOrMore::One(2).map(|n| n * 10), OneOrMore::One(20));
        assert_eq!(OneOrMore::from(vec![1, 2]).map(|n| n + 1), OneOrMore::More(vec![2, 3]));
    }

    #[test]
    fn read_output_counts_either_form() {
        assert_eq!(ReadOutput::<u8>::Count(7).count(), 7);
        assert_eq!(ReadOutput::Items(vec![1, 2, 3]).count(), 3);
        assert_eq!(ReadOutput::<u8>::Count(7).into_items(), None);
    }

    #[test]
    fn delete_target_prefers_items_then_criteria() {
        let items = OneOrMore::from(vec![1, 2]);
        let criteria = Criteria::new().with(Criterion::eq("id", 1));
        let empty = Criteria::new();
        let no_items: OneOrMore<i32> = OneOrMore::More(vec![]);

        assert_eq!(
            DeleteTarget::resolve(Some(&items), &criteria),
            DeleteTarget::Items(&[1, 2][..])
        );
        assert_eq!(
            DeleteTarget::<i32>::resolve(None, &criteria),
            DeleteTarget::Matching(&criteria)
        );
        assert_eq!(
            DeleteTarget::resolve(Some(&no_items), &criteria),
            DeleteTarget::Matching(&criteria)
        );
        assert_eq!(DeleteTarget::<i32>::resolve(None, &empty), DeleteTarget::All);
        assert_eq!(DeleteTarget::resolve(Some(&no_items), &empty), DeleteTarget::All);
    }

    #[test]
    fn update_mode_follows_criteria_then_identifier() {
        let criteria = Criteria::new().with(Criterion::eq("done", false));
        let empty = Criteria::new();

        assert_eq!(UpdateMode::resolve(true, &criteria), UpdateMode::Patch);
        assert_eq!(UpdateMode::resolve(false, &criteria), UpdateMode::Patch);
        assert_eq!(UpdateMode::resolve(true, &empty), UpdateMode::Replace);
        assert_eq!(UpdateMode::resolve(false, &empty), UpdateMode::Create);
    }
}
