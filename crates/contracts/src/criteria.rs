//! Typed filter expressions.
//!
//! On the wire a criterion is the tuple `[field, value]` or
//! `[field, operator, value]`. The two-element form, and a `null` operator,
//! compare for equality.
//! Which operators a backend accepts is up to the backend.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ContractError, ContractResult};

/// Comparison operator of a [`Criterion`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Comparator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    In,
    NotIn,
    /// Backend specific operator, kept verbatim.
    Other(String),
}

impl Comparator {
    pub fn as_str(&self) -> &str {
        match self {
            Comparator::Eq => "=",
            Comparator::Ne => "!=",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
            Comparator::Like => "like",
            Comparator::In => "in",
            Comparator::NotIn => "not in",
            Comparator::Other(op) => op,
        }
    }
}

impl FromStr for Comparator {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "=" | "==" => Comparator::Eq,
            "!=" | "<>" => Comparator::Ne,
            ">" => Comparator::Gt,
            ">=" => Comparator::Gte,
            "<" => Comparator::Lt,
            "<=" => Comparator::Lte,
            "like" => Comparator::Like,
            "in" => Comparator::In,
            "not in" => Comparator::NotIn,
            _ => Comparator::Other(s.to_owned()),
        };
        Ok(op)
    }
}

impl From<String> for Comparator {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl From<Comparator> for String {
    fn from(value: Comparator) -> Self {
        value.as_str().to_owned()
    }
}

impl core::fmt::Display for Comparator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(field, comparator, value)` filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct Criterion {
    pub field: String,
    pub comparator: Comparator,
    pub value: Value,
}

impl Criterion {
    pub fn new(field: impl Into<String>, comparator: Comparator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            comparator,
            value: value.into(),
        }
    }

    /// Equality filter, the meaning of a two-element tuple.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Comparator::Eq, value)
    }
}

impl TryFrom<Vec<Value>> for Criterion {
    type Error = ContractError;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        let len = values.len();
        let mut values = values.into_iter();
        let (field, comparator, value) = match (values.next(), values.next(), values.next()) {
            (Some(field), Some(value), None) => (field, Comparator::Eq, value),
            (Some(field), Some(Value::Null), Some(value)) if len == 3 => {
                (field, Comparator::Eq, value)
            }
            (Some(field), Some(Value::String(op)), Some(value)) if len == 3 => {
                (field, Comparator::from(op), value)
            }
            (Some(_), Some(op), Some(_)) if len == 3 => {
                return Err(ContractError::invalid_criterion(format!(
                    "operator must be a string, got {op}"
                )));
            }
            _ => {
                return Err(ContractError::invalid_criterion(format!(
                    "expected 2 or 3 elements, got {len}"
                )));
            }
        };

        match field {
            Value::String(field) => Ok(Self {
                field,
                comparator,
                value,
            }),
            other => Err(ContractError::invalid_criterion(format!(
                "field must be a string, got {other}"
            ))),
        }
    }
}

impl From<Criterion> for Vec<Value> {
    fn from(c: Criterion) -> Self {
        vec![Value::String(c.field), Value::String(c.comparator.into()), c.value]
    }
}

/// Ordered list of criteria, all of which apply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria(Vec<Criterion>);

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, criterion: Criterion) -> Self {
        self.0.push(criterion);
        self
    }

    /// Parse the JSON list-of-tuples form.
    pub fn from_json(text: &str) -> ContractResult<Self> {
        let values: Vec<Vec<Value>> =
            serde_json::from_str(text).map_err(folium_core::ModelError::from)?;
        values.into_iter().map(Criterion::try_from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Criterion] {
        &self.0
    }
}

impl From<Vec<Criterion>> for Criteria {
    fn from(value: Vec<Criterion>) -> Self {
        Self(value)
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = core::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folium_core::ModelError;
    use serde_json::json;

    #[test]
    fn two_element_tuple_defaults_to_equality() {
        let c: Criterion = serde_json::from_value(json!(["name", "Ana"])).unwrap();
        assert_eq!(c, Criterion::eq("name", "Ana"));
    }

    #[test]
    fn three_element_tuple_parses_operator() {
        let c: Criterion = serde_json::from_value(json!(["id", ">", 10])).unwrap();
        assert_eq!(c, Criterion::new("id", Comparator::Gt, 10));

        let c: Criterion = serde_json::from_value(json!(["id", "NOT IN", [1, 2]])).unwrap();
        assert_eq!(c.comparator, Comparator::NotIn);
    }

    #[test]
    fn unknown_operator_is_kept_verbatim() {
        let c: Criterion = serde_json::from_value(json!(["tags", "@>", ["a"]])).unwrap();
        assert_eq!(c.comparator, Comparator::Other("@>".into()));
        assert_eq!(serde_json::to_value(&c).unwrap(), json!(["tags", "@>", ["a"]]));
    }

    #[test]
    fn malformed_tuples_are_rejected() {
        for bad in [json!(["only"]), json!([]), json!(["a", "=", 1, 2]), json!([1, 2])] {
            let values: Vec<Value> = serde_json::from_value(bad).unwrap();
            let err = Criterion::try_from(values).unwrap_err();
            assert!(matches!(err, ContractError::InvalidCriterion(_)));
        }

        let err = Criterion::try_from(vec![json!("a"), json!(5), json!(1)]).unwrap_err();
        assert!(matches!(err, ContractError::InvalidCriterion(_)));
    }

    #[test]
    fn null_operator_means_equality() {
        let c: Criterion = serde_json::from_value(json!(["id", null, 10])).unwrap();
        assert_eq!(c, Criterion::eq("id", 10));
    }

    #[test]
    fn serializes_as_full_tuple() {
        let c = Criterion::eq("name", "Ana");
        assert_eq!(serde_json::to_value(&c).unwrap(), json!(["name", "=", "Ana"]));
    }

    #[test]
    fn criteria_from_json_list() {
        let criteria = Criteria::from_json(r#"[["id", ">", 10], ["name", "Ana"]]"#).unwrap();
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria.as_slice()[1], Criterion::eq("name", "Ana"));

        assert!(Criteria::from_json("[]").unwrap().is_empty());
        assert!(matches!(
            Criteria::from_json("[["),
            Err(ContractError::Model(ModelError::Parse(_)))
        ));
        assert!(matches!(
            Criteria::from_json(r#"[["a"]]"#),
            Err(ContractError::InvalidCriterion(_))
        ));
    }

    #[test]
    fn comparator_symbols_round_trip() {
        for op in ["=", "!=", ">", ">=", "<", "<=", "like", "in", "not in"] {
            let parsed: Comparator = op.parse().unwrap();
            assert_eq!(parsed.as_str(), op);
        }
        assert_eq!("==".parse::<Comparator>().unwrap(), Comparator::Eq);
        assert_eq!("<>".parse::<Comparator>().unwrap(), Comparator::Ne);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any two-element tuple is an equality filter on that field.
            #[test]
            fn pair_is_equality(field in "[a-z_]{1,12}", value in any::<i64>()) {
                let c = Criterion::try_from(vec![json!(field.clone()), json!(value)]).unwrap();
                prop_assert_eq!(c, Criterion::eq(field, value));
            }
        }
    }
}
