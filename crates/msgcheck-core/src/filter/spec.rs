use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a value filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperation {
    Equal,
    NotEqual,
    Less,
    NotLess,
    More,
    NotMore,
    Like,
    NotLike,
    Wildcard,
    NotWildcard,
    Empty,
    NotEmpty,
    In,
    NotIn,
    EqDecimalPrecision,
    EqTimePrecision,
}

impl FilterOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperation::Equal => "EQUAL",
            FilterOperation::NotEqual => "NOT_EQUAL",
            FilterOperation::Less => "LESS",
            FilterOperation::NotLess => "NOT_LESS",
            FilterOperation::More => "MORE",
            FilterOperation::NotMore => "NOT_MORE",
            FilterOperation::Like => "LIKE",
            FilterOperation::NotLike => "NOT_LIKE",
            FilterOperation::Wildcard => "WILDCARD",
            FilterOperation::NotWildcard => "NOT_WILDCARD",
            FilterOperation::Empty => "EMPTY",
            FilterOperation::NotEmpty => "NOT_EMPTY",
            FilterOperation::In => "IN",
            FilterOperation::NotIn => "NOT_IN",
            FilterOperation::EqDecimalPrecision => "EQ_DECIMAL_PRECISION",
            FilterOperation::EqTimePrecision => "EQ_TIME_PRECISION",
        }
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected value for one field
#[derive(Debug, Clone, PartialEq)]
pub enum ValueFilter {
    Simple {
        operation: FilterOperation,
        value: String,
    },
    List {
        operation: FilterOperation,
        items: Vec<ValueFilter>,
    },
    Message {
        operation: FilterOperation,
        filter: FilterSpec,
    },
    SimpleSet {
        operation: FilterOperation,
        values: IndexSet<String>,
    },
    Null {
        operation: FilterOperation,
    },
}

impl ValueFilter {
    pub fn simple(operation: FilterOperation, value: impl Into<String>) -> Self {
        ValueFilter::Simple {
            operation,
            value: value.into(),
        }
    }

    /// Positional list of element filters
    pub fn list(items: Vec<ValueFilter>) -> Self {
        ValueFilter::List {
            operation: FilterOperation::Equal,
            items,
        }
    }

    pub fn message(filter: FilterSpec) -> Self {
        ValueFilter::Message {
            operation: FilterOperation::Equal,
            filter,
        }
    }

    pub fn set<I, S>(operation: FilterOperation, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueFilter::SimpleSet {
            operation,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn null(operation: FilterOperation) -> Self {
        ValueFilter::Null { operation }
    }

    pub fn operation(&self) -> FilterOperation {
        match self {
            ValueFilter::Simple { operation, .. }
            | ValueFilter::List { operation, .. }
            | ValueFilter::Message { operation, .. }
            | ValueFilter::SimpleSet { operation, .. }
            | ValueFilter::Null { operation } => *operation,
        }
    }

    /// Operand shape name used in shape errors
    pub fn shape_name(&self) -> &'static str {
        match self {
            ValueFilter::Simple { .. } => "single value",
            ValueFilter::List { .. } => "list",
            ValueFilter::Message { .. } => "message",
            ValueFilter::SimpleSet { .. } => "value set",
            ValueFilter::Null { .. } => "null",
        }
    }

    /// Operand rendered for error messages, e.g. `'A'` or `['A', 'B']`
    pub fn operand_text(&self) -> String {
        match self {
            ValueFilter::Simple { value, .. } => format!("'{}'", value),
            ValueFilter::List { items, .. } => {
                let items: Vec<String> = items.iter().map(ValueFilter::operand_text).collect();
                format!("[{}]", items.join(", "))
            }
            ValueFilter::Message { filter, .. } => {
                let fields: Vec<String> = filter
                    .iter()
                    .map(|(name, f)| format!("{}: {}", name, f.operand_text()))
                    .collect();
                format!("{{{}}}", fields.join(", "))
            }
            ValueFilter::SimpleSet { values, .. } => {
                let values: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
                format!("[{}]", values.join(", "))
            }
            ValueFilter::Null { .. } => "null".to_string(),
        }
    }
}

/// Expected values for the fields of one message
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    fields: IndexMap<String, ValueFilter>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, filter: ValueFilter) -> Self {
        self.fields.insert(field.into(), filter);
        self
    }

    pub fn get(&self, field: &str) -> Option<&ValueFilter> {
        self.fields.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueFilter)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Simple filter on one metadata property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    pub operation: FilterOperation,
    pub value: String,
}

/// Expected metadata properties, keyed by property name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataFilter {
    properties: IndexMap<String, PropertyFilter>,
}

impl MetadataFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        property: impl Into<String>,
        operation: FilterOperation,
        value: impl Into<String>,
    ) -> Self {
        self.properties.insert(
            property.into(),
            PropertyFilter {
                operation,
                value: value.into(),
            },
        );
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyFilter)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_serde_names() {
        let json = serde_json::to_string(&FilterOperation::EqDecimalPrecision).unwrap();
        assert_eq!(json, "\"EQ_DECIMAL_PRECISION\"");
        let op: FilterOperation = serde_json::from_str("\"NOT_WILDCARD\"").unwrap();
        assert_eq!(op, FilterOperation::NotWildcard);
        assert_eq!(op.to_string(), "NOT_WILDCARD");
    }

    #[test]
    fn test_operand_text_nests() {
        let filter = ValueFilter::list(vec![
            ValueFilter::simple(FilterOperation::Equal, "x"),
            ValueFilter::message(
                FilterSpec::new()
                    .with("n", ValueFilter::set(FilterOperation::In, ["A", "B"]))
                    .with("m", ValueFilter::null(FilterOperation::Empty)),
            ),
        ]);
        assert_eq!(filter.operand_text(), "['x', {n: ['A', 'B'], m: null}]");
        assert_eq!(ValueFilter::message(FilterSpec::new()).operand_text(), "{}");
    }

    #[test]
    fn test_set_keeps_first_occurrence_order() {
        let filter = ValueFilter::set(FilterOperation::In, ["B", "A", "B"]);
        match filter {
            ValueFilter::SimpleSet { values, .. } => {
                assert_eq!(values.iter().collect::<Vec<_>>(), vec!["B", "A"]);
            }
            other => panic!("unexpected filter {:?}", other),
        }
    }
}
