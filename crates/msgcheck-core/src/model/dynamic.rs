use indexmap::IndexMap;

use super::metadata::MessageMetadata;
use super::scalar::Scalar;

/// Value held by a dynamic message field
///
/// `Null` is the native null; `NullMarker` is the explicit "field was sent
/// as null" sentinel. The two never compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Scalar(Scalar),
    Message(DynamicMessage),
    List(Vec<DynamicValue>),
    Null,
    NullMarker,
}

impl DynamicValue {
    /// Shape name used by type-mismatch diagnostics
    pub fn shape_name(&self) -> &'static str {
        match self {
            DynamicValue::Scalar(_) => "String",
            DynamicValue::Message(_) => "Message",
            DynamicValue::List(items) => match items.first() {
                Some(DynamicValue::Message(_)) => "Collection of Messages",
                Some(DynamicValue::Scalar(_)) => "Collection of Strings",
                _ => "Collection",
            },
            DynamicValue::Null => "Null",
            DynamicValue::NullMarker => "NullMarker",
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            DynamicValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&DynamicMessage> {
        match self {
            DynamicValue::Message(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null_marker(&self) -> bool {
        matches!(self, DynamicValue::NullMarker)
    }
}

impl From<Scalar> for DynamicValue {
    fn from(s: Scalar) -> Self {
        DynamicValue::Scalar(s)
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        DynamicValue::Scalar(Scalar::from(s))
    }
}

impl From<DynamicMessage> for DynamicValue {
    fn from(m: DynamicMessage) -> Self {
        DynamicValue::Message(m)
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(items: Vec<DynamicValue>) -> Self {
        DynamicValue::List(items)
    }
}

/// Schema-flexible message produced by the message converter
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamicMessage {
    name: String,
    fields: IndexMap<String, DynamicValue>,
    metadata: MessageMetadata,
}

impl DynamicMessage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            metadata: MessageMetadata::default(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<DynamicValue>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<DynamicValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, name: &str) -> Option<&DynamicValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &DynamicValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn metadata(&self) -> &MessageMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut MessageMetadata {
        &mut self.metadata
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_marker_distinct_from_null() {
        assert_ne!(DynamicValue::NullMarker, DynamicValue::Null);
        assert!(DynamicValue::NullMarker.is_null_marker());
        assert!(!DynamicValue::Null.is_null_marker());
    }

    #[test]
    fn test_shape_names() {
        let strings = DynamicValue::from(vec![DynamicValue::from("a")]);
        let messages = DynamicValue::from(vec![DynamicValue::from(DynamicMessage::new("M"))]);
        assert_eq!(strings.shape_name(), "Collection of Strings");
        assert_eq!(messages.shape_name(), "Collection of Messages");
        assert_eq!(DynamicValue::from(vec![]).shape_name(), "Collection");
        assert_eq!(DynamicValue::from("a").shape_name(), "String");
    }
}
