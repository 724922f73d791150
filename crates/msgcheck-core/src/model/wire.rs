use indexmap::IndexMap;

use super::metadata::MessageMetadata;

/// Value carried in a wire message field
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Scalar(String),
    List(Vec<WireValue>),
    Message(WireMessage),
    Null,
}

impl WireValue {
    /// Kind name used in mismatch diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            WireValue::Scalar(_) => "Scalar",
            WireValue::List(_) => "List",
            WireValue::Message(_) => "Message",
            WireValue::Null => "Null",
        }
    }

    pub fn scalar(value: impl Into<String>) -> Self {
        WireValue::Scalar(value.into())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            WireValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[WireValue]> {
        match self {
            WireValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&WireMessage> {
        match self {
            WireValue::Message(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for WireValue {
    fn from(s: &str) -> Self {
        WireValue::Scalar(s.to_string())
    }
}

impl From<String> for WireValue {
    fn from(s: String) -> Self {
        WireValue::Scalar(s)
    }
}

impl From<WireMessage> for WireValue {
    fn from(m: WireMessage) -> Self {
        WireValue::Message(m)
    }
}

impl From<Vec<WireValue>> for WireValue {
    fn from(items: Vec<WireValue>) -> Self {
        WireValue::List(items)
    }
}

/// Typed wire envelope: message type, ordered fields, metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WireMessage {
    message_type: String,
    fields: IndexMap<String, WireValue>,
    metadata: MessageMetadata,
}

impl WireMessage {
    pub fn new(message_type: impl Into<String>) -> Self {
        Self {
            message_type: message_type.into(),
            fields: IndexMap::new(),
            metadata: MessageMetadata::default(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<WireValue>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Insert or replace a field; a replaced field keeps its position
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<WireValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    pub fn field(&self, name: &str) -> Option<&WireValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &WireValue)> {
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
