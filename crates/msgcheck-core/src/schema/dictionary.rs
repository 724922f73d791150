use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::target_type::TargetType;

/// How a field's values are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Scalar,
    ScalarList,
    Message,
    MessageList,
}

/// Structure of a single field inside a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStructure {
    pub name: String,
    #[serde(default)]
    pub target_type: TargetType,
    #[serde(default)]
    pub is_complex: bool,
    #[serde(default)]
    pub is_collection: bool,
    /// alias -> value, in declaration order
    #[serde(default)]
    pub enum_aliases: IndexMap<String, String>,
    /// Name of the message structure a complex field holds
    #[serde(default)]
    pub reference_name: Option<String>,
}

impl FieldStructure {
    /// A simple (non-complex) field
    pub fn simple(name: impl Into<String>, target_type: TargetType) -> Self {
        Self {
            name: name.into(),
            target_type,
            is_complex: false,
            is_collection: false,
            enum_aliases: IndexMap::new(),
            reference_name: None,
        }
    }

    /// A field holding a nested message of structure `reference_name`
    pub fn complex(name: impl Into<String>, reference_name: impl Into<String>) -> Self {
        Self {
            is_complex: true,
            reference_name: Some(reference_name.into()),
            ..Self::simple(name, TargetType::String)
        }
    }

    pub fn collection(mut self) -> Self {
        self.is_collection = true;
        self
    }

    pub fn with_enum_alias(mut self, alias: impl Into<String>, value: impl Into<String>) -> Self {
        self.enum_aliases.insert(alias.into(), value.into());
        self
    }

    pub fn is_enum(&self) -> bool {
        !self.enum_aliases.is_empty()
    }

    pub fn shape(&self) -> FieldShape {
        match (self.is_complex, self.is_collection) {
            (false, false) => FieldShape::Scalar,
            (false, true) => FieldShape::ScalarList,
            (true, false) => FieldShape::Message,
            (true, true) => FieldShape::MessageList,
        }
    }

    /// Resolve a raw literal against the enum table
    ///
    /// Alias keys are matched before values, so an alias that happens to
    /// equal another entry's value resolves to its own value.
    pub fn resolve_enum(&self, raw: &str) -> Option<&str> {
        self.enum_aliases
            .get(raw)
            .or_else(|| self.enum_aliases.values().find(|v| v.as_str() == raw))
            .map(String::as_str)
    }

    /// First alias whose value equals `value`
    pub fn alias_for_value(&self, value: &str) -> Option<&str> {
        self.enum_aliases
            .iter()
            .find(|(_, v)| v.as_str() == value)
            .map(|(alias, _)| alias.as_str())
    }
}

/// Structure of one message type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStructure {
    pub name: String,
    #[serde(default)]
    pub fields: IndexMap<String, FieldStructure>,
}

impl MessageStructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, field: FieldStructure) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldStructure> {
        self.fields.get(name)
    }
}

/// All message structures of one protocol dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDictionary {
    pub namespace: String,
    #[serde(default)]
    pub messages: IndexMap<String, MessageStructure>,
}

impl SchemaDictionary {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            messages: IndexMap::new(),
        }
    }

    pub fn with_message(mut self, message: MessageStructure) -> Self {
        self.messages.insert(message.name.clone(), message);
        self
    }

    pub fn message(&self, name: &str) -> Option<&MessageStructure> {
        self.messages.get(name)
    }

    /// Structure referenced by a complex field, if it resolves
    pub fn referenced(&self, field: &FieldStructure) -> Option<&MessageStructure> {
        field
            .reference_name
            .as_deref()
            .and_then(|name| self.message(name))
    }
}
