//! Wire message to dynamic message conversion
//!
//! With a schema every field is looked up in its message structure and
//! coerced to the declared type; without one the tree is copied with raw
//! string leaves. Errors carry the path from the root message to the
//! failing node.

use crate::coercion;
use crate::convert::ConverterSettings;
use crate::errors::{ConvertError, MsgCheckError, Result};
use crate::model::{DynamicMessage, DynamicValue, Scalar, WireMessage, WireValue};
use crate::schema::{FieldShape, FieldStructure, MessageStructure, SchemaDictionary};
use crate::{log_op_end, log_op_error, log_op_start};

/// Converts wire messages into dynamic messages
#[derive(Debug, Clone, Default)]
pub struct MessageConverter {
    settings: ConverterSettings,
}

impl MessageConverter {
    pub fn new(settings: ConverterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ConverterSettings {
        &self.settings
    }

    /// Convert `wire`, schema-aware when `schema` is given
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a blank message type
    /// - `UnknownMessageType` / `UnknownField` for schema lookups that miss
    /// - `UnknownEnumValue` unless unknown enum values are allowed
    /// - `TypeMismatch` when a wire value's kind does not fit its field
    /// - `ValueParse` when a literal does not coerce to the field type
    pub fn convert(
        &self,
        wire: &WireMessage,
        schema: Option<&SchemaDictionary>,
    ) -> Result<DynamicMessage> {
        log_op_start!(
            "convert_message",
            message_type = wire.message_type(),
            schema_aware = schema.is_some(),
            correlation_id = wire.metadata().correlation_id.as_ref().map(|id| id.as_str())
        );
        let start = std::time::Instant::now();

        let result = self.convert_impl(wire, schema).map_err(|e| {
            log_op_error!(
                "convert_message",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                message_type = wire.message_type()
            );
            e
        })?;

        log_op_end!(
            "convert_message",
            duration_ms = start.elapsed().as_millis() as u64,
            message_type = wire.message_type(),
            field_count = result.len() as u64
        );
        Ok(result)
    }

    fn convert_impl(
        &self,
        wire: &WireMessage,
        schema: Option<&SchemaDictionary>,
    ) -> Result<DynamicMessage> {
        let message_type = wire.message_type();
        if message_type.trim().is_empty() {
            return Err(ConvertError::from(MsgCheckError::BlankMessageType).within_field(message_type));
        }

        let mut message = match schema {
            Some(schema) => {
                let structure = schema.message(message_type).ok_or_else(|| {
                    ConvertError::from(MsgCheckError::UnknownMessageType {
                        message_type: message_type.to_string(),
                    })
                    .within_field(message_type)
                })?;
                self.convert_structured(&structure.name, wire, structure, schema)
                    .map_err(|e| e.within_field(&structure.name))?
            }
            None => self.convert_raw_message(message_type, wire),
        };

        let metadata = message.metadata_mut();
        metadata.correlation_id = wire.metadata().correlation_id.clone();
        if !wire.metadata().properties.is_empty() {
            metadata.properties = wire.metadata().properties.clone();
        }
        Ok(message)
    }

    // ----- schema-aware -----

    fn convert_structured(
        &self,
        name: &str,
        wire: &WireMessage,
        structure: &MessageStructure,
        schema: &SchemaDictionary,
    ) -> Result<DynamicMessage> {
        let mut message = DynamicMessage::new(name);
        for (field_name, value) in wire.fields() {
            let field = structure.field(field_name).ok_or_else(|| {
                ConvertError::from(MsgCheckError::UnknownField {
                    field: field_name.to_string(),
                    structure: structure.name.clone(),
                })
                .within_field(field_name)
            })?;
            let converted = self
                .convert_field(field, value, schema)
                .map_err(|e| e.within_field(field_name))?;
            message.set_field(field_name, converted);
        }
        tracing::trace!(structure = name, fields = message.len() as u64, "converted structure");
        Ok(message)
    }

    fn convert_field(
        &self,
        field: &FieldStructure,
        value: &WireValue,
        schema: &SchemaDictionary,
    ) -> Result<DynamicValue> {
        if let WireValue::Null = value {
            return Ok(self.null_value());
        }
        match field.shape() {
            FieldShape::Scalar => match value {
                WireValue::Scalar(raw) => self.convert_scalar(field, raw, schema),
                other => Err(unexpected_kind(field, "Scalar", other)),
            },
            FieldShape::Message => match value {
                WireValue::Message(nested) => self
                    .convert_nested(field, nested, schema)
                    .map(DynamicValue::Message),
                other => Err(unexpected_kind(field, "Message", other)),
            },
            FieldShape::ScalarList | FieldShape::MessageList => match value {
                WireValue::List(items) => items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        self.convert_element(field, item, schema)
                            .map_err(|e| e.within_index(i))
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(DynamicValue::List),
                other => Err(unexpected_kind(field, "List", other)),
            },
        }
    }

    fn convert_element(
        &self,
        field: &FieldStructure,
        item: &WireValue,
        schema: &SchemaDictionary,
    ) -> Result<DynamicValue> {
        match (field.shape(), item) {
            (_, WireValue::Null) => Ok(self.null_value()),
            (FieldShape::MessageList, WireValue::Message(nested)) => self
                .convert_nested(field, nested, schema)
                .map(DynamicValue::Message),
            (FieldShape::MessageList, other) => Err(unexpected_kind(field, "Message", other)),
            (_, WireValue::Scalar(raw)) => self.convert_scalar(field, raw, schema),
            (_, other) => Err(unexpected_kind(field, "Scalar", other)),
        }
    }

    fn convert_nested(
        &self,
        field: &FieldStructure,
        nested: &WireMessage,
        schema: &SchemaDictionary,
    ) -> Result<DynamicMessage> {
        let reference = field.reference_name.as_deref().ok_or_else(|| {
            ConvertError::from(MsgCheckError::MissingReference {
                field: field.name.clone(),
            })
        })?;
        let structure = schema.message(reference).ok_or_else(|| {
            ConvertError::from(MsgCheckError::UnknownMessageType {
                message_type: reference.to_string(),
            })
        })?;
        self.convert_structured(reference, nested, structure, schema)
    }

    fn convert_scalar(
        &self,
        field: &FieldStructure,
        raw: &str,
        schema: &SchemaDictionary,
    ) -> Result<DynamicValue> {
        let literal = if field.is_enum() {
            match field.resolve_enum(raw) {
                Some(value) => value,
                None if self.settings.allow_unknown_enum_values => {
                    tracing::debug!(
                        field_name = %field.name,
                        value = raw,
                        "passing unknown enum value through"
                    );
                    return Ok(DynamicValue::Scalar(Scalar::String(raw.to_string())));
                }
                None => {
                    return Err(MsgCheckError::UnknownEnumValue {
                        field: field.name.clone(),
                        value: raw.to_string(),
                        namespace: schema.namespace.clone(),
                    }
                    .into())
                }
            }
        } else {
            raw
        };

        let scalar = coercion::coerce(literal, field.target_type)?;
        Ok(DynamicValue::Scalar(scalar))
    }

    // ----- schema-less -----

    fn convert_raw_message(&self, name: &str, wire: &WireMessage) -> DynamicMessage {
        let mut message = DynamicMessage::new(name);
        for (field_name, value) in wire.fields() {
            message.set_field(field_name, self.convert_raw_value(field_name, value));
        }
        message
    }

    fn convert_raw_value(&self, name: &str, value: &WireValue) -> DynamicValue {
        match value {
            WireValue::Scalar(raw) => DynamicValue::Scalar(Scalar::String(raw.clone())),
            WireValue::Message(nested) => {
                DynamicValue::Message(self.convert_raw_message(name, nested))
            }
            WireValue::List(items) => DynamicValue::List(
                items
                    .iter()
                    .map(|item| self.convert_raw_value(name, item))
                    .collect(),
            ),
            WireValue::Null => self.null_value(),
        }
    }

    fn null_value(&self) -> DynamicValue {
        if self.settings.use_null_marker {
            DynamicValue::NullMarker
        } else {
            DynamicValue::Null
        }
    }
}

fn unexpected_kind(field: &FieldStructure, expected: &str, actual: &WireValue) -> ConvertError {
    MsgCheckError::UnexpectedValueKind {
        field: field.name.clone(),
        expected: expected.to_string(),
        actual: actual.kind_name().to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::schema::TargetType;

    fn schema() -> SchemaDictionary {
        SchemaDictionary::new("test").with_message(
            MessageStructure::new("Root")
                .with_field(FieldStructure::simple("qty", TargetType::Integer))
                .with_field(FieldStructure::simple("flag", TargetType::Boolean)),
        )
    }

    #[test]
    fn test_scalar_fields_are_coerced() {
        let wire = WireMessage::new("Root")
            .with_field("qty", "5")
            .with_field("flag", "Y");
        let msg = MessageConverter::default().convert(&wire, Some(&schema())).unwrap();

        assert_eq!(msg.name(), "Root");
        assert_eq!(msg.field("qty"), Some(&DynamicValue::Scalar(Scalar::Int(5))));
        assert_eq!(msg.field("flag"), Some(&DynamicValue::Scalar(Scalar::Bool(true))));
    }

    #[test]
    fn test_scalar_given_for_list_is_type_mismatch() {
        let dict = SchemaDictionary::new("test").with_message(
            MessageStructure::new("Root")
                .with_field(FieldStructure::simple("ids", TargetType::Long).collection()),
        );
        let wire = WireMessage::new("Root").with_field("ids", "1");
        let err = MessageConverter::default().convert(&wire, Some(&dict)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.path_string(), "Root.ids");
        assert_eq!(err.message(), "Expected 'List' value but got 'Scalar' for field 'ids'");
    }

    #[test]
    fn test_blank_message_type_rejected() {
        let err = MessageConverter::default()
            .convert(&WireMessage::new("  "), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.path().len(), 1);
    }

    #[test]
    fn test_null_conversion_follows_marker_setting() {
        let wire = WireMessage::new("Root").with_field("qty", WireValue::Null);

        let plain = MessageConverter::default().convert(&wire, Some(&schema())).unwrap();
        assert_eq!(plain.field("qty"), Some(&DynamicValue::Null));

        let marker = MessageConverter::new(ConverterSettings {
            use_null_marker: true,
            ..Default::default()
        })
        .convert(&wire, None)
        .unwrap();
        assert_eq!(marker.field("qty"), Some(&DynamicValue::NullMarker));
    }
}
