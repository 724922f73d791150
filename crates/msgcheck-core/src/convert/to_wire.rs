//! Dynamic message to wire message conversion

use crate::convert::ReverseSettings;
use crate::errors::{MsgCheckError, Result};
use crate::model::{DynamicMessage, DynamicValue, Scalar, WireMessage, WireValue};
use crate::schema::{FieldStructure, MessageStructure, SchemaDictionary};
use crate::{log_op_end, log_op_start};

/// Renders dynamic messages back into wire messages
///
/// Enum-name substitution looks fields up in the schema passed at
/// construction; every other option works without one.
#[derive(Debug, Clone)]
pub struct ReverseConverter<'a> {
    settings: ReverseSettings,
    schema: Option<&'a SchemaDictionary>,
}

impl<'a> ReverseConverter<'a> {
    /// # Errors
    ///
    /// `InvalidConfiguration` when enum-name substitution is requested
    /// without a schema.
    pub fn new(settings: ReverseSettings, schema: Option<&'a SchemaDictionary>) -> Result<Self> {
        if settings.replace_values_with_enum_names && schema.is_none() {
            return Err(MsgCheckError::InvalidConfiguration {
                reason: "replacing values with enum names requires a schema dictionary"
                    .to_string(),
            }
            .into());
        }
        Ok(Self { settings, schema })
    }

    pub fn settings(&self) -> &ReverseSettings {
        &self.settings
    }

    pub fn convert(&self, message: &DynamicMessage) -> WireMessage {
        log_op_start!("reverse_message", message_type = message.name());
        let start = std::time::Instant::now();

        let structure = self.enum_source().and_then(|s| s.message(message.name()));
        if self.settings.replace_values_with_enum_names && structure.is_none() {
            tracing::debug!(
                message_type = message.name(),
                "no message structure found, enum values kept as-is"
            );
        }
        let mut wire = self.to_wire_message(message, structure);
        *wire.metadata_mut() = message.metadata().clone();

        log_op_end!(
            "reverse_message",
            duration_ms = start.elapsed().as_millis() as u64,
            message_type = message.name(),
            field_count = wire.len() as u64
        );
        wire
    }

    /// Schema consulted for enum names, only when substitution is on
    fn enum_source(&self) -> Option<&'a SchemaDictionary> {
        if self.settings.replace_values_with_enum_names {
            self.schema
        } else {
            None
        }
    }

    fn to_wire_message(
        &self,
        message: &DynamicMessage,
        structure: Option<&MessageStructure>,
    ) -> WireMessage {
        let mut wire = WireMessage::new(message.name());
        for (name, value) in message.fields() {
            let field = structure.and_then(|s| s.field(name));
            wire.set_field(name, self.to_wire_value(value, field));
        }
        wire
    }

    fn to_wire_value(&self, value: &DynamicValue, field: Option<&FieldStructure>) -> WireValue {
        match value {
            DynamicValue::Scalar(scalar) => WireValue::Scalar(self.render_scalar(scalar, field)),
            DynamicValue::Message(nested) => {
                let structure = self
                    .enum_source()
                    .zip(field)
                    .and_then(|(schema, f)| schema.referenced(f));
                WireValue::Message(self.to_wire_message(nested, structure))
            }
            DynamicValue::List(items) => WireValue::List(
                items
                    .iter()
                    .map(|item| self.to_wire_value(item, field))
                    .collect(),
            ),
            DynamicValue::Null | DynamicValue::NullMarker => WireValue::Null,
        }
    }

    fn render_scalar(&self, scalar: &Scalar, field: Option<&FieldStructure>) -> String {
        let text = match scalar {
            Scalar::Decimal(d) if self.settings.strip_trailing_zeros => {
                d.normalized().to_plain_string()
            }
            other => other.to_string(),
        };
        match field {
            Some(f) if self.settings.replace_values_with_enum_names => f
                .alias_for_value(&text)
                .map(str::to_string)
                .unwrap_or(text),
            _ => text,
        }
    }
}
