//! Wire <-> dynamic message conversion

pub mod to_dynamic;
pub mod to_wire;

use serde::{Deserialize, Serialize};

pub use to_dynamic::MessageConverter;
pub use to_wire::ReverseConverter;

/// Construction-time options for [`MessageConverter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterSettings {
    /// Pass unknown enum literals through instead of failing
    pub allow_unknown_enum_values: bool,
    /// Convert wire nulls to `DynamicValue::NullMarker` instead of `Null`
    pub use_null_marker: bool,
}

/// Construction-time options for [`ReverseConverter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReverseSettings {
    /// Render decimals without trailing zeros
    pub strip_trailing_zeros: bool,
    /// Replace enum values with their schema alias (needs a schema)
    pub replace_values_with_enum_names: bool,
}
