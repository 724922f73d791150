use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed representation a simple field is coerced to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TargetType {
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    BigDecimal,
    Character,
    #[default]
    String,
    LocalDate,
    LocalTime,
    LocalDateTime,
}

impl TargetType {
    pub fn name(&self) -> &'static str {
        match self {
            TargetType::Boolean => "Boolean",
            TargetType::Byte => "Byte",
            TargetType::Short => "Short",
            TargetType::Integer => "Integer",
            TargetType::Long => "Long",
            TargetType::Float => "Float",
            TargetType::Double => "Double",
            TargetType::BigDecimal => "BigDecimal",
            TargetType::Character => "Character",
            TargetType::String => "String",
            TargetType::LocalDate => "LocalDate",
            TargetType::LocalTime => "LocalTime",
            TargetType::LocalDateTime => "LocalDateTime",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
