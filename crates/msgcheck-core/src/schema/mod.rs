//! Read-only schema dictionary describing message structures
//!
//! Dictionaries are supplied by the caller (typically loaded from the
//! protocol's dictionary files elsewhere) and are never mutated here.

pub mod dictionary;
pub mod target_type;

pub use dictionary::{FieldShape, FieldStructure, MessageStructure, SchemaDictionary};
pub use target_type::TargetType;
