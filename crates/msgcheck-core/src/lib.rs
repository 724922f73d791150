//! msgcheck core - schema-aware message conversion and value filters
//!
//! This crate provides:
//! - Wire and dynamic message models with metadata
//! - Schema dictionaries with enum aliases
//! - Wire → dynamic conversion with typed coercion and path-tracked errors
//! - Dynamic → wire reverse conversion
//! - Value filters compiled into predicate trees
//! - The predicate family used to compare actual values with expectations

pub mod coercion;
pub mod convert;
pub mod errors;
pub mod filter;
pub mod logging_facility;
pub mod model;
pub mod predicate;
pub mod schema;

// Re-export commonly used types
pub use convert::{ConverterSettings, MessageConverter, ReverseConverter, ReverseSettings};
pub use errors::{ConvertError, ErrorKind, MsgCheckError, Result, ValidationError};
pub use filter::{
    build, build_metadata, FilterOperation, FilterSettings, FilterSpec, MetadataFilter,
    PredicateNode, PredicateTree, ValueFilter,
};
pub use model::{DynamicMessage, DynamicValue, MessageMetadata, Scalar, WireMessage, WireValue};
pub use predicate::Predicate;
pub use schema::{FieldStructure, MessageStructure, SchemaDictionary, TargetType};
