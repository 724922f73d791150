//! Value filters and their compilation into predicate trees

pub mod builder;
pub mod settings;
pub mod spec;
pub mod tree;

pub use builder::{build, build_metadata};
pub use settings::FilterSettings;
pub use spec::{FilterOperation, FilterSpec, MetadataFilter, PropertyFilter, ValueFilter};
pub use tree::{PredicateNode, PredicateTree};
