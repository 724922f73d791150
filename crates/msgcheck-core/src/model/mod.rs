pub mod dynamic;
pub mod metadata;
pub mod scalar;
pub mod wire;

pub use dynamic::{DynamicMessage, DynamicValue};
pub use metadata::{MessageMetadata, Properties};
pub use scalar::Scalar;
pub use wire::{WireMessage, WireValue};
