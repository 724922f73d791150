use std::fmt;
use thiserror::Error;

/// Result type alias using the structured ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure raised by the converters, the filter builder and the
/// predicates is classified by one of these kinds. Each kind maps to a stable
/// code usable by callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Schema lookup
    UnknownMessageType,
    UnknownField,
    UnknownEnumValue,

    // Value shape / coercion
    TypeMismatch,
    ValueParse,
    ComparisonType,
    MissingValue,

    // Filter compilation
    FilterShape,

    // Caller input
    InvalidInput,
    InvalidConfiguration,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::UnknownMessageType => "ERR_UNKNOWN_MESSAGE_TYPE",
            ErrorKind::UnknownField => "ERR_UNKNOWN_FIELD",
            ErrorKind::UnknownEnumValue => "ERR_UNKNOWN_ENUM_VALUE",
            ErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ErrorKind::ValueParse => "ERR_VALUE_PARSE",
            ErrorKind::ComparisonType => "ERR_COMPARISON_TYPE",
            ErrorKind::MissingValue => "ERR_MISSING_VALUE",
            ErrorKind::FilterShape => "ERR_FILTER_SHAPE",
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::InvalidConfiguration => "ERR_INVALID_CONFIGURATION",
        }
    }
}

/// One step of the route from the root message to the failing node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Message name or field name
    Field(String),
    /// Position inside a collection
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Canonical structured error type
///
/// Carries the error kind, the root-cause message and the path from the root
/// message down to the node that failed. Recursive traversals prepend their
/// own segment while the error unwinds, so the innermost segment is added
/// first and the finished path reads outermost to innermost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertError {
    kind: ErrorKind,
    path: Vec<PathSegment>,
    message: String,
}

impl ConvertError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
            message: String::new(),
        }
    }

    /// Add root-cause message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Prepend a field (or message name) segment
    pub fn within_field(mut self, name: impl Into<String>) -> Self {
        self.path.insert(0, PathSegment::Field(name.into()));
        self
    }

    /// Prepend a collection index segment
    pub fn within_index(mut self, index: usize) -> Self {
        self.path.insert(0, PathSegment::Index(index));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Path segments, outermost first
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Dot-joined path, e.g. `Root.complexList.list.[1].Fake`
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Root-cause message without path decoration
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Root-cause message prefixed with the rendered path
    pub fn message_with_path(&self) -> String {
        if self.path.is_empty() {
            self.message.clone()
        } else {
            format!(
                "Message path: {}, cause: {}",
                self.path_string(),
                self.message
            )
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message_with_path())
    }
}

impl std::error::Error for ConvertError {}

// ========== End Error Facility ==========

/// Root causes raised by conversion and filter compilation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MsgCheckError {
    /// Message type absent from the schema dictionary
    #[error("Message '{message_type}' hasn't been found in dictionary")]
    UnknownMessageType { message_type: String },

    /// Complex field without a reference to its message structure
    #[error("Complex field '{field}' does not reference a message structure")]
    MissingReference { field: String },

    /// Wire message arrived without a type name
    #[error("Cannot convert message with blank message type")]
    BlankMessageType,

    /// Field absent from its message structure
    #[error("Field '{field}' hasn't been found in message structure: {structure}")]
    UnknownField { field: String, structure: String },

    /// Enum field value matches neither an alias nor a value
    #[error("Unknown enum value/alias '{value}' for field '{field}' in the '{namespace}' dictionary")]
    UnknownEnumValue {
        field: String,
        value: String,
        namespace: String,
    },

    /// Wire value kind does not fit the field structure
    #[error("Expected '{expected}' value but got '{actual}' for field '{field}'")]
    UnexpectedValueKind {
        field: String,
        expected: String,
        actual: String,
    },

    /// Raw string cannot be coerced to the field's target type
    #[error("Cannot convert from String to {target} - value: {value}, reason: {reason}")]
    ValueParse {
        target: String,
        value: String,
        reason: String,
    },

    /// Filter operand pattern does not compile
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Operator paired with an operand shape it cannot take
    #[error("Operator {operator} cannot be used with {shape} operand: {operand}")]
    FilterShape {
        operator: String,
        shape: String,
        operand: String,
    },

    /// Settings that cannot work together
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl MsgCheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MsgCheckError::UnknownMessageType { .. } | MsgCheckError::MissingReference { .. } => {
                ErrorKind::UnknownMessageType
            }
            MsgCheckError::BlankMessageType => ErrorKind::InvalidInput,
            MsgCheckError::UnknownField { .. } => ErrorKind::UnknownField,
            MsgCheckError::UnknownEnumValue { .. } => ErrorKind::UnknownEnumValue,
            MsgCheckError::UnexpectedValueKind { .. } => ErrorKind::TypeMismatch,
            MsgCheckError::ValueParse { .. } | MsgCheckError::InvalidPattern { .. } => {
                ErrorKind::ValueParse
            }
            MsgCheckError::FilterShape { .. } => ErrorKind::FilterShape,
            MsgCheckError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
        }
    }
}

impl From<MsgCheckError> for ConvertError {
    fn from(err: MsgCheckError) -> Self {
        ConvertError::new(err.kind()).with_message(err.to_string())
    }
}

/// Failures raised while a predicate validates an actual value
///
/// Distinct from [`ConvertError`]: these are reported per field by the
/// comparator and never abort a whole conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Value type mismatch - actual: {actual}, expected: {expected}")]
    TypeMismatch { actual: String, expected: String },

    #[error("Failed to parse value to Number. Value = {value}")]
    NumberParse { value: String },

    #[error("Failed to parse value to Date. Value = {value}")]
    DateParse { value: String },

    #[error("Failed to compare Temporal values {actual}, {expected}")]
    TemporalMismatch { actual: String, expected: String },

    #[error("Cannot compare {actual} value with {expected} operand")]
    Incomparable { actual: String, expected: String },

    #[error("Pattern '{pattern}' could not be evaluated: {reason}")]
    PatternEvaluation { pattern: String, reason: String },

    #[error("The value is missing")]
    MissingValue,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ValidationError::NumberParse { .. }
            | ValidationError::DateParse { .. }
            | ValidationError::PatternEvaluation { .. } => ErrorKind::ValueParse,
            ValidationError::TemporalMismatch { .. } | ValidationError::Incomparable { .. } => {
                ErrorKind::ComparisonType
            }
            ValidationError::MissingValue => ErrorKind::MissingValue,
        }
    }
}

impl From<ValidationError> for ConvertError {
    fn from(err: ValidationError) -> Self {
        ConvertError::new(err.kind()).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_prepended_while_unwinding() {
        let err = ConvertError::from(MsgCheckError::UnknownField {
            field: "Fake".to_string(),
            structure: "Nested".to_string(),
        })
        .within_field("Fake")
        .within_index(1)
        .within_field("list")
        .within_field("complexList")
        .within_field("Root");

        assert_eq!(err.path_string(), "Root.complexList.list.[1].Fake");
        assert_eq!(err.path().len(), 5);
        assert_eq!(err.path()[3], PathSegment::Index(1));
    }

    #[test]
    fn test_message_with_path_format() {
        let err = ConvertError::new(ErrorKind::InvalidInput)
            .with_message("boom")
            .within_field("Root");
        assert_eq!(err.message_with_path(), "Message path: Root, cause: boom");
        assert_eq!(err.to_string(), "[ERR_INVALID_INPUT] Message path: Root, cause: boom");
    }

    #[test]
    fn test_message_without_path() {
        let err = ConvertError::new(ErrorKind::FilterShape).with_message("bad");
        assert_eq!(err.message_with_path(), "bad");
        assert!(err.path().is_empty());
    }

    #[test]
    fn test_validation_error_kinds() {
        let err = ValidationError::TemporalMismatch {
            actual: "2007-12-03".to_string(),
            expected: "2007-12-03T10:15:30".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::ComparisonType);
        assert_eq!(
            err.to_string(),
            "Failed to compare Temporal values 2007-12-03, 2007-12-03T10:15:30"
        );
        assert_eq!(ValidationError::MissingValue.kind(), ErrorKind::MissingValue);
    }
}
