use crate::errors::{MsgCheckError, ValidationError};
use crate::filter::FilterOperation;
use crate::model::DynamicValue;

use super::present_scalar;

/// LIKE / NOT_LIKE: full-string regular expression match
///
/// Uses a backtracking engine so possessive quantifiers and lookaround
/// behave as in the expectation files written for them.
#[derive(Debug, Clone)]
pub struct RegexMatch {
    pattern: String,
    regex: fancy_regex::Regex,
    negated: bool,
}

impl RegexMatch {
    /// # Errors
    ///
    /// `InvalidPattern` when `pattern` does not compile.
    pub fn new(pattern: &str, negated: bool) -> Result<Self, MsgCheckError> {
        let regex = fancy_regex::Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            MsgCheckError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            negated,
        })
    }

    /// # Errors
    ///
    /// `TypeMismatch` for message or collection actuals, `PatternEvaluation`
    /// when the engine gives up (backtrack limit).
    pub fn validate(&self, actual: Option<&DynamicValue>) -> Result<bool, ValidationError> {
        let Some(scalar) = present_scalar(actual)? else {
            return Ok(false);
        };
        let text = scalar.to_string();
        let matched =
            self.regex
                .is_match(&text)
                .map_err(|e| ValidationError::PatternEvaluation {
                    pattern: self.pattern.clone(),
                    reason: e.to_string(),
                })?;
        Ok(matched != self.negated)
    }

    pub fn condition(&self) -> String {
        format!("{} {}", self.operation(), self.pattern)
    }

    pub fn operation(&self) -> FilterOperation {
        if self.negated {
            FilterOperation::NotLike
        } else {
            FilterOperation::Like
        }
    }
}

/// WILDCARD / NOT_WILDCARD: `?` is one character, `*` any run
#[derive(Debug, Clone)]
pub struct WildcardMatch {
    pattern: String,
    regex: regex::Regex,
    negated: bool,
}

impl WildcardMatch {
    /// # Errors
    ///
    /// `InvalidPattern` if the translated expression does not compile.
    pub fn new(pattern: &str, negated: bool) -> Result<Self, MsgCheckError> {
        let regex = regex::Regex::new(&glob_to_regex(pattern)).map_err(|e| {
            MsgCheckError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            negated,
        })
    }

    /// # Errors
    ///
    /// `TypeMismatch` for message or collection actuals.
    pub fn validate(&self, actual: Option<&DynamicValue>) -> Result<bool, ValidationError> {
        let Some(scalar) = present_scalar(actual)? else {
            return Ok(false);
        };
        Ok(self.regex.is_match(&scalar.to_string()) != self.negated)
    }

    pub fn condition(&self) -> String {
        format!("{} {}", self.operation(), self.pattern)
    }

    pub fn operation(&self) -> FilterOperation {
        if self.negated {
            FilterOperation::NotWildcard
        } else {
            FilterOperation::Wildcard
        }
    }
}

fn glob_to_regex(pattern: &str) -> String {
    let mut out = String::from("(?s)^");
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            other => out.push_str(&regex::escape(other.encode_utf8(&mut buf))),
        }
    }
    out.push('$');
    out
}
