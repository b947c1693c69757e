use std::fmt;

/// Errors that occur when constructing model values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Package name failed GraphQL-name validation.
    InvalidPackageName(String),
    /// Type name failed GraphQL-name validation.
    InvalidTypeName(String),
    /// Field or argument name failed GraphQL-name validation.
    InvalidFieldName(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPackageName(s) => {
                write!(
                    f,
                    "invalid package name '{s}': must match [A-Za-z_][A-Za-z0-9_]*"
                )
            }
            Self::InvalidTypeName(s) => {
                write!(
                    f,
                    "invalid type name '{s}': must match [A-Za-z_][A-Za-z0-9_]*"
                )
            }
            Self::InvalidFieldName(s) => {
                write!(
                    f,
                    "invalid field name '{s}': must match [A-Za-z_][A-Za-z0-9_]*"
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}
