use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A validated object type name matching `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Also used for named type references: a field whose type is not one of
/// the scalar keywords refers to another generated object by this name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    /// Creates a new `TypeName`, validating the identifier shape.
    pub fn new(s: impl Into<String>) -> Result<Self, ModelError> {
        let s = s.into();
        if !super::is_graphql_name(&s) {
            return Err(ModelError::InvalidTypeName(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TypeName> for String {
    fn from(n: TypeName) -> String {
        n.0
    }
}

impl TryFrom<String> for TypeName {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
