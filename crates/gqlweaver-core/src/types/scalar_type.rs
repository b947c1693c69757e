use std::fmt;

use serde::{Deserialize, Serialize};

/// The scalar type keywords of the schema language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    String,
    Float,
    Int,
    Boolean,
    /// The `id` keyword. Carried distinctly in the model even though the
    /// generated output degrades it to a string representation.
    Id,
}

impl ScalarType {
    /// Returns the DSL keyword for this scalar, in canonical lowercase.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Float => "float",
            Self::Int => "int",
            Self::Boolean => "boolean",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
