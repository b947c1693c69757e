use std::fmt;

use serde::{Deserialize, Serialize};

use super::scalar_type::ScalarType;
use super::type_name::TypeName;

/// A reference to a type in scalar or named position.
///
/// Named references are never resolved here; whether the target object
/// exists is left to the downstream Go toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum TypeRef {
    Scalar(ScalarType),
    Named(TypeName),
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Named(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_scalar_and_named() {
        assert_eq!(TypeRef::Scalar(ScalarType::Int).to_string(), "int");
        let named = TypeRef::Named(TypeName::new("Animal").unwrap());
        assert_eq!(named.to_string(), "Animal");
    }
}
