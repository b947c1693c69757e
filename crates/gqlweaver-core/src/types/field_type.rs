use std::fmt;

use serde::{Deserialize, Serialize};

use super::type_name::TypeName;
use super::type_ref::TypeRef;

/// The shape of a field's declared type.
///
/// List and map are mutually exclusive by construction; a field is exactly
/// one of scalar, list, or map. The bracketed element of a list is always a
/// named type in this grammar, never a scalar keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "data")]
pub enum FieldType {
    /// A scalar keyword or a bare named-type reference.
    Scalar(TypeRef),
    /// A bracketed list of a named element type, e.g. `[Transactions]`.
    List(TypeName),
    /// A keyed map, e.g. `map[Currency]Balance`. The key and value names
    /// are carried in the model; the generated output currently degrades
    /// the value position to a string representation.
    Map { key: TypeName, value: TypeName },
}

impl FieldType {
    /// Returns true if this is a list type.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns true if this is a keyed-map type.
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map { .. })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(r) => write!(f, "{r}"),
            Self::List(elem) => write!(f, "[{elem}]"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
        }
    }
}
