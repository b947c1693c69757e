use serde::{Deserialize, Serialize};

use super::field_name::FieldName;
use super::type_ref::TypeRef;

/// One parsed argument of a field.
///
/// The default value, when present, is the literal text captured by the
/// scanner, quote characters included; it is emitted verbatim with no
/// coercion. Arguments render in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldArgument {
    pub name: FieldName,
    pub arg_type: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl FieldArgument {
    /// Creates an optional argument with no default value.
    pub fn new(name: FieldName, arg_type: TypeRef) -> Self {
        Self {
            name,
            arg_type,
            default: None,
            required: false,
        }
    }

    /// Sets the default-value literal.
    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }

    /// Marks the argument required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
