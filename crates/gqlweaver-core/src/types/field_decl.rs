use serde::{Deserialize, Serialize};

use super::field_argument::FieldArgument;
use super::field_name::FieldName;
use super::field_type::FieldType;

/// One field of a type block: name, declared type shape, ordered argument
/// list, and required flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: FieldName,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<FieldArgument>,
    #[serde(default)]
    pub required: bool,
}

impl FieldDecl {
    /// Creates an optional field with no arguments.
    pub fn new(name: FieldName, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            args: Vec::new(),
            required: false,
        }
    }

    /// Creates a field with an argument list.
    pub fn with_args(name: FieldName, field_type: FieldType, args: Vec<FieldArgument>) -> Self {
        Self {
            name,
            field_type,
            args,
            required: false,
        }
    }

    /// Marks the field required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScalarType, TypeRef};

    #[test]
    fn constructors() {
        let field = FieldDecl::new(
            FieldName::new("timeseries").unwrap(),
            FieldType::Scalar(TypeRef::Scalar(ScalarType::Int)),
        );
        assert!(!field.required);
        assert!(field.args.is_empty());

        let required = field.clone().required();
        assert!(required.required);
        assert_eq!(required.name, field.name);
    }
}
