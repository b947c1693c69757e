use serde::{Deserialize, Serialize};

use super::field_decl::FieldDecl;
use super::type_name::TypeName;

/// A named object declaration: the unit yielded by each parse call.
///
/// Field ordering is preserved and reflected in generated output ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: TypeName,
    pub fields: Vec<FieldDecl>,
}

impl TypeDecl {
    /// Creates a new type declaration.
    pub fn new(name: TypeName, fields: Vec<FieldDecl>) -> Self {
        Self { name, fields }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name.as_str() == name)
    }
}
