//! Model types for parsed `.schema` documents.

mod document;
mod field_argument;
mod field_decl;
mod field_name;
mod field_type;
mod package_name;
mod scalar_type;
mod type_decl;
mod type_name;
mod type_ref;

pub use document::Document;
pub use field_argument::FieldArgument;
pub use field_decl::FieldDecl;
pub use field_name::FieldName;
pub use field_type::FieldType;
pub use package_name::PackageName;
pub use scalar_type::ScalarType;
pub use type_decl::TypeDecl;
pub use type_name::TypeName;
pub use type_ref::TypeRef;

/// Returns true if `s` matches the GraphQL name shape `[A-Za-z_][A-Za-z0-9_]*`.
pub(crate) fn is_graphql_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
