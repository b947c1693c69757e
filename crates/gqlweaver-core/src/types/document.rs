use serde::{Deserialize, Serialize};

use super::package_name::PackageName;
use super::type_decl::TypeDecl;

/// A complete parsed schema document: the package name plus every type
/// block discovered before stream exhaustion.
///
/// The parser yields [`TypeDecl`] values one at a time; this is the
/// materialized form produced by the whole-document convenience entry
/// point and consumed by generator tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub package: PackageName,
    pub types: Vec<TypeDecl>,
}

impl Document {
    /// Creates a new document.
    pub fn new(package: PackageName, types: Vec<TypeDecl>) -> Self {
        Self { package, types }
    }
}
