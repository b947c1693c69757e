use std::io::Read;

use gqlweaver_core::types::{
    Document, FieldArgument, FieldDecl, FieldType, ScalarType, TypeDecl, TypeRef,
};
use gqlweaver_dsl::{DslError, Parser};

use crate::error::CompileError;

/// Compile schema source text into Go `graphql-go` declarations.
///
/// Sequences the parser and generator lazily: one type block is pulled,
/// rendered, and appended at a time. The first parse error is forwarded
/// unchanged and no output text is produced.
pub fn compile_source(source: &str) -> Result<String, DslError> {
    let mut parser = Parser::new(source);
    let package = parser.parse_package()?;

    let mut output = String::new();
    output.push_str("package ");
    output.push_str(package.as_str());
    output.push('\n');

    let mut rendered = 0usize;
    while let Some(decl) = parser.parse_type()? {
        output.push('\n');
        render_type(&decl, &mut output);
        rendered += 1;
    }

    tracing::debug!(package = %package, types = rendered, "generated schema objects");
    Ok(output)
}

/// Compile a readable character stream into Go `graphql-go` declarations.
///
/// This is the stream-to-text entry point the driver wraps with file IO.
pub fn compile_reader(mut reader: impl Read) -> Result<String, CompileError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    compile_source(&source).map_err(CompileError::Parse)
}

/// Render an already-parsed document. Equivalent to a successful
/// [`compile_source`] run over the text it was parsed from.
pub fn render_document(document: &Document) -> String {
    let mut output = String::new();
    output.push_str("package ");
    output.push_str(document.package.as_str());
    output.push('\n');

    for decl in &document.types {
        output.push('\n');
        render_type(decl, &mut output);
    }

    output
}

/// Render one object declaration block.
pub fn render_type(decl: &TypeDecl, output: &mut String) {
    output.push_str("var ");
    output.push_str(decl.name.as_str());
    output.push_str(" = graphql.NewObject(graphql.ObjectConfig{\n");
    output.push_str("\tName: \"");
    output.push_str(decl.name.as_str());
    output.push_str("\",\n");

    if decl.fields.is_empty() {
        output.push_str("\tFields: graphql.Fields{},\n");
    } else {
        output.push_str("\tFields: graphql.Fields{\n");
        for field in &decl.fields {
            render_field(field, output);
        }
        output.push_str("\t},\n");
    }

    output.push_str("})\n");
}

fn render_field(field: &FieldDecl, output: &mut String) {
    output.push_str("\t\t\"");
    output.push_str(field.name.as_str());
    output.push_str("\": &graphql.Field{\n");
    output.push_str("\t\t\tType: ");
    output.push_str(&field_type_expr(field));
    output.push_str(",\n");

    if !field.args.is_empty() {
        output.push_str("\t\t\tArgs: graphql.FieldConfigArgument{\n");
        for arg in &field.args {
            render_argument(arg, output);
        }
        output.push_str("\t\t\t},\n");
    }

    output.push_str("\t\t},\n");
}

fn render_argument(arg: &FieldArgument, output: &mut String) {
    output.push_str("\t\t\t\t\"");
    output.push_str(arg.name.as_str());
    output.push_str("\": &graphql.ArgumentConfig{\n");
    output.push_str("\t\t\t\t\tType: ");
    output.push_str(&wrap_required(resolve_type_ref(&arg.arg_type), arg.required));
    output.push_str(",\n");

    if let Some(default) = &arg.default {
        output.push_str("\t\t\t\t\tDefaultValue: ");
        output.push_str(default);
        output.push_str(",\n");
    }

    output.push_str("\t\t\t\t},\n");
}

/// The full type expression of a field.
///
/// The required wrap is applied to the element type before list wrapping,
/// so `[Foo]!` emits a list of non-null elements, not a non-null list.
fn field_type_expr(field: &FieldDecl) -> String {
    match &field.field_type {
        FieldType::Scalar(type_ref) => wrap_required(resolve_type_ref(type_ref), field.required),
        FieldType::List(elem) => {
            let elem_expr = wrap_required(elem.as_str().to_string(), field.required);
            format!("graphql.NewList({elem_expr})")
        }
        // Map values have no graphql-go representation of their own and
        // degrade to a string, the same way the `id` scalar does.
        FieldType::Map { .. } => {
            wrap_required(scalar_target(ScalarType::String).to_string(), field.required)
        }
    }
}

fn resolve_type_ref(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Scalar(scalar) => scalar_target(*scalar).to_string(),
        TypeRef::Named(name) => name.as_str().to_string(),
    }
}

/// The fixed scalar resolution table.
fn scalar_target(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "graphql.String",
        ScalarType::Float => "graphql.Float",
        ScalarType::Int => "graphql.Int",
        ScalarType::Boolean => "graphql.Boolean",
        ScalarType::Id => "graphql.String",
    }
}

fn wrap_required(expr: String, required: bool) -> String {
    if required {
        format!("graphql.NewNonNull({expr})")
    } else {
        expr
    }
}
