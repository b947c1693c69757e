use gqlweaver_dsl::DslError;
use miette::{Diagnostic, NamedSource, SourceSpan};

/// A diagnostic wrapping a `DslError` for rich miette rendering.
///
/// Provides source code highlighting, span labels, and actionable
/// suggestions when rendering parse errors in human-readable mode.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `DslError` into a miette `SchemaDiagnostic`.
pub fn dsl_error_to_diagnostic(error: &DslError, source: &str, filename: &str) -> SchemaDiagnostic {
    let named_src = NamedSource::new(filename, source.to_string());
    let end_span: SourceSpan = (source.len().saturating_sub(1), 1).into();

    match error {
        DslError::InvalidToken { text, span } => SchemaDiagnostic {
            src: named_src,
            span: to_source_span(span),
            message: format!("invalid token '{text}'"),
            label: "unrecognized character".to_string(),
            suggestion: Some("Remove or replace this character.".to_string()),
        },

        DslError::UnexpectedToken {
            expected,
            found,
            span,
        } => SchemaDiagnostic {
            src: named_src,
            span: to_source_span(span),
            message: format!("unexpected token: expected {expected}, found {found}"),
            label: format!("expected {expected}"),
            suggestion: None,
        },

        DslError::UnexpectedEndOfInput { expected } => SchemaDiagnostic {
            src: named_src,
            span: end_span,
            message: format!("unexpected end of input: expected {expected}"),
            label: "input ended here".to_string(),
            suggestion: Some(format!("Add {expected} to complete the declaration.")),
        },

        DslError::InvalidPackageName { name, span } => SchemaDiagnostic {
            src: named_src,
            span: to_source_span(span),
            message: format!("invalid package name '{name}'"),
            label: "must match [A-Za-z_][A-Za-z0-9_]*".to_string(),
            suggestion: None,
        },

        DslError::InvalidTypeName { name, span } => SchemaDiagnostic {
            src: named_src,
            span: to_source_span(span),
            message: format!("invalid type name '{name}'"),
            label: "must match [A-Za-z_][A-Za-z0-9_]*".to_string(),
            suggestion: None,
        },

        DslError::InvalidFieldName { name, span } => SchemaDiagnostic {
            src: named_src,
            span: to_source_span(span),
            message: format!("invalid field name '{name}'"),
            label: "must match [A-Za-z_][A-Za-z0-9_]*".to_string(),
            suggestion: None,
        },

        DslError::InvalidArgumentName { name, span } => SchemaDiagnostic {
            src: named_src,
            span: to_source_span(span),
            message: format!("invalid argument name '{name}'"),
            label: "must match [A-Za-z_][A-Za-z0-9_]*".to_string(),
            suggestion: None,
        },

        other => SchemaDiagnostic {
            src: named_src,
            span: end_span,
            message: other.to_string(),
            label: "here".to_string(),
            suggestion: None,
        },
    }
}

fn to_source_span(span: &gqlweaver_dsl::Span) -> SourceSpan {
    (span.start, span.end.saturating_sub(span.start)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlweaver_dsl::Span;

    #[test]
    fn unexpected_token_diagnostic_carries_label() {
        let err = DslError::UnexpectedToken {
            expected: "':'".into(),
            found: "'int' ('int')".into(),
            span: Span::new(29, 32),
        };
        let diag = dsl_error_to_diagnostic(&err, "package demo type Query { f int }", "x.schema");
        assert!(diag.to_string().contains("expected ':'"));
    }

    #[test]
    fn eof_diagnostic_points_at_input_end() {
        let err = DslError::UnexpectedEndOfInput {
            expected: "'}'".into(),
        };
        let diag = dsl_error_to_diagnostic(&err, "package demo type Query {", "x.schema");
        assert!(diag.to_string().contains("unexpected end of input"));
    }
}
