use std::fmt;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors that occur during lexing or parsing.
///
/// The first error aborts the parse; there is no recovery and no
/// partial-result production.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// The scanner produced an illegal token (input matching no rule),
    /// rejected here at the grammar position where it appeared.
    InvalidToken { text: String, span: Span },

    /// The parser encountered an unexpected token.
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    /// The input ended inside a type block, field declaration, or
    /// argument list.
    UnexpectedEndOfInput { expected: String },

    /// A package name failed identifier validation.
    InvalidPackageName { name: String, span: Span },

    /// A type name failed identifier validation.
    InvalidTypeName { name: String, span: Span },

    /// A field name failed identifier validation.
    InvalidFieldName { name: String, span: Span },

    /// An argument name failed identifier validation.
    InvalidArgumentName { name: String, span: Span },
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { text, span } => {
                write!(f, "invalid token '{text}' at {span}")
            }
            Self::UnexpectedToken {
                expected,
                found,
                span,
            } => {
                write!(
                    f,
                    "unexpected token at {span}: expected {expected}, found {found}"
                )
            }
            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "unexpected end of input: expected {expected}")
            }
            Self::InvalidPackageName { name, span } => {
                write!(
                    f,
                    "invalid package name '{name}' at {span}: must match [A-Za-z_][A-Za-z0-9_]*"
                )
            }
            Self::InvalidTypeName { name, span } => {
                write!(
                    f,
                    "invalid type name '{name}' at {span}: must match [A-Za-z_][A-Za-z0-9_]*"
                )
            }
            Self::InvalidFieldName { name, span } => {
                write!(
                    f,
                    "invalid field name '{name}' at {span}: must match [A-Za-z_][A-Za-z0-9_]*"
                )
            }
            Self::InvalidArgumentName { name, span } => {
                write!(
                    f,
                    "invalid argument name '{name}' at {span}: must match [A-Za-z_][A-Za-z0-9_]*"
                )
            }
        }
    }
}

impl std::error::Error for DslError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_display() {
        let span = Span::new(10, 20);
        assert_eq!(span.to_string(), "10..20");
    }

    #[test]
    fn error_display_invalid_token() {
        let err = DslError::InvalidToken {
            text: "#".into(),
            span: Span::new(0, 1),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid token '#'"));
        assert!(msg.contains("0..1"));
    }

    #[test]
    fn error_display_unexpected_token() {
        let err = DslError::UnexpectedToken {
            expected: "':'".into(),
            found: "'int' ('int')".into(),
            span: Span::new(5, 8),
        };
        let msg = err.to_string();
        assert!(msg.contains("expected ':'"));
        assert!(msg.contains("found 'int'"));
    }

    #[test]
    fn error_display_unexpected_eof() {
        let err = DslError::UnexpectedEndOfInput {
            expected: "field declaration or '}'".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unexpected end of input"));
        assert!(msg.contains("field declaration"));
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DslError::InvalidTypeName {
            name: "9Lives".into(),
            span: Span::new(3, 9),
        });
        assert!(err.to_string().contains("invalid type name"));
    }
}
