use logos::Logos;

use crate::error::Span;
use crate::token::Token;

/// A token paired with its source span and literal text.
///
/// The text is the exact consumed run, original casing included, so
/// keyword tokens still carry what the author wrote and whitespace tokens
/// carry the run itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Tokenizes schema source text into a sequence of spanned tokens.
///
/// This never fails: input that matches no rule becomes an
/// [`Token::Illegal`] token, and end of input is simply the end of the
/// returned sequence. Rejecting illegal tokens is the parser's job.
pub fn tokenize(source: &str) -> Vec<SpannedToken> {
    let mut tokens = Vec::new();

    for (result, range) in Token::lexer(source).spanned() {
        let token = result.unwrap_or(Token::Illegal);
        tokens.push(SpannedToken {
            token,
            span: Span::new(range.start, range.end),
            text: source[range].to_string(),
        });
    }

    tokens
}
