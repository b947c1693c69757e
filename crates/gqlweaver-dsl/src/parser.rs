use gqlweaver_core::types::{
    Document, FieldArgument, FieldDecl, FieldName, FieldType, PackageName, ScalarType, TypeDecl,
    TypeName, TypeRef,
};

use crate::error::DslError;
use crate::lexer::{tokenize, SpannedToken};
use crate::token::Token;

/// Recursive descent parser for the schema grammar.
///
/// Wraps the token stream with a cursor that skips whitespace tokens.
/// Lookahead is a non-consuming `peek`; a construct that turns out
/// optional simply leaves the peeked token in place for the enclosing
/// production.
///
/// The parser is streaming: [`Parser::parse_type`] yields one type block
/// per call and `Ok(None)` once the input is exhausted, idempotently.
/// A single instance must not be driven from more than one caller.
pub struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl Parser {
    /// Creates a parser over the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            tokens: tokenize(source),
            pos: 0,
        }
    }

    // -- Cursor helpers --

    fn skip_whitespace(&mut self) {
        while matches!(
            self.tokens.get(self.pos),
            Some(st) if st.token == Token::Whitespace
        ) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<&SpannedToken> {
        self.skip_whitespace();
        self.tokens.get(self.pos)
    }

    fn peek_token(&mut self) -> Option<&Token> {
        self.peek().map(|st| &st.token)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        self.skip_whitespace();
        let st = self.tokens.get(self.pos).cloned();
        if st.is_some() {
            self.pos += 1;
        }
        st
    }

    /// Consumes the next significant token, failing on exhaustion and on
    /// illegal tokens (deferred lexical errors surface here, at whatever
    /// grammar position they appear).
    fn advance_expected(&mut self, expected: &str) -> Result<SpannedToken, DslError> {
        match self.advance() {
            Some(st) if st.token == Token::Illegal => Err(DslError::InvalidToken {
                text: st.text,
                span: st.span,
            }),
            Some(st) => Ok(st),
            None => Err(DslError::UnexpectedEndOfInput {
                expected: expected.to_string(),
            }),
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<SpannedToken, DslError> {
        let st = self.advance_expected(expected.description())?;
        if st.token == *expected {
            Ok(st)
        } else {
            Err(unexpected(expected.description(), &st))
        }
    }

    fn expect_ident(&mut self, context: &str) -> Result<SpannedToken, DslError> {
        let st = self.advance_expected(context)?;
        if st.token == Token::Ident {
            Ok(st)
        } else {
            Err(unexpected(context, &st))
        }
    }

    /// Consumes a trailing `!` if present; otherwise leaves the peeked
    /// token for the enclosing production.
    fn eat_bang(&mut self) -> bool {
        if self.peek_token() == Some(&Token::Bang) {
            self.advance();
            true
        } else {
            false
        }
    }

    // -- Grammar productions --

    /// package_decl = "package" IDENT
    ///
    /// Must be called once, before the first [`Parser::parse_type`] call.
    pub fn parse_package(&mut self) -> Result<PackageName, DslError> {
        self.expect(&Token::Package)?;
        let name_tok = self.expect_ident("package name")?;
        PackageName::new(&name_tok.text).map_err(|_| DslError::InvalidPackageName {
            name: name_tok.text,
            span: name_tok.span,
        })
    }

    /// type_block = "type" IDENT "{" field_decl* "}"
    ///
    /// Returns `Ok(None)` once the stream has no further significant
    /// tokens; repeated calls at exhaustion keep returning `Ok(None)`.
    pub fn parse_type(&mut self) -> Result<Option<TypeDecl>, DslError> {
        if self.peek().is_none() {
            return Ok(None);
        }

        let st = self.advance_expected("'type'")?;
        if st.token != Token::Type {
            return Err(unexpected("'type'", &st));
        }

        let name_tok = self.expect_ident("type name")?;
        let name = TypeName::new(&name_tok.text).map_err(|_| DslError::InvalidTypeName {
            name: name_tok.text,
            span: name_tok.span,
        })?;

        self.expect(&Token::LBrace)?;

        let mut fields = Vec::new();
        loop {
            match self.peek_token() {
                Some(Token::RBrace) => {
                    self.advance();
                    break;
                }
                None => {
                    return Err(DslError::UnexpectedEndOfInput {
                        expected: "field declaration or '}'".to_string(),
                    });
                }
                _ => fields.push(self.parse_field()?),
            }
        }

        Ok(Some(TypeDecl::new(name, fields)))
    }

    /// field_decl = IDENT arg_list? ":" field_type "!"?
    fn parse_field(&mut self) -> Result<FieldDecl, DslError> {
        let name_tok = self.expect_ident("field name")?;
        let name = FieldName::new(&name_tok.text).map_err(|_| DslError::InvalidFieldName {
            name: name_tok.text,
            span: name_tok.span,
        })?;

        let mut args = Vec::new();
        if self.peek_token() == Some(&Token::LParen) {
            self.advance();
            loop {
                args.push(self.parse_argument()?);

                let sep = self.advance_expected("',' or ')'")?;
                match sep.token {
                    Token::RParen => break,
                    Token::Comma => continue,
                    _ => return Err(unexpected("',' or ')'", &sep)),
                }
            }
        }

        self.expect(&Token::Colon)?;
        let field_type = self.parse_field_type()?;
        let required = self.eat_bang();

        Ok(FieldDecl {
            name,
            field_type,
            args,
            required,
        })
    }

    /// field_type = scalar_type | "[" IDENT "]" | "map" "[" IDENT "]" IDENT
    fn parse_field_type(&mut self) -> Result<FieldType, DslError> {
        let st = self.advance_expected("field type")?;
        match st.token {
            Token::LBracket => {
                let elem_tok = self.expect_ident("list element type")?;
                let elem = TypeName::new(&elem_tok.text).map_err(|_| DslError::InvalidTypeName {
                    name: elem_tok.text,
                    span: elem_tok.span,
                })?;
                self.expect(&Token::RBracket)?;
                Ok(FieldType::List(elem))
            }
            Token::Map => {
                self.expect(&Token::LBracket)?;
                let key_tok = self.expect_ident("map key type")?;
                let key = TypeName::new(&key_tok.text).map_err(|_| DslError::InvalidTypeName {
                    name: key_tok.text,
                    span: key_tok.span,
                })?;
                self.expect(&Token::RBracket)?;
                let value_tok = self.expect_ident("map value type")?;
                let value =
                    TypeName::new(&value_tok.text).map_err(|_| DslError::InvalidTypeName {
                        name: value_tok.text,
                        span: value_tok.span,
                    })?;
                Ok(FieldType::Map { key, value })
            }
            _ => Ok(FieldType::Scalar(type_ref_from(&st, "field type")?)),
        }
    }

    /// arg = IDENT ":" scalar_type ("=" IDENT)? "!"?
    fn parse_argument(&mut self) -> Result<FieldArgument, DslError> {
        let name_tok = self.expect_ident("argument name")?;
        let name = FieldName::new(&name_tok.text).map_err(|_| DslError::InvalidArgumentName {
            name: name_tok.text,
            span: name_tok.span,
        })?;

        self.expect(&Token::Colon)?;
        let type_tok = self.advance_expected("argument type")?;
        let arg_type = type_ref_from(&type_tok, "argument type")?;

        let default = if self.peek_token() == Some(&Token::Equals) {
            self.advance();
            let default_tok = self.expect_ident("default value")?;
            Some(default_tok.text)
        } else {
            None
        };

        let required = self.eat_bang();

        Ok(FieldArgument {
            name,
            arg_type,
            default,
            required,
        })
    }
}

fn unexpected(expected: &str, st: &SpannedToken) -> DslError {
    DslError::UnexpectedToken {
        expected: expected.to_string(),
        found: format!("{} ('{}')", st.token.description(), st.text),
        span: st.span.clone(),
    }
}

/// Resolves a consumed token in type position to a scalar keyword or a
/// named reference. Any other token kind is a structural error.
fn type_ref_from(st: &SpannedToken, expected: &str) -> Result<TypeRef, DslError> {
    match st.token {
        Token::String => Ok(TypeRef::Scalar(ScalarType::String)),
        Token::Float => Ok(TypeRef::Scalar(ScalarType::Float)),
        Token::Int => Ok(TypeRef::Scalar(ScalarType::Int)),
        Token::Boolean => Ok(TypeRef::Scalar(ScalarType::Boolean)),
        Token::Id => Ok(TypeRef::Scalar(ScalarType::Id)),
        Token::Ident => TypeName::new(&st.text)
            .map(TypeRef::Named)
            .map_err(|_| DslError::InvalidTypeName {
                name: st.text.clone(),
                span: st.span.clone(),
            }),
        _ => Err(unexpected(expected, st)),
    }
}

/// Parse a whole schema document: the package declaration followed by type
/// blocks until exhaustion.
///
/// # Errors
///
/// Returns the first `DslError` encountered; there is no recovery and no
/// partial result.
pub fn parse(source: &str) -> Result<Document, DslError> {
    let mut parser = Parser::new(source);
    let package = parser.parse_package()?;

    let mut types = Vec::new();
    while let Some(decl) = parser.parse_type()? {
        types.push(decl);
    }

    tracing::debug!(package = %package, types = types.len(), "parsed schema document");
    Ok(Document::new(package, types))
}
