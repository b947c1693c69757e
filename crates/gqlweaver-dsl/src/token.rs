use logos::Logos;

/// Tokens produced by the schema-language lexer.
///
/// Whitespace is a real token here, not a logos skip: each contiguous run
/// of space/tab/CR/LF becomes one `Whitespace` token whose text is exactly
/// the consumed run. Skipping it is the parser's job.
///
/// Keyword recognition is case-insensitive; the matched source text keeps
/// its original casing in the surrounding `SpannedToken`. Identifier runs
/// may include double quotes, so a quoted literal such as `"100"` is one
/// identifier token, quotes included — the lexer does not interpret
/// quoting semantics.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A contiguous run of space, tab, newline, or carriage return.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // -- Keywords --
    #[token("type", ignore(ascii_case))]
    Type,

    #[token("string", ignore(ascii_case))]
    String,

    #[token("float", ignore(ascii_case))]
    Float,

    #[token("boolean", ignore(ascii_case))]
    Boolean,

    #[token("int", ignore(ascii_case))]
    Int,

    #[token("id", ignore(ascii_case))]
    Id,

    #[token("map", ignore(ascii_case))]
    Map,

    #[token("package", ignore(ascii_case))]
    Package,

    // -- Punctuation --
    #[token("*")]
    Asterisk,

    #[token(",")]
    Comma,

    #[token("!")]
    Bang,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    // -- Identifiers --
    /// A maximal run of letters, digits, underscores, and double quotes.
    /// Keywords win ties, so this only matches runs that are not exactly a
    /// keyword (ignoring case).
    #[regex(r#"[A-Za-z0-9_"]+"#)]
    Ident,

    /// Any single character matching no other rule. Lexical errors are
    /// deferred: the parser rejects this token at whatever grammar
    /// position it appears.
    #[regex(r".", priority = 0)]
    Illegal,
}

impl Token {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Type => "'type'",
            Self::String => "'string'",
            Self::Float => "'float'",
            Self::Boolean => "'boolean'",
            Self::Int => "'int'",
            Self::Id => "'id'",
            Self::Map => "'map'",
            Self::Package => "'package'",
            Self::Asterisk => "'*'",
            Self::Comma => "','",
            Self::Bang => "'!'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Colon => "':'",
            Self::Equals => "'='",
            Self::Ident => "identifier",
            Self::Illegal => "illegal character",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
