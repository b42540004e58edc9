use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keyword lexemes carry a distinguishing sigil (`let$`, `::print`, ...) so
/// they can never collide with identifiers; they are matched with higher
/// priority than the identifier pattern. Two-character operators are matched
/// before their one-character prefixes by longest-match.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`. Digits and at
    /// most one decimal point; no exponent notation and no int/float split
    /// at this layer.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// String literal tokens, delimited by double quotes. No escape
    /// processing happens at this layer.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// `let$`
    #[token("let$")]
    Let,
    /// `::print`
    #[token("::print")]
    Print,
    /// `if$`
    #[token("if$")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `loop$`
    #[token("loop$")]
    Loop,
    /// `func$`
    #[token("func$")]
    Func,
    /// `import$`
    #[token("import$")]
    Import,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// ```
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*[^/])*\*/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `:=`
    #[token(":=")]
    Assign,
    /// The loop-range arrow. `⟶` (U+27F6, a three-byte UTF-8 sequence) is an
    /// alternate spelling of `->`.
    #[token("->")]
    #[token("⟶")]
    Arrow,
    /// `=>`
    #[token("=>")]
    FatArrow,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;` — statement separator, interchangeable with a newline.
    #[token(";")]
    Semicolon,
    /// Newlines separate statements and advance the line counter.
    #[token("\n", count_newline)]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Any character no other pattern matches. The lexer never hard-fails;
    /// the parser rejects this token when it reaches it.
    #[regex(r".", parse_unknown, priority = 0)]
    Unknown(String),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal slice.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Captures an unrecognized character verbatim.
fn parse_unknown(lex: &mut logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}

/// Advances the line counter when a newline token is produced.
fn count_newline(lex: &mut logos::Lexer<Token>) {
    lex.extras.line += 1;
}

/// Tokenizes a whole source string into `(token, line)` pairs.
///
/// Whitespace and comments are skipped; newlines and semicolons survive as
/// separator tokens. Characters no pattern recognizes are carried through as
/// [`Token::Unknown`] so that failure is deferred to the parser.
///
/// # Errors
/// Returns a `ParseError` only if the lexer reports an internal error, which
/// the catch-all pattern makes unreachable in practice.
///
/// # Example
/// ```
/// use sigil::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let$x := 5").unwrap();
/// assert_eq!(tokens[0].0, Token::Let);
/// assert_eq!(tokens[2].0, Token::Assign);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         line:  lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}
