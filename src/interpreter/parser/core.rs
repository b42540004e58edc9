use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_equality, statement::parse_statement, utils::skip_separators},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program from the token stream.
///
/// Consumes tokens until end-of-input and returns a block node containing
/// every top-level statement in source order. Statement separators (newlines
/// and semicolons) between statements are skipped.
///
/// # Errors
/// Any structurally unexpected token is fatal; the parser does not attempt
/// recovery or resynchronization.
///
/// # Example
/// ```
/// use sigil::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("let$x := 5; ::print x + 2").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// let Expr::Block { statements, .. } = program else {
///     panic!("parse_program returns a block");
/// };
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(1, |(_, l)| *l);
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);
        if tokens.peek().is_none() {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(Expr::Block { statements, line })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, equality, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := equality`
///
/// # Errors
/// Propagates errors from the precedence tiers.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_equality(tokens)
}
