use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::skip_separators},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements, separated by newlines or
/// semicolons. Parsing continues until a closing `}` token is encountered;
/// an empty brace pair is a valid empty block.
///
/// Grammar: `block := "{" statement* "}"`
///
/// The resulting node is `Expr::Block { statements, line }`; callers in
/// statement position wrap it in `Statement::Expression`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Errors
/// Propagates statement parse errors; a stream that ends before the closing
/// `}` is an unexpected end of input.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(Expr::Block { statements, line })
}
