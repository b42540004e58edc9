use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, MAX_PARAMS},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a primary expression and folds in any postfix indexing.
///
/// Grammar:
/// ```text
///     operand := primary ("[" expression "]")*
/// ```
pub(crate) fn parse_primary_with_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let primary = parse_primary(tokens)?;
    parse_postfix(tokens, primary)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and string literals
/// - identifiers and function calls
/// - parenthesized expressions
/// - list literals (`[ ... ]`)
/// - blocks in expression position (`{ ... }`)
/// - a leading-minus negation of any of the above
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_call
///              | "(" expression ")"
///              | "[" elements "]"
///              | "{" statements "}"
///              | "-" operand
/// ```
///
/// # Errors
/// Any token that cannot begin a primary is a fatal parse error; `Unknown`
/// tokens carried through by the lexer are rejected here.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(..) | Token::Str(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::LBracket, _) => parse_list_literal(tokens),
        (Token::LBrace, _) => parse_block_expression(tokens),
        (Token::Minus, _) => parse_negation(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens),
        (Token::Unknown(text), line) => Err(ParseError::UnexpectedToken { token: text.clone(),
                                                                          line:  *line, }),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses chained postfix indexing applied to an expression.
///
/// Multiple chained indices are allowed: `xs[0][1]`.
///
/// Grammar:
/// ```text
///     postfix := operand ("[" expression "]")*
/// ```
///
/// # Errors
/// Returns a `ParseError` if an `[` is not closed with `]` or the index
/// expression fails to parse.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((Token::LBracket, index_line)) = tokens.peek() {
        let index_line = *index_line;
        tokens.next();
        let index = parse_expression(tokens)?;
        match tokens.next() {
            Some((Token::RBracket, _)) => {
                node = Expr::Index { target: Box::new(node),
                                     index:  Box::new(index),
                                     line:   index_line, };
            },
            Some((tok, l)) => {
                return Err(ParseError::ExpectedToken { expected: "']' after index",
                                                       found:    format!("{tok:?}"),
                                                       line:     *l, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: index_line }),
        }
    }
    Ok(node)
}

/// Parses a numeric or string literal.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), line)) => Ok(Expr::Number { value: *n,
                                                            line:  *line, }),
        Some((Token::Str(s), line)) => Ok(Expr::Str { value: s.clone(),
                                                      line:  *line, }),
        _ => unreachable!("parse_literal is only called on literal tokens"),
    }
}

/// Parses a leading-minus negation: `- operand`.
///
/// The sign is applied here rather than in the number token, so `3-5` still
/// lexes as a subtraction, and printed negative numbers re-parse to the same
/// value. A negated numeric literal folds into the literal; anything else
/// becomes a zero-minus-operand subtraction.
fn parse_negation<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let operand = parse_primary_with_postfix(tokens)?;

    Ok(match operand {
        Expr::Number { value, .. } => Expr::Number { value: -value,
                                                     line },
        operand => Expr::BinaryOp { left:  Box::new(Expr::Number { value: 0.0,
                                                                   line }),
                                    op:    BinaryOperator::Sub,
                                    right: Box::new(operand),
                                    line },
    })
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The inner expression is returned as-is; there is no grouping wrapper
/// node.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, l)) => {
            Err(ParseError::ExpectedToken { expected: "')'",
                                            found:    format!("{tok:?}"),
                                            line:     *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a list literal of the form `[expr1, expr2, ..., exprN]`.
///
/// An empty list `[]` is accepted.
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
    Ok(Expr::ListLiteral { elements,
                           line: *line })
}

/// Parses a `{ ... }` block in expression position.
///
/// The block's value is the value of its last statement.
fn parse_block_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    parse_block(tokens, line)
}

/// Parses an identifier or a function call.
///
/// Supported forms:
///
/// - `identifier`
/// - `identifier(arg1, arg2, ...)`
///
/// A call is recognized when the identifier is immediately followed by `(`.
/// Call sites may pass at most [`MAX_PARAMS`] arguments; more is fatal.
///
/// # Errors
/// Returns a `ParseError` if call arguments fail to parse, the closing `)`
/// is missing, or the argument limit is exceeded.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), *line),
        _ => unreachable!("parse_identifier_or_call is only called on identifiers"),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            if arguments.len() > MAX_PARAMS {
                return Err(ParseError::TooManyArguments { name,
                                                          count: arguments.len(),
                                                          line });
            }
            Ok(Expr::Call { name,
                            arguments,
                            line })
        },
        _ => Ok(Expr::Variable { name, line }),
    }
}
