use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, MAX_PARAMS, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier, skip_newlines},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a block (`{ ... }`),
/// - a let binding (`let$x := expr`),
/// - a print statement (`::print expr`),
/// - a conditional (`if$ ... else ...`),
/// - a bounded loop (`loop$i := a -> b ...`),
/// - an import (`import$ "path"`),
/// - a function definition (`func$name(params) => ...`),
/// - a bare expression statement (including calls).
///
/// Dispatch is on the leading token; every keyword carries its sigil, so a
/// single token of lookahead decides the statement form.
///
/// # Errors
/// Any structurally unexpected token is a fatal parse error.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LBrace, line)) => {
            let line = *line;
            tokens.next();
            let block = parse_block(tokens, line)?;
            Ok(Statement::Expression { expr: block, line })
        },
        Some((Token::Let, _)) => parse_let(tokens),
        Some((Token::Print, _)) => parse_print(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::Loop, _)) => parse_loop(tokens),
        Some((Token::Import, _)) => parse_import(tokens),
        Some((Token::Func, _)) => parse_function_definition(tokens),
        Some((_, line)) => {
            let line = *line;
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a let binding: `let$ <identifier> := <expression>`.
fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign, "':='", line)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Let { name, value, line })
}

/// Parses a print statement: `::print <expression>`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let value = parse_expression(tokens)?;

    Ok(Statement::Print { value, line })
}

/// Parses a conditional with optional `else` and chained `else if$`.
///
/// Syntax:
/// ```text
///     if$ <condition> <statement>
///     else if$ <condition> <statement>
///     else <statement>
/// ```
///
/// The else-if branch is structurally just another statement slot: `else`
/// followed by `if$` parses a nested conditional into the else slot, so
/// chains are represented as nested conditionals.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let condition = parse_expression(tokens)?;
    skip_newlines(tokens);
    let then_branch = Box::new(parse_statement(tokens)?);

    skip_newlines(tokens);
    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        skip_newlines(tokens);
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses a bounded loop:
/// `loop$ <identifier> := <start> -> <end> <statement>`.
///
/// The range is inclusive on both ends at evaluation time. The arrow accepts
/// the `⟶` spelling as well.
fn parse_loop<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let var = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign, "':='", line)?;
    let start = parse_expression(tokens)?;
    expect_token(tokens, &Token::Arrow, "'->'", line)?;
    let end = parse_expression(tokens)?;
    skip_newlines(tokens);
    let body = Box::new(parse_statement(tokens)?);

    Ok(Statement::Loop { var,
                         start,
                         end,
                         body,
                         line })
}

/// Parses an import directive: `import$ "<path>"`.
fn parse_import<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    match tokens.next() {
        Some((Token::Str(path), _)) => Ok(Statement::Import { path: path.clone(),
                                                              line }),
        Some((tok, l)) => {
            Err(ParseError::ExpectedToken { expected: "string path after 'import$'",
                                            found:    format!("{tok:?}"),
                                            line:     *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a function definition:
/// `func$ <name> ( <params> ) => <statement>`.
///
/// At most [`MAX_PARAMS`] parameters may be declared; more is a fatal parse
/// error. The body is not executed at definition time.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::LParen, "'('", line)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    if params.len() > MAX_PARAMS {
        return Err(ParseError::TooManyParameters { name,
                                                   count: params.len(),
                                                   line });
    }
    expect_token(tokens, &Token::FatArrow, "'=>'", line)?;
    skip_newlines(tokens);
    let body = Box::new(parse_statement(tokens)?);

    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         body,
                                         line }))
}
