//! # sigil
//!
//! sigil is a small interpreted scripting language written in Rust. Source
//! text is tokenized, parsed into a syntax tree, and executed directly by
//! walking that tree. Every keyword carries a distinguishing sigil (`let$`,
//! `::print`, `if$`, `loop$`, `func$`, `import$`), so keywords and
//! identifiers can never collide.
//!
//! The interpreter core is deliberately embeddable: the evaluation
//! [`Context`](interpreter::evaluator::core::Context) is an explicit object
//! carrying the variable environment, the function table, and injectable
//! collaborators for imports, native functions, and print output.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Owns every child node outright: the tree is acyclic, with no sharing.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, names and counts, and
/// source lines for debugging and user feedback.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the environment, and the collaborator seams (native
/// functions, source loading, print output) to provide a complete runtime
/// for the language.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses and executes all statements in `source` against the given context.
///
/// This is the embedding entry point: the caller owns the [`Context`] and
/// may run several programs against it (REPL-style) or use a fresh context
/// per program. The first parse or runtime error aborts execution and is
/// returned; there is no partial-result continuation.
///
/// # Errors
/// Returns the first [`error::ParseError`] or [`error::RuntimeError`]
/// encountered.
///
/// # Examples
/// ```
/// use sigil::{interpreter::evaluator::core::Context, run_source};
///
/// let mut context = Context::new();
/// run_source("let$x := 40 + 2", &mut context).unwrap();
///
/// // The binding persists in the caller's context.
/// assert!(context.environment.get("x").is_some());
///
/// // An undefined variable is a fatal error.
/// assert!(run_source("::print y", &mut context).is_err());
/// ```
pub fn run_source(source: &str, context: &mut Context) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse_program(&mut tokens.iter().peekable())?;

    if let Expr::Block { statements, .. } = program {
        for statement in &statements {
            context.eval_statement(statement)?;
        }
    }

    Ok(())
}

/// Parses and executes a standalone script in a fresh context.
///
/// Prints go to stdout and imports resolve against the filesystem. Used by
/// the CLI entry point.
///
/// # Errors
/// Returns the first parse or runtime error encountered.
///
/// # Examples
/// ```
/// use sigil::run_script;
///
/// assert!(run_script("let$x := 5; ::print x + 2").is_ok());
/// assert!(run_script("let$x :=").is_err());
/// ```
pub fn run_script(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::new();
    run_source(source, &mut context)
}
