/// Binary expression parsing with precedence tiers.
///
/// Each precedence level gets its own function; lower levels delegate to
/// higher ones and fold operators left-associatively.
pub mod binary;
/// Block parsing.
///
/// Handles brace-delimited statement sequences, shared by statement blocks,
/// expression blocks, conditional branches, loop bodies, and function bodies.
pub mod block;
/// Core parser entry points.
///
/// Contains `parse_program` (whole-stream entry point) and
/// `parse_expression` (expression entry point).
pub mod core;
/// Primary expression parsing.
///
/// Handles literals, variables, calls, list literals, grouping, postfix
/// indexing, and blocks in expression position.
pub mod primary;
/// Statement parsing.
///
/// Recursive-descent dispatch over the statement grammar: bindings, print,
/// conditionals, bounded loops, imports, function definitions, and bare
/// expression statements.
pub mod statement;
/// Shared parsing utilities (comma-separated lists, token expectations).
pub mod utils;
