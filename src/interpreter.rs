/// Injectable name → value store shared by all executing statements.
///
/// The environment is deliberately flat: function parameters and loop
/// variables bind directly into the same table as every other variable, and
/// stay bound after the call or loop completes.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparison operations, manages variable state, and
/// produces output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, bounded loops, conditionals, and imports.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, and sigil-marked keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line info.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Never fails outright: unrecognized characters become `Unknown` tokens
///   that the parser rejects.
pub mod lexer;
/// Registry of native functions contributed by external packages.
///
/// When the evaluator encounters a call to a name absent from the
/// user-defined function table, it consults this registry, allowing
/// collaborators to extend the language without modifying the core.
pub mod native;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of statements and
/// expressions. Statements use recursive descent; binary expressions use
/// precedence tiers.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with line info.
/// - Enforces the parameter and argument limits.
pub mod parser;
/// Source-loading seam consumed by the `import$` statement.
pub mod source;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: numbers,
/// text, and lists. It also implements the numeric-coercion rules and the
/// canonical textual encoding used by `::print`.
pub mod value;
