/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, and
/// violations of the parameter/argument limits.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined names, argument count mismatches, division by
/// zero, type misuse, and failed imports.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
