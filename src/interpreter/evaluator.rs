/// Binary operation evaluation.
///
/// Arithmetic and comparison over numerically coerced operands, with the
/// crate-wide division-by-zero policy.
pub mod binary;
/// Bounded-loop evaluation (`loop$i := a -> b`).
pub mod bounded_loop;
/// The evaluation context and the statement/expression walkers.
pub mod core;
/// Function call evaluation: user-defined functions and native dispatch.
pub mod function;
/// Import evaluation: loading, parsing, and interpreting other files into
/// the same context.
pub mod import;
