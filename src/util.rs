/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. They are used by
/// the bounded-loop evaluator and by list indexing.
pub mod num;
