#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// There is a single evaluation path and a single error policy: every
/// condition listed here is fatal for the running program, including division
/// by zero. The embedder receives the error as an `Err` value; the CLI prints
/// the one-line diagnostic and exits nonzero.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that is neither a user-defined function nor a registered
    /// native function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to access a list element outside the allowed bounds.
    IndexOutOfBounds {
        /// The largest valid index.
        max:   usize,
        /// The index that was actually requested.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A construct that produces no value was used where a value was needed.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `import$` directive could not be completed, either because the
    /// source provider failed or because the imported file failed to parse.
    ImportFailed {
        /// The path handed to the source provider.
        path:    String,
        /// Details about the failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => {
                write!(f,
                       "Error on line {line}: Function '{name}' expects {expected} arguments, but {found} were supplied.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::IndexOutOfBounds { max, found, line } => {
                write!(f,
                       "Error on line {line}: Index out of bounds. Maximum is {max}, but found {found} instead.")
            },
            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
            Self::ImportFailed { path,
                                 details,
                                 line, } => {
                write!(f, "Error on line {line}: Import of '{path}' failed: {details}")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
