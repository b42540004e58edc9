#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every grammatical violation is immediately fatal for the run: the parser
/// never produces partial trees or resynchronizes after an error.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// Description of the expected token.
        expected: &'static str,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function declared more parameters than the language allows.
    TooManyParameters {
        /// The name of the function.
        name:  String,
        /// The number of declared parameters.
        count: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A call site passed more arguments than the language allows.
    TooManyArguments {
        /// The name of the called function.
        name:  String,
        /// The number of supplied arguments.
        count: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::TooManyParameters { name, count, line } => {
                write!(f,
                       "Error on line {line}: Function '{name}' declares {count} parameters; the maximum is {}.",
                       crate::ast::MAX_PARAMS)
            },

            Self::TooManyArguments { name, count, line } => {
                write!(f,
                       "Error on line {line}: Call to '{name}' passes {count} arguments; the maximum is {}.",
                       crate::ast::MAX_PARAMS)
            },
        }
    }
}

impl std::error::Error for ParseError {}
