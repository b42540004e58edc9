/// The maximum number of parameters a function may declare, and the maximum
/// number of arguments a call site may pass. Exceeding it is a parse error.
pub const MAX_PARAMS: usize = 4;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct that produces a value: literals, variable
/// references, binary operations, list literals and indexing, function calls,
/// and blocks used in expression position. Each variant owns its children
/// outright and carries the source line it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `3.14`.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A double-quoted string literal. No escape sequences are processed.
    Str {
        /// The text between the quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// List literal expression, e.g. `[1, 2, 3]`.
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Indexing expression, e.g. `xs[2]`.
    Index {
        /// The expression being indexed.
        target: Box<Self>,
        /// The index to access.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Function call expression, e.g. `add(2, 3)`.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A brace-delimited block used in expression position. Its value is the
    /// value of the last statement it contains.
    Block {
        /// Statements inside the block.
        statements: Vec<Statement>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use sigil::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Str { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::Index { line, .. }
            | Self::Call { line, .. }
            | Self::Block { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// A function binds up to [`MAX_PARAMS`] parameter names to a body statement.
/// The body is not executed at definition time.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statement executed when the function is called.
    pub body:   Box<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement.
///
/// Statements are executed for their effects: binding names, printing,
/// control flow, importing other files, and registering functions.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable binding using `let$`.
    Let {
        /// The name of the variable.
        name:  String,
        /// The bound value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `::print` statement.
    Print {
        /// The expression whose value is printed.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional using `if$`. Chained `else if$` clauses are represented
    /// as a nested `If` statement in the `else_branch` slot.
    If {
        /// The condition expression. Nonzero selects the then-branch.
        condition:   Expr,
        /// Statement executed when the condition is nonzero.
        then_branch: Box<Self>,
        /// Statement executed when the condition is zero, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A bounded loop using `loop$`. The range is inclusive on both ends.
    Loop {
        /// The loop variable name.
        var:   String,
        /// The start expression.
        start: Expr,
        /// The end expression.
        end:   Expr,
        /// The loop body.
        body:  Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An `import$` directive naming another source file.
    Import {
        /// Path handed to the source provider.
        path: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A user-defined function declaration using `func$`.
    Function(FunctionDef),
    /// A standalone expression evaluated for its value or effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons. Comparisons produce
/// C-style boolean-as-number results (`1` for true, `0` for false).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
