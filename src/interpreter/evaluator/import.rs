use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::tokenize,
        parser::core::parse_program,
        value::Value,
    },
};

impl Context {
    /// Evaluates an `import$` directive.
    ///
    /// The source provider loads the file's full text; the text is tokenized
    /// and parsed independently, and the resulting program is interpreted in
    /// this same context. Imports are textual-inclusion-like, not namespaced
    /// modules: bindings made by the imported file are visible to the
    /// importing file's subsequent statements. Resolution is eager and
    /// synchronous, and there is no cycle detection — mutually importing
    /// files recurse until the host stack is exhausted.
    ///
    /// # Errors
    /// `RuntimeError::ImportFailed` when the provider cannot load the path
    /// or the imported file fails to tokenize or parse; runtime errors from
    /// the imported statements propagate unchanged.
    pub(crate) fn eval_import(&mut self, path: &str, line: usize) -> EvalResult<Option<Value>> {
        let import_failed = |details: String| {
            RuntimeError::ImportFailed { path: path.to_string(),
                                         details,
                                         line }
        };

        let source = self.load_source(path).map_err(|e| import_failed(e.to_string()))?;
        let tokens = tokenize(&source).map_err(|e| import_failed(e.to_string()))?;
        let program = parse_program(&mut tokens.iter().peekable())
            .map_err(|e| import_failed(e.to_string()))?;

        if let Expr::Block { statements, .. } = program {
            for statement in &statements {
                self.eval_statement(statement)?;
            }
        }

        Ok(None)
    }
}
