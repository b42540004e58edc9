use std::{
    cell::RefCell,
    collections::HashMap,
    error::Error,
    io::{self, Write},
    rc::Rc,
};

use sigil::{
    interpreter::{
        evaluator::core::Context,
        native::Arity,
        source::SourceProvider,
        value::Value,
    },
    run_source,
};

/// A print sink that keeps a shared handle on everything written to it.
#[derive(Clone, Default)]
struct Sink(Rc<RefCell<Vec<u8>>>);

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An in-memory source provider for exercising `import$` without touching
/// the filesystem.
struct MapProvider(HashMap<String, String>);

impl MapProvider {
    fn new(files: &[(&str, &str)]) -> Self {
        Self(files.iter()
                  .map(|(path, text)| (path.to_string(), text.to_string()))
                  .collect())
    }
}

impl SourceProvider for MapProvider {
    fn load(&self, path: &str) -> io::Result<String> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}")))
    }
}

fn capture_with_context(src: &str, mut context: Context) -> Result<Vec<String>, Box<dyn Error>> {
    let sink = Sink::default();
    context = context.with_output(Box::new(sink.clone()));
    run_source(src, &mut context)?;

    let bytes = sink.0.borrow().clone();
    Ok(String::from_utf8(bytes).expect("print output is valid UTF-8")
                               .lines()
                               .map(str::to_string)
                               .collect())
}

fn capture(src: &str) -> Result<Vec<String>, Box<dyn Error>> {
    capture_with_context(src, Context::new())
}

fn assert_prints(src: &str, expected: &[&str]) {
    match capture(src) {
        Ok(lines) => assert_eq!(lines, expected, "unexpected output for script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure_containing(src: &str, needle: &str) {
    match capture(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(needle),
                    "expected error containing '{needle}', got: {message}");
        },
    }
}

#[test]
fn arithmetic_follows_standard_precedence() {
    assert_prints("::print 2 + 3 * 4", &["14"]);
    assert_prints("::print (2 + 3) * 4", &["20"]);
    assert_prints("::print 2 * 3 + 4", &["10"]);
    assert_prints("::print 10 - 2 * 3", &["4"]);
}

#[test]
fn same_precedence_evaluates_left_to_right() {
    assert_prints("::print 10 - 3 - 2", &["5"]);
    assert_prints("::print 20 / 2 / 2", &["5"]);
    assert_prints("::print 7 - 4 + 1", &["4"]);
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_prints("::print 2 < 3", &["1"]);
    assert_prints("::print 2 > 3", &["0"]);
    assert_prints("::print 3 <= 3", &["1"]);
    assert_prints("::print 4 >= 5", &["0"]);
    assert_prints("::print 2 == 2", &["1"]);
    assert_prints("::print 2 != 2", &["0"]);
    assert_prints("::print 1 + 1 == 2", &["1"]);
}

#[test]
fn let_binding_and_arithmetic() {
    assert_prints("let$x := 5; ::print x + 2", &["7"]);
}

#[test]
fn rebinding_overwrites_in_place() {
    let mut context = Context::new();
    run_source("let$x := 5", &mut context).unwrap();
    run_source("let$x := 7", &mut context).unwrap();

    assert_eq!(context.environment.get("x"), Some(&Value::Number(7.0)));
    assert_eq!(context.environment.len(), 1);
}

#[test]
fn conditional_selects_then_branch() {
    assert_prints(r#"if$ 1 > 0 { ::print "yes" } else { ::print "no" }"#, &["yes"]);
    assert_prints(r#"if$ 0 > 1 { ::print "yes" } else { ::print "no" }"#, &["no"]);
}

#[test]
fn conditional_truthiness_is_nonzero() {
    assert_prints(r#"if$ 5 { ::print "taken" }"#, &["taken"]);
    assert_prints(r#"if$ 0 { ::print "taken" }"#, &[]);
}

#[test]
fn else_if_chains_are_nested_conditionals() {
    let script = r#"
        let$x := 2
        if$ x == 1 { ::print "one" }
        else if$ x == 2 { ::print "two" }
        else { ::print "many" }
    "#;
    assert_prints(script, &["two"]);

    let script = r#"
        let$x := 9
        if$ x == 1 { ::print "one" }
        else if$ x == 2 { ::print "two" }
        else { ::print "many" }
    "#;
    assert_prints(script, &["many"]);
}

#[test]
fn bounded_loop_is_end_inclusive() {
    assert_prints("loop$i := 1 -> 3 { ::print i }", &["1", "2", "3"]);
}

#[test]
fn loop_arrow_has_utf8_spelling() {
    assert_prints("loop$i := 1 ⟶ 3 { ::print i }", &["1", "2", "3"]);
}

#[test]
fn loop_bounds_are_truncated() {
    assert_prints("loop$i := 1.9 -> 3.7 { ::print i }", &["1", "2", "3"]);
}

#[test]
fn empty_range_runs_zero_times() {
    assert_prints(r#"loop$i := 3 -> 1 { ::print "body" }"#, &[]);
}

#[test]
fn loop_variable_persists_after_loop() {
    // The environment is flat: the loop variable is an ordinary binding.
    assert_prints("loop$i := 1 -> 3 { }\n::print i", &["3"]);
}

#[test]
fn function_definition_and_call() {
    assert_prints("func$add(a,b) => { ::print a + b } add(2,3)", &["5"]);
}

#[test]
fn function_call_in_expression_position() {
    assert_prints("func$add(a,b) => { a + b }\n::print add(2, 3) * 2", &["10"]);
}

#[test]
fn argument_count_mismatch_is_fatal() {
    assert_failure_containing("func$add(a,b) => { ::print a + b } add(2)",
                              "expects 2 arguments, but 1 were supplied");
    assert_failure_containing("func$add(a,b) => { ::print a + b } add(1, 2, 3)",
                              "expects 2 arguments, but 3 were supplied");
}

#[test]
fn parameters_bind_into_the_shared_environment() {
    // Flat namespace: the parameter shadows and permanently overwrites the
    // caller's same-named variable.
    let script = r#"
        let$a := 100
        func$show(a) => { ::print a }
        show(5)
        ::print a
    "#;
    assert_prints(script, &["5", "5"]);
}

#[test]
fn function_redefinition_last_one_wins() {
    let script = r#"
        func$f() => { ::print "first" }
        func$f() => { ::print "second" }
        f()
    "#;
    assert_prints(script, &["second"]);
}

#[test]
fn too_many_parameters_is_a_parse_error() {
    assert_failure_containing("func$f(a, b, c, d, e) => { }", "declares 5 parameters");
}

#[test]
fn too_many_arguments_is_a_parse_error() {
    assert_failure_containing("f(1, 2, 3, 4, 5)", "passes 5 arguments");
}

#[test]
fn unknown_names_are_fatal() {
    assert_failure_containing("::print nope", "Unknown variable 'nope'");
    assert_failure_containing("nope(1)", "Unknown function 'nope'");
}

#[test]
fn division_by_zero_is_fatal() {
    assert_failure_containing("::print 1 / 0", "Division by zero");
    assert_failure_containing("let$x := 0; ::print 5 / x", "Division by zero");
}

#[test]
fn string_literals_print_verbatim() {
    assert_prints(r#"::print "hello world""#, &["hello world"]);
    assert_prints(r#"let$s := "hello"; ::print s"#, &["hello"]);
}

#[test]
fn text_coerces_through_its_numeric_prefix() {
    assert_prints(r#"::print "12ab" + 1"#, &["13"]);
    assert_prints(r#"::print "3.5x" * 2"#, &["7"]);
    // A non-numeric prefix coerces to zero, never an error.
    assert_prints(r#"::print "abc" + 1"#, &["1"]);
}

#[test]
fn list_literals_and_indexing() {
    assert_prints("let$xs := [1, 2, 3]; ::print xs[1]", &["2"]);
    assert_prints("::print [10, 20][0]", &["10"]);
    assert_prints("let$xs := [1, 2, 3]; ::print xs", &["[1, 2, 3]"]);
    // Indices are truncated, not rounded.
    assert_prints("let$xs := [1, 2, 3]; ::print xs[1.9]", &["2"]);
}

#[test]
fn list_index_out_of_bounds_is_fatal() {
    assert_failure_containing("let$xs := [1, 2]; ::print xs[5]", "Index out of bounds");
}

#[test]
fn blocks_evaluate_to_their_last_statement() {
    assert_prints("let$x := { let$y := 2; y + 3 }\n::print x", &["5"]);
}

#[test]
fn empty_blocks_are_valid() {
    assert_prints("{ }", &[]);
    assert_prints("if$ 0 { } else { }", &[]);
}

#[test]
fn import_shares_the_environment() {
    let provider = MapProvider::new(&[("lib.sg", "let$shared := 41")]);
    let context = Context::new().with_source_provider(Box::new(provider));

    let lines = capture_with_context(r#"import$ "lib.sg"
                                        ::print shared + 1"#,
                                     context).unwrap();
    assert_eq!(lines, &["42"]);
}

#[test]
fn imports_nest() {
    let provider = MapProvider::new(&[("a.sg", "import$ \"b.sg\"\nlet$a := b + 1"),
                                      ("b.sg", "let$b := 1")]);
    let context = Context::new().with_source_provider(Box::new(provider));

    let lines = capture_with_context("import$ \"a.sg\"\n::print a", context).unwrap();
    assert_eq!(lines, &["2"]);
}

#[test]
fn missing_import_is_fatal() {
    let context =
        Context::new().with_source_provider(Box::new(MapProvider::new(&[])));
    let result = capture_with_context(r#"import$ "gone.sg""#, context);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Import of 'gone.sg' failed"));
}

#[test]
fn syntax_error_in_import_is_fatal() {
    let provider = MapProvider::new(&[("bad.sg", "let$x :=")]);
    let context = Context::new().with_source_provider(Box::new(provider));

    assert!(capture_with_context(r#"import$ "bad.sg""#, context).is_err());
}

#[test]
fn printed_numbers_reparse_to_the_same_value() {
    for script in ["::print 7",
                   "::print 7 / 2",
                   "::print 1 / 3 * 3",
                   "::print 0.75",
                   "::print 0 - 5",
                   "::print 0 - 2.5"]
    {
        let printed = capture(script).unwrap();
        assert_eq!(printed.len(), 1);

        let reprinted = format!("::print {}", printed[0]);
        assert_eq!(capture(&reprinted).unwrap(), printed, "round-trip failed for {script}");
    }
}

#[test]
fn leading_minus_negates_its_operand() {
    assert_prints("::print -5", &["-5"]);
    assert_prints("::print -2 * 3", &["-6"]);
    assert_prints("::print 2 - -3", &["5"]);
    assert_prints("let$x := 4; ::print -x", &["-4"]);
}

#[test]
fn arity_is_checked_before_arguments_are_evaluated() {
    // A bad call shape wins over a failing argument expression.
    assert_failure_containing("func$add(a,b) => { a + b } add(1 / 0)",
                              "expects 2 arguments, but 1 were supplied");
    assert_failure_containing("nope(1 / 0)", "Unknown function 'nope'");
}

#[test]
fn native_functions_extend_the_language() {
    let mut context = Context::new();
    context.register_native("double", Arity::Exact(1), |args, line| {
               Ok(Value::Number(args[0].as_number(line)? * 2.0))
           });

    let lines = capture_with_context("::print double(21)", context).unwrap();
    assert_eq!(lines, &["42"]);
}

#[test]
fn native_arity_is_checked() {
    let mut context = Context::new();
    context.register_native("double", Arity::Exact(1), |args, line| {
               Ok(Value::Number(args[0].as_number(line)? * 2.0))
           });

    assert!(capture_with_context("double(1, 2)", context).is_err());

    // The native arity check also precedes argument evaluation.
    let mut context = Context::new();
    context.register_native("double", Arity::Exact(1), |args, line| {
               Ok(Value::Number(args[0].as_number(line)? * 2.0))
           });
    let err = capture_with_context("double(1 / 0, 2)", context).unwrap_err();
    assert!(err.to_string().contains("expects 1 arguments, but 2 were supplied"));
}

#[test]
fn user_functions_take_precedence_over_natives() {
    let mut context = Context::new();
    context.register_native("f", Arity::Exact(1), |_, _| Ok(Value::Number(0.0)));

    let lines =
        capture_with_context("func$f(x) => { x + 1 }\n::print f(1)", context).unwrap();
    assert_eq!(lines, &["2"]);
}

#[test]
fn parse_errors_are_fatal() {
    assert_failure_containing("let$x :=", "Unexpected end of input");
    assert_failure_containing("let$ := 5", "Expected identifier");
    assert_failure_containing("{ let$x := 1", "Unexpected end of input");
    assert_failure_containing("loop$i := 1 3 { }", "Expected '->'");
}

#[test]
fn unknown_characters_are_deferred_to_the_parser() {
    assert_failure_containing("let$x := ~5", "Unexpected token: ~");
}

#[test]
fn errors_report_source_lines() {
    assert_failure_containing("let$a := 1\n\n::print b", "line 3");
}

#[test]
fn comments_are_skipped() {
    let script = "// leading comment\nlet$x := 1 // trailing\n/* block\ncomment */\n::print x";
    assert_prints(script, &["1"]);
}

#[test]
fn errors_do_not_disturb_prior_bindings() {
    let mut context = Context::new();
    run_source("let$x := 3", &mut context).unwrap();
    assert!(run_source("::print y", &mut context).is_err());

    // The context is still usable and the earlier binding survives.
    assert_eq!(context.environment.get("x"), Some(&Value::Number(3.0)));
}
