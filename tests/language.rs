use indexmap::IndexMap;
use trn::{
    error::{EvalError, ParseError},
    loader::{
        LoaderConfig,
        expression::evaluate,
        split::{split_array_items, split_table_items},
    },
    value::{Environment, Value},
};

fn parse_ok(src: &str) -> Environment {
    trn::parse(src).unwrap_or_else(|e| panic!("Source failed to parse:\n{src}\nError: {e}"))
}

fn parse_err(src: &str) -> ParseError {
    match trn::parse(src) {
        Ok(env) => panic!("Source parsed but was expected to fail:\n{src}\nResult: {env:?}"),
        Err(e) => e,
    }
}

fn table(entries: &[(&str, Value)]) -> Value {
    Value::Table(entries.iter()
                        .map(|(k, v)| ((*k).to_string(), v.clone()))
                        .collect::<IndexMap<_, _>>())
}

#[test]
fn end_to_end_scenario() {
    let env = parse_ok("set num = 42;\n\
                        set str = \"Hello\";\n\
                        set arr = { 1. 2. 3. };\n\
                        set table = [key1 => 10, key2 => \"value\"];\n\
                        set expr = @(+ num 1);\n");

    let keys: Vec<&str> = env.keys().map(String::as_str).collect();
    assert_eq!(keys, ["num", "str", "arr", "table", "expr"]);

    assert_eq!(env["num"], Value::Integer(42));
    assert_eq!(env["str"], Value::from("Hello"));
    assert_eq!(env["arr"],
               Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
    assert_eq!(env["table"],
               table(&[("key1", Value::Integer(10)), ("key2", Value::from("value"))]));
    assert_eq!(env["expr"], Value::Integer(43));
}

#[test]
fn integer_literals() {
    let env = parse_ok("set a = 0;\nset b = -7;\nset c = 123456789;");
    assert_eq!(env["a"], Value::Integer(0));
    assert_eq!(env["b"], Value::Integer(-7));
    assert_eq!(env["c"], Value::Integer(123_456_789));
}

#[test]
fn string_literals_keep_interior_verbatim() {
    let env = parse_ok("set s = \"Hello, world.\";\nset t = \"with \\ backslash\";");
    assert_eq!(env["s"], Value::from("Hello, world."));
    // No escape processing: the backslash is ordinary text.
    assert_eq!(env["t"], Value::from("with \\ backslash"));
}

#[test]
fn nested_arrays() {
    let env = parse_ok("set m = { { 1. 2 }. { 3. 4 } };\nset e = { };");
    assert_eq!(env["m"],
               Value::Array(vec![Value::Array(vec![Value::Integer(1), Value::Integer(2)]),
                                 Value::Array(vec![Value::Integer(3), Value::Integer(4)])]));
    assert_eq!(env["e"], Value::Array(Vec::new()));
}

#[test]
fn variable_references_copy_the_value() {
    let env = parse_ok("set a = { 1. 2 };\nset b = a;\nset a = 3;");
    // `b` keeps the array it copied; rebinding `a` does not touch it.
    assert_eq!(env["b"],
               Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
    assert_eq!(env["a"], Value::Integer(3));
}

#[test]
fn redefinition_last_write_wins() {
    let env = parse_ok("set a = 1;\nset a = 2;");
    assert_eq!(env["a"], Value::Integer(2));
    assert_eq!(env.len(), 1);
}

#[test]
fn table_values_may_nest_and_reference() {
    let env = parse_ok("set base = 2;\n\
                        set t = [first => base, second => { 1. base }, third => @(* base 3)];");
    assert_eq!(env["t"],
               table(&[("first", Value::Integer(2)),
                       ("second", Value::Array(vec![Value::Integer(1), Value::Integer(2)])),
                       ("third", Value::Integer(6))]));
}

#[test]
fn multi_line_table() {
    let env = parse_ok("set table = [\n    key1 => 10,\n    key2 => { 1. 2 },\n    key3 => \"x\"\n];\n");
    assert_eq!(env["table"],
               table(&[("key1", Value::Integer(10)),
                       ("key2", Value::Array(vec![Value::Integer(1), Value::Integer(2)])),
                       ("key3", Value::from("x"))]));
}

#[test]
fn comments_are_stripped_across_lines() {
    let env = parse_ok("(*\n    This is a comment\n*)\nset num = 42;\n");
    assert_eq!(env["num"], Value::Integer(42));

    let env = parse_ok("set a = (* inline *) 1;");
    assert_eq!(env["a"], Value::Integer(1));
}

#[test]
fn comment_newlines_keep_line_numbers_accurate() {
    let err = parse_err("(* spans\n   two lines *)\nset a = oops;");
    assert_eq!(err,
               ParseError::UndefinedVariable { name: "oops".to_string(),
                                              line: 3, });
}

#[test]
fn unterminated_comment_fails() {
    let err = parse_err("set a = 1;\n(* never closed");
    assert_eq!(err, ParseError::MalformedComment { line: 2 });
}

#[test]
fn invalid_identifier_is_a_syntax_error() {
    assert!(matches!(parse_err("set 1x = 5;"), ParseError::SyntaxError { line: 1, .. }));
    assert!(matches!(parse_err("setnum = 5;"), ParseError::SyntaxError { .. }));
    assert!(matches!(parse_err("let x = 5;"), ParseError::SyntaxError { .. }));
    assert!(matches!(parse_err("set x = 5"), ParseError::SyntaxError { .. }));
}

#[test]
fn unterminated_table_fails() {
    let err = parse_err("set table = [\n    key1 => 10,\n");
    assert_eq!(err, ParseError::UnterminatedTable { line: 1 });
}

#[test]
fn invalid_values_and_table_entries() {
    assert!(matches!(parse_err("set a = 1.5;"), ParseError::InvalidValue { .. }));
    assert!(matches!(parse_err("set a = \"unclosed;"), ParseError::InvalidValue { .. }));
    assert!(matches!(parse_err("set t = [key1 10];"),
                     ParseError::InvalidTableEntry { .. }));
    assert!(matches!(parse_err("set t = [1bad => 10];"),
                     ParseError::InvalidTableEntry { .. }));
}

#[test]
fn undefined_variable_is_distinct_from_invalid_value() {
    let err = parse_err("set a = missing;");
    assert_eq!(err,
               ParseError::UndefinedVariable { name: "missing".to_string(),
                                              line: 1, });
}

#[test]
fn nesting_beyond_the_limit_fails() {
    let config = LoaderConfig::new().with_max_depth(2);
    let err = trn::parse_with_config("set a = { { { 1 } } };", &config);
    assert_eq!(err,
               Err(ParseError::DepthExceeded { limit: 2,
                                               line:  1, }));

    // The same source passes with the default limit.
    let _ = parse_ok("set a = { { { 1 } } };");
}

#[test]
fn split_array_items_respects_nesting() {
    assert_eq!(split_array_items("1. 2. { 3. 4. }"), ["1", "2", "{ 3. 4. }"]);
}

#[test]
fn split_table_items_respects_nesting() {
    assert_eq!(split_table_items("key1 => 10, key2 => \"value\""),
               ["key1 => 10", "key2 => \"value\""]);
    assert_eq!(split_table_items("a => { 1. 2 }, b => @(+ 1, 2)"),
               ["a => { 1. 2 }", "b => @(+ 1, 2)"]);
}

#[test]
fn split_is_idempotent_under_rejoining() {
    let items = split_table_items("key1 => 10, key2 => { 1. 2 }, key3 => \"v\"");
    let rejoined = items.join(",");
    assert_eq!(split_table_items(&rejoined), items);
}

#[test]
fn expression_evaluation() {
    let mut env = Environment::new();
    env.insert("num".to_string(), Value::Integer(42));

    assert_eq!(evaluate(&["+", "2", "3"], &env), Ok(Value::Integer(5)));
    assert_eq!(evaluate(&["-", "2", "3"], &env), Ok(Value::Integer(-1)));
    assert_eq!(evaluate(&["*", "6", "7"], &env), Ok(Value::Integer(42)));
    assert_eq!(evaluate(&["ord", "\"A\""], &env), Ok(Value::Integer(65)));
    assert_eq!(evaluate(&["abs", "-5"], &env), Ok(Value::Integer(5)));
    assert_eq!(evaluate(&["+", "num", "1"], &env), Ok(Value::Integer(43)));
}

#[test]
fn division_truncates_toward_zero() {
    let env = Environment::new();
    assert_eq!(evaluate(&["/", "7", "2"], &env), Ok(Value::Integer(3)));
    assert_eq!(evaluate(&["/", "-7", "2"], &env), Ok(Value::Integer(-3)));
    assert_eq!(evaluate(&["/", "1", "0"], &env), Err(EvalError::DivisionByZero));
}

#[test]
fn expression_arity_and_tokens() {
    let env = Environment::new();

    assert_eq!(evaluate(&["+", "1"], &env),
               Err(EvalError::InsufficientOperands { operator: "+".to_string(), }));
    assert_eq!(evaluate(&["ord"], &env),
               Err(EvalError::InsufficientOperands { operator: "ord".to_string(), }));
    assert_eq!(evaluate(&["+", "1", "2", "3"], &env), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate(&["abs", "1", "2"], &env), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate(&[], &env), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate(&["+", "x", "1"], &env),
               Err(EvalError::UnknownToken { token: "x".to_string(), }));
    assert_eq!(evaluate(&["frob", "1"], &env),
               Err(EvalError::UnknownToken { token: "frob".to_string(), }));
}

#[test]
fn expression_type_mismatches() {
    let env = Environment::new();

    assert!(matches!(evaluate(&["ord", "\"AB\""], &env),
                     Err(EvalError::TypeMismatch { .. })));
    assert!(matches!(evaluate(&["abs", "\"x\""], &env),
                     Err(EvalError::TypeMismatch { .. })));
    assert!(matches!(evaluate(&["+", "1", "\"x\""], &env),
                     Err(EvalError::TypeMismatch { .. })));
}

#[test]
fn expression_arithmetic_is_checked() {
    let env = Environment::new();

    assert_eq!(evaluate(&["*", "9223372036854775807", "2"], &env), Err(EvalError::Overflow));
    assert_eq!(evaluate(&["abs", "-9223372036854775808"], &env), Err(EvalError::Overflow));
}

#[test]
fn expression_errors_carry_the_statement_line() {
    let err = parse_err("set a = 1;\nset b = @(+ a \"x\");");
    assert!(matches!(err, ParseError::Expression { line: 2, .. }));
}

#[test]
fn serializes_in_declaration_order() {
    let env = parse_ok("set num = 42;\n\
                        set str = \"Hello\";\n\
                        set arr = { 1. 2. 3. };\n\
                        set table = [key1 => 10, key2 => \"value\"];\n\
                        set expr = @(+ num 1);\n");

    let text = trn::to_text(&env).unwrap();
    assert_eq!(text,
               "{\n  \"num\": 42,\n  \"str\": \"Hello\",\n  \"arr\": [\n    1,\n    2,\n    3\n  \
                ],\n  \"table\": {\n    \"key1\": 10,\n    \"key2\": \"value\"\n  },\n  \"expr\": \
                43\n}");
}

#[test]
fn round_trips_through_trn_source() {
    let env = parse_ok("set num = -3;\n\
                        set str = \"Hello\";\n\
                        set arr = { 1. \"two\". { 3. 4 } };\n\
                        set table = [key1 => 10, key2 => { 5. 6 }, key3 => \"value\"];\n");

    let reparsed = parse_ok(&render_trn(&env));
    assert_eq!(reparsed, env);
}

/// Renders an environment back to trn source, for the round-trip test.
/// Only expression-free values occur here, so rendering is total.
fn render_trn(env: &Environment) -> String {
    let mut out = String::new();
    for (name, value) in env {
        out.push_str(&format!("set {name} = {};\n", render_value(value)));
    }
    out
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::String(s) => format!("\"{s}\""),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("{{ {} }}", items.join(". "))
        },
        Value::Table(entries) => {
            let entries: Vec<String> =
                entries.iter()
                       .map(|(k, v)| format!("{k} => {}", render_value(v)))
                       .collect();
            format!("[{}]", entries.join(", "))
        },
    }
}
