use std::fs::{self};

use numlib::{evaluate, get_result, interpreter::value::core::Value};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_script_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("Script example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No script examples found in book/src");
}

fn extract_script_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```numlib") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval_value(src: &str) -> Value {
    match evaluate(src) {
        Ok(Some(v)) => v,
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if evaluate(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn failure_message(src: &str) -> String {
    match evaluate(src) {
        Ok(v) => panic!("Script succeeded with {v:?} but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn num_coerces_literals() {
    assert_eq!(eval_value("num(true)"), Value::Integer(1));
    assert_eq!(eval_value("num(false)"), Value::Integer(0));
    assert_eq!(eval_value("num(12)"), Value::Integer(12));
    assert_eq!(eval_value("num(1.25)"), Value::Real(1.25));
    assert_eq!(eval_value("num(\"-40\")"), Value::Integer(-40));
    assert_eq!(eval_value("num(\"0.5\")"), Value::Real(0.5));
}

#[test]
fn num_rejects_non_numeric_values() {
    assert_failure("num(\"abc\")");
    assert_failure("num(\"\")");
    assert_failure("num([1, 2])");
    assert_failure("num(nil)");
}

#[test]
fn let_bindings_flow_between_lines() {
    let src = r#"
        let a = [1, 2, 3]
        let b = [4, 5, 6]
        cross(a, b)
    "#;
    assert_eq!(eval_value(src).to_string(), "[-3, 6, -3]");
}

#[test]
fn last_expression_wins() {
    assert_eq!(eval_value("num(\"1\")\n\n// trailing comment\nnum(\"2\")"),
               Value::Integer(2));
}

#[test]
fn negation_and_constants() {
    assert_eq!(eval_value("-3"), Value::Integer(-3));
    assert_eq!(eval_value("-(2.5)"), Value::Real(-2.5));
    assert_eq!(eval_value("pi"), Value::Real(std::f64::consts::PI));
    assert_eq!(eval_value("linspace(-1, 1, 2)").to_string(), "[-1, 0]");
    assert_failure("-\"3\"");
}

#[test]
fn print_returns_its_argument() {
    assert_eq!(eval_value("print(num(\"8\"))"), Value::Integer(8));
    assert_eq!(eval_value("print(\"hello\")"), Value::from("hello"));
}

#[test]
fn linspace_scripts() {
    assert_eq!(eval_value("linspace(0, 10, 5)").to_string(), "[0, 2, 4, 6, 8]");
    assert_eq!(eval_value("linspace(0, 1, 0)").to_string(), "[]");
    assert_failure("linspace(0, 1, -1)");
    assert_failure("linspace(0, 1, 2.0)");
}

#[test]
fn cross_scripts() {
    assert_eq!(eval_value("cross([1, 0, 0], [0, 1, 0])").to_string(), "[0, 0, 1]");
    assert_failure("cross([1, 0], [0, 1, 0])");
    assert_failure("cross(1, [0, 1, 0])");
}

#[test]
fn binding_errors() {
    assert!(failure_message("let x = 1\nlet x = 2").contains("shadowing"));
    assert!(failure_message("let print = 1").contains("reserved"));
    assert!(failure_message("y").contains("Unknown variable"));
}

#[test]
fn call_errors_report_line() {
    let message = failure_message("num(\"1\")\nlinspace(0, 1)");
    assert!(message.contains("line 2"), "{message}");
    assert!(message.contains("'linspace' takes 3 argument(s) but 2 were supplied"),
            "{message}");

    assert!(failure_message("frobnicate(1)").contains("Unknown function"));
}

#[test]
fn syntax_errors() {
    assert_failure("num(1");
    assert_failure("num(1) num(2)");
    assert_failure("[1, 2");
    assert_failure("let = 3");
    assert_failure("num(1,)");
    assert!(failure_message("num(\"abc)").contains("Unterminated"));
}
