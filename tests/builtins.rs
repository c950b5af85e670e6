use std::{fmt, io, rc::Rc};

use numlib::{
    error::RuntimeError,
    interpreter::{
        evaluator::function::{
            core::{BUILTIN_FUNCTIONS, builtin_arity, call_builtin},
            cross::cross,
            linspace::{MAX_COUNT, linspace},
            num::num,
            print::my_print,
        },
        value::{core::Value, host_object::HostObject},
    },
};

fn vector(components: &[i64]) -> Value {
    components.iter().map(|&c| Value::Integer(c)).collect::<Vec<_>>().into()
}

fn real_vector(components: &[f64]) -> Value {
    components.iter().map(|&c| Value::Real(c)).collect::<Vec<_>>().into()
}

fn components(value: &Value) -> Vec<Value> {
    value.as_vec(0).expect("expected an array").clone()
}

#[derive(Debug)]
struct Celsius(f64);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl HostObject for Celsius {
    fn type_name(&self) -> &str {
        "celsius"
    }

    fn to_real(&self) -> Option<f64> {
        Some(self.0)
    }
}

#[derive(Debug)]
struct Handle;

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<handle>")
    }
}

impl HostObject for Handle {
    fn type_name(&self) -> &str {
        "handle"
    }
}

struct BrokenSink;

impl io::Write for BrokenSink {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct CountingSink {
    writes: usize,
    bytes:  Vec<u8>,
}

impl io::Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn num_maps_booleans_to_integers() {
    assert_eq!(num(&Value::Bool(true), 1).unwrap(), Value::Integer(1));
    assert_eq!(num(&Value::Bool(false), 1).unwrap(), Value::Integer(0));
}

#[test]
fn num_preserves_numbers() {
    for i in [i64::MIN, -1, 0, 7, i64::MAX] {
        assert_eq!(num(&Value::Integer(i), 1).unwrap(), Value::Integer(i));
    }
    for r in [-0.5, 0.0, 3.25, f64::INFINITY] {
        assert_eq!(num(&Value::Real(r), 1).unwrap(), Value::Real(r));
    }
}

#[test]
fn num_parses_integer_strings_first() {
    assert_eq!(num(&Value::from("17"), 1).unwrap(), Value::Integer(17));
    assert_eq!(num(&Value::from("+17"), 1).unwrap(), Value::Integer(17));
    assert_eq!(num(&Value::from("-0"), 1).unwrap(), Value::Integer(0));
    assert_eq!(num(&Value::from("007"), 1).unwrap(), Value::Integer(7));
}

#[test]
fn num_falls_back_to_float_strings() {
    assert_eq!(num(&Value::from("2.5"), 1).unwrap(), Value::Real(2.5));
    assert_eq!(num(&Value::from("1e-3"), 1).unwrap(), Value::Real(0.001));
    assert_eq!(num(&Value::from("3.0"), 1).unwrap(), Value::Real(3.0));
    assert_eq!(num(&Value::from("inf"), 1).unwrap(), Value::Real(f64::INFINITY));
    assert_eq!(num(&Value::from("99999999999999999999"), 1).unwrap(),
               Value::Real(1e20));
}

#[test]
fn num_trims_whitespace_before_the_float_parse() {
    assert_eq!(num(&Value::from(" 7"), 1).unwrap(), Value::Real(7.0));
    assert_eq!(num(&Value::from("7\n"), 1).unwrap(), Value::Real(7.0));
    assert_eq!(num(&Value::from(" 2.5 "), 1).unwrap(), Value::Real(2.5));
    assert_eq!(num(&Value::from("\t-1e2 "), 1).unwrap(), Value::Real(-100.0));
}

#[test]
fn num_accepts_digit_separators() {
    assert_eq!(num(&Value::from("1_000"), 1).unwrap(), Value::Integer(1000));
    assert_eq!(num(&Value::from("-2_500_000"), 1).unwrap(), Value::Integer(-2_500_000));
    assert_eq!(num(&Value::from("1_000.5"), 1).unwrap(), Value::Real(1000.5));
    assert_eq!(num(&Value::from(" 1_0 "), 1).unwrap(), Value::Real(10.0));
}

#[test]
fn num_rejects_malformed_strings() {
    for text in ["abc", "", "   ", "1 2", "1.2.3", "0x10", "1__000", "_1", "1_", "1_.5"] {
        match num(&Value::from(text), 4) {
            Err(RuntimeError::NumberParse { literal, line }) => {
                assert_eq!(literal, text);
                assert_eq!(line, 4);
            },
            other => panic!("expected a parse error for {text:?}, got {other:?}"),
        }
    }
}

#[test]
fn num_uses_host_conversion_for_other_values() {
    let warm = Value::Object(Rc::new(Celsius(21.5)));
    assert_eq!(num(&warm, 1).unwrap(), Value::Real(21.5));
}

#[test]
fn num_reports_values_without_numeric_representation() {
    let cases = [(Value::Object(Rc::new(Handle)), "handle"),
                 (vector(&[1, 2]), "array"),
                 (Value::Nil, "nil")];

    for (value, expected) in cases {
        match num(&value, 2) {
            Err(RuntimeError::TypeCoercion { type_name, .. }) => assert_eq!(type_name, expected),
            other => panic!("expected a coercion error, got {other:?}"),
        }
    }
}

#[test]
fn my_print_writes_once_and_returns_input() {
    let values = [Value::Integer(3),
                  Value::Real(0.5),
                  Value::from("text"),
                  vector(&[1, 2, 3]),
                  Value::Nil,
                  Value::Bool(false)];

    for value in values {
        let mut sink = Vec::new();
        let returned = my_print(&value, &mut sink, 1).unwrap();

        assert_eq!(returned, value);
        assert_eq!(String::from_utf8(sink).unwrap(), format!("{value}\n"));
    }
}

#[test]
fn my_print_returns_the_same_host_object() {
    let object = Value::Object(Rc::new(Celsius(-4.0)));
    let mut sink = Vec::new();

    let returned = my_print(&object, &mut sink, 1).unwrap();

    assert_eq!(returned, object);
    assert_eq!(String::from_utf8(sink).unwrap(), "-4°C\n");
}

#[test]
fn my_print_reports_sink_failures() {
    let err = my_print(&Value::Integer(1), &mut BrokenSink, 9).unwrap_err();
    assert!(matches!(err, RuntimeError::Output { line: 9, .. }));
}

#[test]
fn my_print_writes_the_line_in_one_call() {
    let mut sink = CountingSink::default();

    my_print(&vector(&[1, 2, 3]), &mut sink, 1).unwrap();

    assert_eq!(sink.writes, 1);
    assert_eq!(sink.bytes, b"[1, 2, 3]\n");
}

#[test]
fn linspace_spaces_values_evenly() {
    let r = linspace(&Value::Integer(0), &Value::Integer(10), &Value::Integer(5), 1).unwrap();
    assert_eq!(r, real_vector(&[0.0, 2.0, 4.0, 6.0, 8.0]));
}

#[test]
fn linspace_with_zero_count_is_empty() {
    let r = linspace(&Value::Integer(0), &Value::Integer(1), &Value::Integer(0), 1).unwrap();
    assert_eq!(r, real_vector(&[]));
}

#[test]
fn linspace_has_exactly_n_elements() {
    for n in 1u32..=50 {
        let r = linspace(&Value::Real(-3.5), &Value::Real(12.0), &Value::Integer(i64::from(n)), 1).unwrap();
        let elements = components(&r);
        let step = (12.0 - -3.5) / f64::from(n);

        assert_eq!(elements.len(), usize::try_from(n).unwrap());
        assert_eq!(elements[0], Value::Real(-3.5));
        assert_eq!(elements[elements.len() - 1], Value::Real(-3.5 + f64::from(n - 1) * step));
        assert!(elements.iter().all(|v| v.as_real(1).unwrap() < 12.0));
    }
}

#[test]
fn linspace_descends_when_stop_is_below_start() {
    let r = linspace(&Value::Integer(4), &Value::Integer(0), &Value::Integer(4), 1).unwrap();
    assert_eq!(r, real_vector(&[4.0, 3.0, 2.0, 1.0]));
}

#[test]
fn linspace_rejects_bad_counts() {
    let negative = linspace(&Value::Integer(0), &Value::Integer(1), &Value::Integer(-2), 3);
    assert!(matches!(negative, Err(RuntimeError::InvalidArgument { line: 3, .. })));

    let fractional = linspace(&Value::Integer(0), &Value::Integer(1), &Value::Real(2.0), 3);
    assert!(matches!(fractional, Err(RuntimeError::TypeError { .. })));

    let bounds = linspace(&Value::from("0"), &Value::Integer(1), &Value::Integer(2), 3);
    assert!(matches!(bounds, Err(RuntimeError::ExpectedNumber { .. })));
}

#[test]
fn linspace_refuses_counts_above_the_ceiling() {
    for count in [i64::from(MAX_COUNT) + 1, 1_000_000_000_000_000, i64::MAX] {
        let r = linspace(&Value::Integer(0), &Value::Integer(1), &Value::Integer(count), 5);
        assert!(matches!(r, Err(RuntimeError::InvalidArgument { line: 5, .. })));
    }
}

#[test]
fn linspace_accepts_integer_bounds_beyond_exact_float_range() {
    let r = linspace(&Value::Integer(0), &Value::Integer(9_007_199_254_740_993), &Value::Integer(2), 1).unwrap();
    assert_eq!(r, real_vector(&[0.0, 4_503_599_627_370_496.0]));
}

#[test]
fn cross_of_unit_vectors() {
    assert_eq!(cross(&vector(&[1, 0, 0]), &vector(&[0, 1, 0]), 1).unwrap(),
               vector(&[0, 0, 1]));
    assert_eq!(cross(&vector(&[0, 1, 0]), &vector(&[0, 0, 1]), 1).unwrap(),
               vector(&[1, 0, 0]));
}

#[test]
fn cross_is_anticommutative() {
    let samples = [[3, -2, 7], [0, 0, 0], [-5, 11, 4], [1, 1, 1], [100, -40, 9]];

    for a in &samples {
        for b in &samples {
            let ab = components(&cross(&vector(a), &vector(b), 1).unwrap());
            let ba = components(&cross(&vector(b), &vector(a), 1).unwrap());

            for (x, y) in ab.iter().zip(&ba) {
                assert_eq!(x.as_integer().unwrap(), -y.as_integer().unwrap());
            }
        }
    }
}

#[test]
fn cross_with_itself_is_zero() {
    for a in [[3, -2, 7], [-5, 11, 4], [9, 9, 9]] {
        assert_eq!(cross(&vector(&a), &vector(&a), 1).unwrap(), vector(&[0, 0, 0]));
    }

    let a = real_vector(&[0.5, -1.25, 2.0]);
    assert_eq!(cross(&a, &a, 1).unwrap(), real_vector(&[0.0, 0.0, 0.0]));
}

#[test]
fn cross_promotes_mixed_components_to_reals() {
    let a: Value = vec![Value::Real(1.5), Value::Integer(0), Value::Bool(false)].into();
    let b = vector(&[0, 2, 0]);

    assert_eq!(cross(&a, &b, 1).unwrap(), real_vector(&[0.0, 0.0, 3.0]));
}

#[test]
fn cross_rounds_large_integers_when_promoting() {
    let a: Value = vec![Value::Integer(9_007_199_254_740_993), Value::Integer(0), Value::Real(0.5)].into();
    let b = vector(&[0, 1, 0]);

    assert_eq!(cross(&a, &b, 1).unwrap(), real_vector(&[-0.5, 0.0, 9_007_199_254_740_992.0]));
}

#[test]
fn cross_ignores_extra_components() {
    assert_eq!(cross(&vector(&[1, 0, 0, 9]), &vector(&[0, 1, 0, 9, 9]), 1).unwrap(),
               vector(&[0, 0, 1]));
}

#[test]
fn cross_rejects_short_or_non_numeric_vectors() {
    let short = cross(&vector(&[1, 0]), &vector(&[0, 1, 0]), 6);
    assert!(matches!(short, Err(RuntimeError::InvalidArgument { line: 6, .. })));

    let not_array = cross(&Value::Integer(1), &vector(&[0, 1, 0]), 6);
    assert!(matches!(not_array, Err(RuntimeError::ExpectedArray { .. })));

    let text: Value = vec![Value::from("1"), Value::Integer(0), Value::Integer(0)].into();
    let non_numeric = cross(&text, &vector(&[0, 1, 0]), 6);
    assert!(matches!(non_numeric, Err(RuntimeError::ExpectedNumber { .. })));
}

#[test]
fn cross_detects_integer_overflow() {
    let r = cross(&vector(&[0, i64::MAX, 0]), &vector(&[0, 0, 2]), 1);
    assert!(matches!(r, Err(RuntimeError::Overflow { .. })));
}

#[test]
fn builtin_table_exposes_fixed_arities() {
    assert_eq!(builtin_arity("num"), Some(1));
    assert_eq!(builtin_arity("print"), Some(1));
    assert_eq!(builtin_arity("linspace"), Some(3));
    assert_eq!(builtin_arity("cross"), Some(2));

    for name in BUILTIN_FUNCTIONS {
        assert!(builtin_arity(name).is_some(), "{name} has no arity");
    }
}

#[test]
fn call_builtin_dispatches_by_name() {
    let r = call_builtin("cross", &[vector(&[1, 0, 0]), vector(&[0, 1, 0])], 1).unwrap();
    assert_eq!(r, vector(&[0, 0, 1]));

    let mismatch = call_builtin("cross", &[vector(&[1, 0, 0])], 2);
    assert!(matches!(mismatch,
                     Err(RuntimeError::ArgumentCountMismatch { expected: 2, found: 1, .. })));

    let unknown = call_builtin("dot", &[], 2);
    assert!(matches!(unknown, Err(RuntimeError::UnknownFunction { .. })));
}

#[test]
fn math_builtins() {
    assert_eq!(call_builtin("abs", &[Value::Bool(true)], 1).unwrap(), Value::Integer(1));
    assert!(matches!(call_builtin("abs", &[Value::Integer(i64::MIN)], 1),
                     Err(RuntimeError::Overflow { .. })));
    assert_eq!(call_builtin("exp", &[Value::Integer(0)], 1).unwrap(), Value::Real(1.0));
    assert_eq!(call_builtin("cos", &[Value::Integer(0)], 1).unwrap(), Value::Real(1.0));
    assert!(matches!(call_builtin("pow", &[Value::Real(-8.0), Value::Real(0.5)], 1),
                     Err(RuntimeError::InvalidArgument { .. })));
    assert_eq!(call_builtin("pow", &[Value::Integer(-2), Value::Integer(3)], 1).unwrap(),
               Value::Real(-8.0));
    assert!(matches!(call_builtin("sqrt", &[Value::from("4")], 1),
                     Err(RuntimeError::ExpectedNumber { .. })));
    assert!(matches!(call_builtin("pow", &[Value::Integer(0), Value::Integer(-1)], 4),
                     Err(RuntimeError::DivisionByZero { line: 4 })));
    assert!(call_builtin("sqrt", &[Value::Integer(i64::MAX)], 1).is_ok());
}
