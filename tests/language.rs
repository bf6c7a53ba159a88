use std::fs::{self};

use ruleval::{Context, Value, evaluate};
use walkdir::WalkDir;

#[test]
fn rule_fixtures_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/rules").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "rules"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut context = Context::new();

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(json) = line.strip_prefix("@context") {
                context = parse_context(json)
                    .unwrap_or_else(|e| panic!("Bad context on line {} of {path:?}: {e}", i + 1));
                continue;
            }

            count += 1;
            if let Some(rule) = line.strip_prefix('~') {
                if let Ok(v) = evaluate(rule, &context) {
                    panic!("Rule on line {} of {:?} should fail:\n{}\nGot: {}",
                           i + 1,
                           path,
                           rule,
                           v);
                }
            } else {
                match evaluate(line, &context) {
                    Ok(Value::Bool(true)) => {},
                    Ok(v) => panic!("Rule on line {} of {:?} is not true:\n{}\nGot: {}",
                                    i + 1,
                                    path,
                                    line,
                                    v),
                    Err(e) => panic!("Rule on line {} of {:?} failed:\n{}\nError: {:?}",
                                     i + 1,
                                     path,
                                     line,
                                     e),
                }
            }
        }
    }

    assert!(count > 0, "No rules found in tests/rules");
}

fn parse_context(json: &str) -> Result<Context, String> {
    match serde_json::from_str::<serde_json::Value>(json.trim()) {
        Ok(serde_json::Value::Object(fields)) => {
            Ok(fields.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
        },
        Ok(other) => Err(format!("expected an object, found {other}")),
        Err(e) => Err(e.to_string()),
    }
}

fn ctx(json: &str) -> Context {
    parse_context(json).unwrap_or_else(|e| panic!("Bad test context: {e}"))
}

fn assert_true(src: &str, context: &Context) {
    match evaluate(src, context) {
        Ok(Value::Bool(true)) => {},
        Ok(v) => panic!("Rule '{src}' evaluated to {v}"),
        Err(e) => panic!("Rule '{src}' failed: {e}"),
    }
}

fn assert_false(src: &str, context: &Context) {
    match evaluate(src, context) {
        Ok(Value::Bool(false)) => {},
        Ok(v) => panic!("Rule '{src}' evaluated to {v}"),
        Err(e) => panic!("Rule '{src}' failed: {e}"),
    }
}

#[test]
fn boolean_names() {
    let empty = Context::new();
    assert_eq!(evaluate("true", &empty).unwrap(), Value::Bool(true));
    assert_eq!(evaluate("false", &empty).unwrap(), Value::Bool(false));

    // The names win over context entries of the same name.
    let shadowed = ctx(r#"{"true": 0, "m": {"true": 0}}"#);
    assert_eq!(evaluate("true", &shadowed).unwrap(), Value::Bool(true));
    assert_eq!(evaluate("m.true", &shadowed).unwrap(), Value::Bool(true));
}

#[test]
fn arithmetic_results_are_floats() {
    let empty = Context::new();
    assert_eq!(evaluate("1 + 2", &empty).unwrap(), Value::Real(3.0));
    assert_eq!(evaluate("6 * 7", &empty).unwrap(), Value::Real(42.0));
    assert_eq!(evaluate("7 / 2", &empty).unwrap(), Value::Real(3.5));
    assert_eq!(evaluate("-3", &empty).unwrap(), Value::Real(-3.0));
}

#[test]
fn add_sub_mul_are_decimal_accurate() {
    let empty = Context::new();
    assert_eq!(evaluate("0.1 + 0.2", &empty).unwrap(), Value::Real(0.3));
    assert_eq!(evaluate("0.3 - 0.1", &empty).unwrap(), Value::Real(0.2));
    assert_eq!(evaluate("1.1 * 3", &empty).unwrap(), Value::Real(3.3));

    let prices = ctx(r#"{"price": 19.99, "qty": 3}"#);
    assert_true("price * qty == 59.97", &prices);
}

#[test]
fn tiny_magnitudes_fall_back_to_floats() {
    let empty = Context::new();
    assert_eq!(evaluate("1e-30 * 1", &empty).unwrap(), Value::Real(1e-30));
    assert_eq!(evaluate("1e-30 + 0", &empty).unwrap(), Value::Real(1e-30));
    assert_eq!(evaluate("0 - 1e-30", &empty).unwrap(), Value::Real(-1e-30));
    assert_true("1e-30 * 1 > 0", &empty);

    // Each operand fits in a decimal but the product needs 40 places.
    assert_eq!(evaluate("0.00000000000000000001 * 0.00000000000000000001", &empty).unwrap(),
               Value::Real(1e-20 * 1e-20));
    assert_true("0.000000000000003 * 0.00000000000003 > 0", &empty);
    assert_true("0.000000000000003 * 0.00000000000003 < 0.0000000000000000000000000001",
                &empty);

    let tiny = ctx(r#"{"eps": 1e-29}"#);
    assert_true("eps * 2 > eps", &tiny);
}

#[test]
fn huge_magnitudes_fall_back_to_floats() {
    let empty = Context::new();
    assert_eq!(evaluate("1e300 * 2", &empty).unwrap(), Value::Real(2e300));
    assert_eq!(evaluate("1e300 + 1e300", &empty).unwrap(), Value::Real(2e300));
    assert_eq!(evaluate("1e308 * 10", &empty).unwrap(), Value::Real(f64::INFINITY));

    // Still decimal-accurate right below the fallback.
    assert_true("10000000000 * 0.1 == 1000000000", &empty);
}

#[test]
fn precedence_and_associativity() {
    let empty = Context::new();
    assert_true("1 + 2 * 3 == 7", &empty);
    assert_true("(1 + 2) * 3 == 9", &empty);
    assert_true("10 - 4 - 3 == 3", &empty);
    assert_true("8 / 4 / 2 == 1", &empty);
    assert_true("1 < 2 && 2 < 3 || false", &empty);
    assert_true("true || false && false", &empty);
}

#[test]
fn range_check() {
    assert_true("a > 5 && a < 10", &ctx(r#"{"a": 7}"#));
    assert_false("a > 5 && a < 10", &ctx(r#"{"a": 11}"#));
}

#[test]
fn member_access() {
    let context = ctx(r#"{"a": {"b": 42, "c": {"d": [1, 2]}}}"#);
    assert_eq!(evaluate("a.b", &context).unwrap(), Value::Integer(42));
    assert_eq!(evaluate("a.c.d[1]", &context).unwrap(), Value::Integer(2));
    assert_eq!(evaluate("(a).b", &context).unwrap(), Value::Integer(42));
}

#[test]
fn indexing() {
    let context = ctx(r#"{"arr": [10, 20], "m": {"a": 1}, "key": "a"}"#);
    assert_eq!(evaluate("arr[1]", &context).unwrap(), Value::Integer(20));
    assert_eq!(evaluate("arr[0] + arr[1]", &context).unwrap(), Value::Real(30.0));
    assert_eq!(evaluate(r#"m["a"]"#, &context).unwrap(), Value::Integer(1));
    assert_eq!(evaluate("m[key]", &context).unwrap(), Value::Integer(1));
    assert_eq!(evaluate(r#"m["zzz"]"#, &context).unwrap(), Value::Null);
}

#[test]
fn strings_are_unquoted() {
    let empty = Context::new();
    assert_eq!(evaluate(r#""abc""#, &empty).unwrap(), Value::from("abc"));
    assert_eq!(evaluate(r#""a\"b""#, &empty).unwrap(), Value::from("a\"b"));
    assert_eq!(evaluate(r"`a\nb`", &empty).unwrap(), Value::from(r"a\nb"));

    // Backticks are dropped like double quotes; anything between them is kept.
    assert_eq!(evaluate(r#"`say "hi"`"#, &empty).unwrap(), Value::from(r#"say "hi""#));
    assert_eq!(evaluate("``", &empty).unwrap(), Value::from(""));
}

#[test]
fn builtins_are_available_by_default() {
    let context = ctx(r#"{"tags": ["new", "sale"], "tag": "sale", "name": "rulebook", "part": "book"}"#);
    assert_true("contains(tags, tag)", &context);
    assert_true("contains(name, part)", &context);
    assert_true("len(tags) == 2", &context);
    assert_true("len(name) > 5", &context);
}

#[test]
fn evaluation_is_repeatable() {
    let context = ctx(r#"{"a": {"b": [1.5, 2.5]}}"#);
    let expr = ruleval::Expression::parse("a.b[0] * 2 + a.b[1]").unwrap();
    let functions = ruleval::FunctionRegistry::with_builtins();

    let first = expr.evaluate(&context, &functions).unwrap();
    for _ in 0..10 {
        assert_eq!(expr.evaluate(&context, &functions).unwrap(), first);
    }
    assert_eq!(first, Value::Real(5.5));
}
