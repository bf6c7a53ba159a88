use ruleval::{
    Context, Error, ErrorKind, Expression, FunctionRegistry, Value, error::ParseError, evaluate,
};

fn kind_of(src: &str, context: &Context) -> ErrorKind {
    match evaluate(src, context) {
        Ok(v) => panic!("'{src}' should fail but evaluated to {v}"),
        Err(e) => e.kind(),
    }
}

fn context() -> Context {
    let mut context = Context::new();
    context.insert("a".to_string(), Value::Integer(1));
    context.insert("neg".to_string(), Value::Integer(-1));
    context.insert("flag".to_string(), Value::Bool(true));
    context.insert("name".to_string(), Value::from("bob"));
    context.insert("arr".to_string(), Value::from(vec![Value::Integer(10), Value::Integer(20)]));
    context.insert("m".to_string(),
                   [("a".to_string(), Value::Integer(1))].into_iter().collect());
    context
}

#[test]
fn parse_errors() {
    let c = context();
    assert_eq!(kind_of("", &c), ErrorKind::EmptyExpression);
    assert_eq!(kind_of("   ", &c), ErrorKind::SyntaxError);
    assert_eq!(kind_of("a +", &c), ErrorKind::SyntaxError);
    assert_eq!(kind_of("(a", &c), ErrorKind::SyntaxError);
    assert_eq!(kind_of("arr[0", &c), ErrorKind::SyntaxError);
    assert_eq!(kind_of("a % 2", &c), ErrorKind::SyntaxError);
    assert_eq!(kind_of("a b", &c), ErrorKind::SyntaxError);
    assert_eq!(kind_of("m.a(1)", &c), ErrorKind::SyntaxError);
    assert_eq!(kind_of("len(arr)(1)", &c), ErrorKind::SyntaxError);
    assert_eq!(kind_of("a.1", &c), ErrorKind::SyntaxError);
}

#[test]
fn parse_errors_carry_positions() {
    assert_eq!(Expression::parse("a b"),
               Err(ParseError::UnexpectedTrailingTokens { token:    "b".to_string(),
                                                          position: 2, }));
    assert_eq!(Expression::parse("1 +"),
               Err(ParseError::UnexpectedEndOfInput { position: 3 }));
    assert_eq!(Expression::parse("a # b"),
               Err(ParseError::UnrecognizedInput { text:     "#".to_string(),
                                                   position: 2, }));
}

#[test]
fn deep_nesting_is_a_parse_error() {
    let too_deep = [format!("{}1{}", "(".repeat(1000), ")".repeat(1000)),
                    format!("{}1", "-".repeat(200_000)),
                    format!("{}1", "!".repeat(200_000)),
                    format!("{}a{}", "len(".repeat(1000), ")".repeat(1000)),
                    format!("arr{}", "[0]".repeat(1000)),
                    format!("m{}", ".a".repeat(1000)),
                    vec!["1"; 100_000].join(" + "),
                    vec!["flag"; 100_000].join(" && ")];

    for src in &too_deep {
        match Expression::parse(src) {
            Err(e @ ParseError::NestingTooDeep { .. }) => assert_eq!(e.kind(), ErrorKind::SyntaxError),
            other => panic!("expected NestingTooDeep for input of {} bytes, got {other:?}",
                            src.len()),
        }
    }

    assert_eq!(Expression::parse(&format!("{}1", "-".repeat(500))),
               Err(ParseError::NestingTooDeep { position: 128 }));
}

#[test]
fn moderate_nesting_still_evaluates() {
    let c = context();
    let grouped = format!("{}a{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(evaluate(&grouped, &c).unwrap(), Value::Integer(1));

    let chain = vec!["a"; 100].join(" + ");
    assert_eq!(evaluate(&chain, &c).unwrap(), Value::Real(100.0));

    let negated = format!("{}flag", "!".repeat(100));
    assert_eq!(evaluate(&negated, &c).unwrap(), Value::Bool(true));
}

#[test]
fn missing_keys() {
    let c = context();
    assert_eq!(kind_of("x", &c), ErrorKind::KeyNotFound);
    assert_eq!(kind_of("m.zzz", &c), ErrorKind::KeyNotFound);

    let mut nested = Context::new();
    nested.insert("a".to_string(),
                  [("b".to_string(), Value::Integer(42))].into_iter().collect());
    assert_eq!(kind_of("a.c", &nested), ErrorKind::KeyNotFound);
}

#[test]
fn runtime_error_positions() {
    let err = evaluate("a + missing", &context()).unwrap_err();
    match err {
        Error::Runtime(e) => assert_eq!(e.position(), 4),
        Error::Parse(e) => panic!("unexpected parse error: {e}"),
    }
}

#[test]
fn numeric_errors() {
    let c = context();
    assert_eq!(kind_of("a / 0", &c), ErrorKind::DivisionByZero);
    assert_eq!(kind_of("a / 0.0", &c), ErrorKind::DivisionByZero);
    assert_eq!(kind_of("name + 1", &c), ErrorKind::NotNumber);
    assert_eq!(kind_of("-name", &c), ErrorKind::NotNumber);
    assert_eq!(kind_of("flag > 0", &c), ErrorKind::NotNumber);
    assert_eq!(kind_of(r#"name == "bob""#, &c), ErrorKind::NotNumber);
}

#[test]
fn boolean_errors() {
    let c = context();
    assert_eq!(kind_of("!a", &c), ErrorKind::NotBool);
    assert_eq!(kind_of("a && flag", &c), ErrorKind::NotBool);
    assert_eq!(kind_of("flag || 1", &c), ErrorKind::NotBool);
}

#[test]
fn logic_does_not_short_circuit() {
    let c = context();
    assert_eq!(kind_of("false && missing", &c), ErrorKind::KeyNotFound);
    assert_eq!(kind_of("true || missing", &c), ErrorKind::KeyNotFound);
}

#[test]
fn index_errors() {
    let c = context();
    assert_eq!(kind_of("m[1]", &c), ErrorKind::TypeMismatch);
    assert_eq!(kind_of("arr[2]", &c), ErrorKind::IndexOutOfBounds);
    assert_eq!(kind_of("arr[neg]", &c), ErrorKind::IndexOutOfBounds);
    // Negation always produces a float.
    assert_eq!(kind_of("arr[-1]", &c), ErrorKind::IndexNotNumber);
    assert_eq!(kind_of("arr[0.5]", &c), ErrorKind::IndexNotNumber);
    assert_eq!(kind_of(r#"arr["0"]"#, &c), ErrorKind::IndexNotNumber);
    assert_eq!(kind_of("a[0]", &c), ErrorKind::TypeMismatch);
    assert_eq!(kind_of("a.b", &c), ErrorKind::TypeMismatch);
    assert_eq!(kind_of("name.length", &c), ErrorKind::TypeMismatch);
}

#[test]
fn literal_errors() {
    let c = context();
    assert_eq!(kind_of("99999999999999999999", &c), ErrorKind::InvalidLiteral);
    assert_eq!(kind_of("0x10 > 1", &c), ErrorKind::InvalidLiteral);
    assert_eq!(kind_of("2i", &c), ErrorKind::UnsupportedParam);
    assert_eq!(kind_of("'c'", &c), ErrorKind::UnsupportedParam);
    assert_eq!(kind_of("+a", &c), ErrorKind::UnsupportedExpr);
}

#[test]
fn function_errors() {
    let c = context();
    assert_eq!(kind_of("nope(a)", &c), ErrorKind::UnknownFunction);
    assert_eq!(kind_of("len(a)", &c), ErrorKind::FunctionFailed);
    assert_eq!(kind_of("len(arr, arr)", &c), ErrorKind::FunctionFailed);
    assert_eq!(kind_of("contains(a, a)", &c), ErrorKind::FunctionFailed);
}

#[test]
fn typed_accessors() {
    let c = context();
    let functions = FunctionRegistry::new();

    let expr = Expression::parse("a + 1").unwrap();
    assert_eq!(expr.as_bool(&c, &functions).unwrap_err().kind(), ErrorKind::NotBool);
    assert_eq!(expr.as_int(&c, &functions).unwrap(), 2);
    assert!((expr.as_float(&c, &functions).unwrap() - 2.0).abs() < f64::EPSILON);

    let expr = Expression::parse("0 - 7 / 2").unwrap();
    assert_eq!(expr.as_int(&c, &functions).unwrap(), -3);

    let expr = Expression::parse("a").unwrap();
    assert!((expr.as_float(&c, &functions).unwrap() - 1.0).abs() < f64::EPSILON);

    let expr = Expression::parse("name").unwrap();
    assert_eq!(expr.as_int(&c, &functions).unwrap_err().kind(), ErrorKind::TypeMismatch);
    assert_eq!(expr.as_float(&c, &functions).unwrap_err().kind(), ErrorKind::TypeMismatch);
}

#[test]
fn as_int_rejects_floats_outside_the_int_range() {
    let c = context();
    let functions = FunctionRegistry::new();

    for src in ["1e308 * 10", "0 - 1e308 * 10", "1e19", "a * 1e300"] {
        let expr = Expression::parse(src).unwrap();
        assert_eq!(expr.as_int(&c, &functions).unwrap_err().kind(),
                   ErrorKind::TypeMismatch,
                   "{src}");
    }

    let expr = Expression::parse("1e308 * 10").unwrap();
    assert_eq!(expr.as_float(&c, &functions).unwrap(), f64::INFINITY);

    let expr = Expression::parse("0 - 9e18").unwrap();
    assert_eq!(expr.as_int(&c, &functions).unwrap(), -9_000_000_000_000_000_000);
}
