use std::{
    sync::{Arc, Mutex},
    thread,
};

use ruleval::{
    Context, EvalOptions, ErrorKind, Expression, FunctionRegistry, LiteralArguments, Value,
    error::{FunctionError, RuntimeError},
    interpreter::evaluator::function::{
        builtin::{contains, len},
        core::BUILTIN_FUNCTIONS,
    },
};

/// Registers `record`, which stores its arguments and returns `true`.
fn recording_registry() -> (FunctionRegistry, Arc<Mutex<Vec<Value>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut registry = FunctionRegistry::new();

    let sink = Arc::clone(&seen);
    registry.register("record", move |args: &[Value]| {
                let mut sink = sink.lock().map_err(|e| FunctionError::Failed(e.to_string()))?;
                sink.extend_from_slice(args);
                Ok(Value::Bool(true))
            });

    (registry, seen)
}

fn context() -> Context {
    let mut context = Context::new();
    context.insert("n".to_string(), Value::Integer(5));
    context.insert("m".to_string(),
                   [("x".to_string(), Value::from("deep"))].into_iter().collect());
    context
}

#[test]
fn raw_literal_arguments_pass_source_text() {
    let (registry, seen) = recording_registry();
    let expr = Expression::parse(r#"record(n, m.x, 1 + 1, "s", 7, 2.50)"#).unwrap();

    assert_eq!(expr.evaluate(&context(), &registry).unwrap(), Value::Bool(true));
    assert_eq!(*seen.lock().unwrap(),
               vec![Value::Integer(5),
                    Value::from("deep"),
                    Value::Real(2.0),
                    Value::from("\"s\""),
                    Value::from("7"),
                    Value::from("2.50")]);
}

#[test]
fn typed_literal_arguments_are_evaluated() {
    let (registry, seen) = recording_registry();
    let expr = Expression::parse(r#"record(n, "s", 7, 2.50)"#).unwrap();
    let options = EvalOptions { literal_arguments: LiteralArguments::Typed };

    expr.evaluate_with(&context(), &registry, options).unwrap();
    assert_eq!(*seen.lock().unwrap(),
               vec![Value::Integer(5), Value::from("s"), Value::Integer(7), Value::Real(2.5)]);
}

#[test]
fn argument_errors_abort_before_the_call() {
    let (registry, seen) = recording_registry();
    let expr = Expression::parse("record(n, missing)").unwrap();

    let err = expr.evaluate(&context(), &registry).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn unknown_function() {
    let expr = Expression::parse("nope(n)").unwrap();
    let err = expr.evaluate(&context(), &FunctionRegistry::new()).unwrap_err();

    assert_eq!(err,
               RuntimeError::UnknownFunction { name:     "nope".to_string(),
                                               position: 0, });
}

#[test]
fn function_errors_are_wrapped() {
    let mut registry = FunctionRegistry::new();
    registry.register("fail", |_: &[Value]| Err(FunctionError::Failed("boom".to_string())));

    let expr = Expression::parse("n > 1 && fail()").unwrap();
    let err = expr.evaluate(&context(), &registry).unwrap_err();

    assert_eq!(err,
               RuntimeError::Function { name:     "fail".to_string(),
                                        source:   FunctionError::Failed("boom".to_string()),
                                        position: 9, });
}

#[test]
fn register_replaces_previous_binding() {
    let mut registry = FunctionRegistry::new();
    assert!(!registry.register("f", |_: &[Value]| Ok(Value::Integer(1))));
    assert!(registry.register("f", |_: &[Value]| Ok(Value::Integer(2))));

    let expr = Expression::parse("f()").unwrap();
    assert_eq!(expr.evaluate(&Context::new(), &registry).unwrap(), Value::Integer(2));
}

#[test]
fn builtins_registry() {
    let registry = FunctionRegistry::with_builtins();
    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();

    let mut expected = BUILTIN_FUNCTIONS.to_vec();
    expected.sort_unstable();
    assert_eq!(names, expected);

    assert!(FunctionRegistry::new().names().next().is_none());
}

#[test]
fn builtin_arity_is_checked() {
    let registry = FunctionRegistry::with_builtins();
    let cases = [("len()", 1, 0), ("contains(n)", 2, 1), ("contains(n, n, n)", 2, 3)];

    for (src, expected, found) in cases {
        let expr = Expression::parse(src).unwrap();
        match expr.evaluate(&context(), &registry) {
            Err(RuntimeError::Function { source, .. }) => {
                assert_eq!(source, FunctionError::ArgumentCount { expected, found }, "{src}");
            },
            other => panic!("unexpected result for '{src}': {other:?}"),
        }
    }

    // The same check applies when a builtin is called directly.
    assert_eq!(contains(&[Value::from("x")]),
               Err(FunctionError::ArgumentCount { expected: 2,
                                                  found:    1, }));
    assert_eq!(len(&[]),
               Err(FunctionError::ArgumentCount { expected: 1,
                                                  found:    0, }));
}

#[test]
fn literal_needles_follow_the_argument_mode() {
    let registry = FunctionRegistry::with_builtins();
    let mut context = Context::new();
    context.insert("tags".to_string(), Value::from(vec![Value::from("vip")]));
    context.insert("name".to_string(), Value::from("rulebook"));

    // Raw mode hands over the literal's text, quotes included.
    let in_list = Expression::parse(r#"contains(tags, "vip")"#).unwrap();
    let in_name = Expression::parse(r#"contains(name, "rule")"#).unwrap();
    assert!(!in_list.as_bool(&context, &registry).unwrap());
    assert!(!in_name.as_bool(&context, &registry).unwrap());

    context.insert("quoted".to_string(), Value::from(vec![Value::from("\"vip\"")]));
    let raw_match = Expression::parse(r#"contains(quoted, "vip")"#).unwrap();
    assert!(raw_match.as_bool(&context, &registry).unwrap());

    let typed = EvalOptions { literal_arguments: LiteralArguments::Typed };
    assert_eq!(in_list.evaluate_with(&context, &registry, typed).unwrap(), Value::Bool(true));
    assert_eq!(in_name.evaluate_with(&context, &registry, typed).unwrap(), Value::Bool(true));
}

#[test]
fn concurrent_evaluation_of_one_expression() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();
    assert_send_sync::<FunctionRegistry>();
    assert_send_sync::<Value>();

    let expr = Expression::parse("a.v * 2 + 0.1 > limit && contains(tags, wanted)").unwrap();
    let registry = FunctionRegistry::with_builtins();

    thread::scope(|s| {
        let handles: Vec<_> =
            (0..8).map(|i| {
                      let (expr, registry) = (&expr, &registry);
                      s.spawn(move || {
                           let mut context = Context::new();
                           context.insert("a".to_string(),
                                          [("v".to_string(), Value::Integer(i))].into_iter()
                                                                                .collect());
                           context.insert("limit".to_string(), Value::Real(6.0));
                           context.insert("tags".to_string(),
                                          Value::from(vec![Value::from("x"), Value::from("y")]));
                           context.insert("wanted".to_string(), Value::from("y"));

                           for _ in 0..100 {
                               let result = expr.as_bool(&context, registry).unwrap();
                               assert_eq!(result, i >= 3, "thread {i}");
                           }
                       })
                  })
                  .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    });

    // The expression is unchanged after concurrent use.
    assert_eq!(expr, Expression::parse(expr.source()).unwrap());
}
