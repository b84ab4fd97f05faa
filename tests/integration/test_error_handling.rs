// エラー処理の統合テスト
use crate::fixtures::{registry, testing_config};
use invocation_bench::{
    benchmarks::NoOpObserver,
    core::{InvocationError, ValidationError},
    runtime::{unbox, ArgumentList, Delegate, DynamicValue},
    strategies::MockInvocationStrategy,
    target::{BarFn, BAR},
    BenchContext, BenchError, BenchmarkSuite, CallArguments, Foo,
};

#[test]
fn test_reflective_invoke_signature_mismatch() {
    let context = BenchContext::resolve().unwrap();
    let args: ArgumentList = vec![Box::new(1_i32), Box::new(2_i32), Box::new(1_i32)];

    let error = context.method().invoke(&Foo::new(), &args).unwrap_err();
    assert_eq!(
        error,
        InvocationError::signature_mismatch(BAR, 2, std::any::type_name::<bool>())
    );
}

#[test]
fn test_reflective_invoke_wrong_count_and_receiver() {
    let context = BenchContext::resolve().unwrap();

    let args: ArgumentList = vec![Box::new(1_i32), Box::new(2_i32)];
    let error = context.method().invoke(&Foo::new(), &args).unwrap_err();
    assert_eq!(error, InvocationError::argument_count(BAR, 3, 2));

    let args: ArgumentList = vec![Box::new(1_i32), Box::new(2_i32), Box::new(true)];
    let error = context.method().invoke(&String::from("foo"), &args).unwrap_err();
    assert!(matches!(error, InvocationError::ReceiverMismatch { .. }));
}

#[test]
fn test_delegate_dynamic_invoke_revalidates() {
    let context = BenchContext::resolve().unwrap();
    let delegate = context.create_delegate().unwrap();

    let args: ArgumentList = vec![
        Box::new(Foo::new()),
        Box::new(1_i32),
        Box::new(2_i32),
        Box::new(true),
    ];
    let result = delegate.dynamic_invoke(&args).unwrap();
    assert_eq!(unbox::<i32>(BAR, result).unwrap(), 3);

    // レシーバなしの引数列は拒否される
    let args: ArgumentList = vec![Box::new(1_i32), Box::new(2_i32), Box::new(true)];
    let error = delegate.dynamic_invoke(&args).unwrap_err();
    assert!(error.is_signature_error());
}

#[test]
fn test_delegate_bind_with_wrong_signature() {
    let context = BenchContext::resolve().unwrap();

    let error = Delegate::<fn(&Foo, i64, i64, bool) -> i64>::create(context.method()).unwrap_err();
    assert!(matches!(error, InvocationError::DelegateBindError { .. }));

    assert!(Delegate::<BarFn>::create(context.method()).is_ok());
}

#[test]
fn test_dynamic_dispatch_errors() {
    let context = BenchContext::resolve().unwrap();
    let runtime = context.runtime();
    let args = [DynamicValue::Int(1), DynamicValue::Int(2), DynamicValue::Int(0)];

    let error = runtime.invoke_member(&Foo::new(), BAR, &args).unwrap_err();
    assert_eq!(error, InvocationError::signature_mismatch(BAR, 2, "bool"));

    let error = runtime.invoke_member(&Foo::new(), "baz", &args).unwrap_err();
    assert!(matches!(error, InvocationError::MethodNotFound { .. }));

    let error = runtime.invoke_member(&1_u32, BAR, &args).unwrap_err();
    assert!(matches!(error, InvocationError::UnknownType { .. }));
}

#[test]
fn test_failing_strategy_aborts_whole_run() {
    let config = testing_config(100, CallArguments::default());
    let mut registry = registry(&config);

    let mut failing = MockInvocationStrategy::new();
    failing.expect_name().return_const("failing");
    failing
        .expect_invoke()
        .returning(|| Err(InvocationError::signature_mismatch(BAR, 0, "i32")));
    registry.register(Box::new(failing)).unwrap();

    let suite = BenchmarkSuite::new(config, NoOpObserver::new());
    let result = suite.run(&mut registry);

    assert!(matches!(
        result,
        Err(BenchError::Invocation(InvocationError::SignatureMismatch { .. }))
    ));
}

#[test]
fn test_duplicate_strategy_registration() {
    let config = testing_config(100, CallArguments::default());
    let mut registry = registry(&config);

    let mut duplicate = MockInvocationStrategy::new();
    duplicate.expect_name().return_const("direct");

    let error = registry.register(Box::new(duplicate)).unwrap_err();
    assert!(matches!(error, BenchError::DuplicateStrategy { .. }));
    assert_eq!(registry.len(), 5);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = testing_config(0, CallArguments::default());
    assert_eq!(
        config.validate().unwrap_err(),
        ValidationError::new("iterations", "1以上である必要があります")
    );
}
