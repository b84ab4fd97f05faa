// 全戦略の呼び出し結果が一致することの確認
use crate::fixtures::registry;
use invocation_bench::{
    core::{CacheMode, ConfigPreset},
    strategies::create_strategy,
    BenchConfig, BenchContext, CallArguments, StrategyKind,
};

fn invoke_all(arguments: CallArguments) -> Vec<(&'static str, i32)> {
    let config = BenchConfig::preset(ConfigPreset::Testing)
        .with_arguments(arguments)
        .with_cache_modes(CacheMode::ALL.to_vec());
    let mut registry = registry(&config);

    registry
        .strategies_mut()
        .iter_mut()
        .map(|strategy| (strategy.name(), strategy.invoke().expect("invoke should succeed")))
        .collect()
}

#[test]
fn test_all_strategies_include_second_operand() {
    let values = invoke_all(CallArguments::new(1, 2, true));

    assert_eq!(values.len(), 10);
    for (name, value) in values {
        assert_eq!(value, 3, "{name}");
    }
}

#[test]
fn test_all_strategies_skip_second_operand() {
    let values = invoke_all(CallArguments::new(1, 2, false));

    assert_eq!(values.len(), 10);
    for (name, value) in values {
        assert_eq!(value, 1, "{name}");
    }
}

#[test]
fn test_strategies_agree_on_edge_values() {
    let context = BenchContext::resolve().unwrap();

    for arguments in [
        CallArguments::new(0, 0, true),
        CallArguments::new(-5, 5, true),
        CallArguments::new(i32::MAX, 1, true),
        CallArguments::new(i32::MIN, i32::MAX, false),
    ] {
        let expected = arguments.expected();
        for kind in StrategyKind::ALL {
            for mode in CacheMode::ALL {
                let mut strategy = create_strategy(kind, mode, arguments, &context).unwrap();
                assert_eq!(
                    strategy.invoke().unwrap(),
                    expected,
                    "{} with {:?}",
                    strategy.name(),
                    arguments
                );
            }
        }
    }
}

#[test]
fn test_repeated_invocations_are_stable() {
    let context = BenchContext::resolve().unwrap();
    let arguments = CallArguments::new(1, 2, true);

    for kind in StrategyKind::ALL {
        for mode in CacheMode::ALL {
            let mut strategy = create_strategy(kind, mode, arguments, &context).unwrap();
            for _ in 0..100 {
                assert_eq!(strategy.invoke().unwrap(), 3);
            }
        }
    }
}
