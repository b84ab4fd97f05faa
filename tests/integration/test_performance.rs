// 計測値の性質に関する統合テスト
use crate::fixtures::{run, single_strategy_config, testing_config};
use invocation_bench::{core::CacheMode, CallArguments, StrategyKind, TimingHarness};
use std::time::Duration;

#[test]
fn test_durations_are_non_negative() {
    let report = run(&testing_config(1_000, CallArguments::default()));

    for result in report.results() {
        assert!(result.first_call() >= Duration::ZERO);
        assert!(result.next_calls() >= Duration::ZERO);
        assert_eq!(result.iterations(), 1_000);
    }
}

#[test]
fn test_next_calls_scale_with_iterations() {
    // 1回あたりの割り当てが多い戦略で比較する
    let small = run(&single_strategy_config(
        StrategyKind::Reflective,
        CacheMode::NonCached,
        10_000,
    ));
    let large = run(&single_strategy_config(
        StrategyKind::Reflective,
        CacheMode::NonCached,
        100_000,
    ));

    assert!(
        large.results()[0].next_calls() >= small.results()[0].next_calls(),
        "10x iterations took less time: {:?} < {:?}",
        large.results()[0].next_calls(),
        small.results()[0].next_calls()
    );
}

#[test]
fn test_direct_call_is_not_slower_than_reflective_invoke() {
    let config = testing_config(100_000, CallArguments::default())
        .with_strategies(vec![StrategyKind::Direct, StrategyKind::Reflective]);
    let report = run(&config);

    let direct = report.get("direct").unwrap().next_calls();
    let reflective = report.get("reflective").unwrap().next_calls();

    // 実行環境の揺らぎを許容する
    assert!(
        direct <= reflective * 2,
        "direct {direct:?} vs reflective {reflective:?}"
    );
}

#[test]
fn test_harness_iterations_match_config() {
    let config = testing_config(250, CallArguments::default());
    let report = run(&config);

    assert_eq!(report.iterations(), 250);
    assert_eq!(TimingHarness::new(250).iterations(), 250);
    assert!(report.results().iter().all(|r| r.iterations() == 250));
}
