// 統合テスト用のヘルパー
// 設定・レジストリの生成と実行をまとめる

use invocation_bench::{
    benchmarks::NoOpObserver,
    core::{CacheMode, ConfigPreset},
    BenchConfig, BenchContext, BenchmarkReport, BenchmarkSuite, CallArguments, StrategyKind,
    StrategyRegistry,
};

/// テスト用プリセットに反復回数と引数を設定した構成
pub fn testing_config(iterations: u64, arguments: CallArguments) -> BenchConfig {
    BenchConfig::preset(ConfigPreset::Testing)
        .with_iterations(iterations)
        .with_arguments(arguments)
}

/// 指定した戦略だけを指定モードで実行する構成
pub fn single_strategy_config(kind: StrategyKind, mode: CacheMode, iterations: u64) -> BenchConfig {
    testing_config(iterations, CallArguments::default())
        .with_strategies(vec![kind])
        .with_cache_modes(vec![mode])
}

pub fn registry(config: &BenchConfig) -> StrategyRegistry {
    let context = BenchContext::resolve().expect("context should resolve");
    StrategyRegistry::from_config(config, &context).expect("registry should build")
}

/// 設定に従って全戦略を計測する
pub fn run(config: &BenchConfig) -> BenchmarkReport {
    let suite = BenchmarkSuite::new(config.clone(), NoOpObserver::new());
    suite
        .run(&mut registry(config))
        .expect("benchmark run should succeed")
}
