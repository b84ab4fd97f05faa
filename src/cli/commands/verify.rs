use crate::benchmarks::{BenchmarkSuite, NoOpObserver};
use crate::cli::CallArgs;
use crate::core::{BenchConfig, CacheMode, CallArguments, ConfigPreset};
use crate::strategies::{BenchContext, StrategyRegistry};
use anyhow::Result;

/// 全戦略を両キャッシュモードで1回ずつ呼び出し、結果を検証する
pub fn verify_strategies(args: &CallArgs) -> Result<Vec<(&'static str, i32)>> {
    let arguments = CallArguments::from(args);
    let config = BenchConfig::preset(ConfigPreset::Testing)
        .with_arguments(arguments)
        .with_cache_modes(CacheMode::ALL.to_vec());

    let context = BenchContext::resolve()?;
    let mut registry = StrategyRegistry::from_config(&config, &context)?;
    let suite = BenchmarkSuite::new(config, NoOpObserver::new());

    println!(
        "🔍 bar({}, {}, {}) の期待値: {}",
        arguments.a,
        arguments.b,
        arguments.c,
        arguments.expected()
    );

    let values = suite.verify(&mut registry)?;
    for (name, value) in &values {
        println!("   ✅ {name:<20} {value}");
    }
    println!("✅ {} 戦略すべての結果が一致しました", values.len());

    Ok(values)
}
