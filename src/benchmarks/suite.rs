//! ベンチマークスイート
//!
//! レジストリの戦略を登録順に1つずつ計測し、結果を検証してレポートにまとめる。
//! いずれかの戦略が失敗した時点で全体を中断し、部分的な結果は返さない。

use super::{BenchmarkReport, RunObserver, TimingHarness};
use crate::core::{BenchConfig, BenchError, BenchResult};
use crate::strategies::StrategyRegistry;
use std::time::Instant;

/// 設定とオブザーバーを保持する実行器
pub struct BenchmarkSuite<O: RunObserver> {
    config: BenchConfig,
    harness: TimingHarness,
    observer: O,
}

impl<O: RunObserver> BenchmarkSuite<O> {
    pub fn new(config: BenchConfig, observer: O) -> Self {
        let harness = TimingHarness::new(config.iterations());
        Self {
            config,
            harness,
            observer,
        }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// 全戦略を計測する
    pub fn run(&self, registry: &mut StrategyRegistry) -> BenchResult<BenchmarkReport> {
        let expected = self.config.arguments().expected();
        let iterations = self.harness.iterations();

        tracing::info!(
            strategies = registry.len(),
            iterations,
            "starting benchmark run"
        );
        self.observer.run_started(registry.len(), iterations);
        let started = Instant::now();

        let mut results = Vec::with_capacity(registry.len());
        for strategy in registry.strategies_mut() {
            let name = strategy.name();
            self.observer.strategy_started(name);

            let result = self.harness.measure(&mut **strategy)?;
            if result.return_value() != expected {
                return Err(BenchError::result_mismatch(
                    name,
                    expected,
                    result.return_value(),
                ));
            }

            self.observer.strategy_finished(&result);
            results.push(result);
        }

        let elapsed = started.elapsed();
        self.observer.run_completed(elapsed);
        tracing::info!(elapsed = ?elapsed, "benchmark run completed");

        Ok(BenchmarkReport::new(
            iterations,
            self.config.arguments(),
            results,
        ))
    }

    /// 計測せずに各戦略を1回ずつ呼び出し、結果が期待値と一致するか検証する
    pub fn verify(&self, registry: &mut StrategyRegistry) -> BenchResult<Vec<(&'static str, i32)>> {
        let expected = self.config.arguments().expected();

        let mut values = Vec::with_capacity(registry.len());
        for strategy in registry.strategies_mut() {
            let name = strategy.name();
            let value = strategy.invoke()?;
            if value != expected {
                return Err(BenchError::result_mismatch(name, expected, value));
            }
            tracing::debug!(strategy = name, value, "verified strategy");
            values.push((name, value));
        }
        Ok(values)
    }
}
