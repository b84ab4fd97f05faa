//! 計測ハーネス
//!
//! 戦略ごとに、初回呼び出しと後続 `iterations` 回の呼び出しを
//! それぞれ独立したタイマーで計測する。

use crate::core::{BenchError, BenchResult, TimingResult};
use crate::strategies::InvocationStrategy;
use std::hint::black_box;
use std::time::Instant;

/// 2つのタイマーによる計測プロトコル
#[derive(Debug, Clone, Copy)]
pub struct TimingHarness {
    iterations: u64,
}

impl TimingHarness {
    pub fn new(iterations: u64) -> Self {
        Self { iterations }
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// 1戦略を計測する
    ///
    /// どの戦略も `&mut dyn InvocationStrategy` 越しの呼び出しと `Result` の確認を
    /// 経由するため、`direct` を含む全行に同じ固定のオーバーヘッドが含まれる。
    /// 表の値は戦略間の差として読むこと。
    ///
    /// 呼び出しが失敗した時点で中断し、エラーをそのまま返す。
    pub fn measure(&self, strategy: &mut dyn InvocationStrategy) -> BenchResult<TimingResult> {
        let name = strategy.name();

        let first_call_timer = Instant::now();
        let first = black_box(strategy.invoke()?);
        let first_call = first_call_timer.elapsed();

        let mut last = first;
        let next_calls_timer = Instant::now();
        for _ in 0..self.iterations {
            last = black_box(strategy.invoke()?);
        }
        let next_calls = next_calls_timer.elapsed();

        if last != first {
            return Err(BenchError::result_mismatch(name, first, last));
        }

        tracing::debug!(
            strategy = name,
            first_call = ?first_call,
            next_calls = ?next_calls,
            "measured strategy"
        );

        Ok(TimingResult::new(
            name,
            first_call,
            next_calls,
            first,
            self.iterations,
        ))
    }
}
