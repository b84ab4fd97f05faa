// 実行進捗の通知

use crate::core::TimingResult;
use mockall::automock;
use std::time::Duration;

/// ベンチマーク実行の進捗を受け取るトレイト
#[automock]
pub trait RunObserver {
    /// 実行開始時の通知
    fn run_started(&self, strategies: usize, iterations: u64);

    /// 戦略の計測開始時の通知
    fn strategy_started(&self, name: &str);

    /// 戦略の計測完了時の通知
    fn strategy_finished(&self, result: &TimingResult);

    /// 全戦略の計測完了時の通知
    fn run_completed(&self, elapsed: Duration);
}

/// コンソール出力による進捗通知
#[derive(Debug, Default, Clone)]
pub struct ConsoleObserver {
    quiet: bool,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl RunObserver for ConsoleObserver {
    fn run_started(&self, strategies: usize, iterations: u64) {
        if !self.quiet {
            println!("🚀 {strategies} 戦略を計測します ({iterations} iterations)");
        }
    }

    fn strategy_started(&self, name: &str) {
        if !self.quiet {
            println!("🔬 {name}");
        }
    }

    fn strategy_finished(&self, result: &TimingResult) {
        if !self.quiet {
            println!(
                "   ✅ first: {:?}, next: {:?}",
                result.first_call(),
                result.next_calls()
            );
        }
    }

    fn run_completed(&self, elapsed: Duration) {
        if !self.quiet {
            println!("📊 計測完了 ({elapsed:?})");
        }
    }
}

/// 何もしない進捗通知（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl NoOpObserver {
    pub fn new() -> Self {
        Self
    }
}

impl RunObserver for NoOpObserver {
    fn run_started(&self, _strategies: usize, _iterations: u64) {
        // 何もしない
    }

    fn strategy_started(&self, _name: &str) {
        // 何もしない
    }

    fn strategy_finished(&self, _result: &TimingResult) {
        // 何もしない
    }

    fn run_completed(&self, _elapsed: Duration) {
        // 何もしない
    }
}
