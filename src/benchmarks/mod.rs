//! パフォーマンス測定とベンチマークモジュール
//!
//! 呼び出し戦略ごとの初回・後続呼び出しの計測とレポート生成を提供

pub mod harness;
pub mod observer;
pub mod report;
pub mod suite;

pub use harness::TimingHarness;
pub use observer::{ConsoleObserver, MockRunObserver, NoOpObserver, RunObserver};
pub use report::BenchmarkReport;
pub use suite::BenchmarkSuite;
