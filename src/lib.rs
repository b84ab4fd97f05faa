//! メソッド呼び出し機構ごとのコストを比較するベンチマーク
//!
//! 同じ `Foo::bar(a, b, c)` を、直接呼び出し・リフレクション・動的ディスパッチ・
//! デリゲート・型付き関数ポインタの5通りで呼び出し、初回呼び出しと
//! 後続呼び出しの所要時間を計測する。

pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod logging;
pub mod runtime;
pub mod strategies;
pub mod target;

pub use benchmarks::{BenchmarkReport, BenchmarkSuite, TimingHarness};
pub use crate::core::{BenchConfig, BenchError, CacheMode, CallArguments, StrategyKind, TimingResult};
pub use strategies::{BenchContext, InvocationStrategy, StrategyRegistry};
pub use target::Foo;
