// コアレイヤー - 基盤となる型、設定、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod config;
pub mod error;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use config::{BenchConfig, ConfigPreset, DEFAULT_ITERATIONS};
pub use error::{BenchError, BenchResult, InvocationError, ValidationError, ValidationResult};
pub use types::{CacheMode, CallArguments, StrategyKind, TimingResult};
