//! 呼び出し戦略
//!
//! 同じ `Foo::bar` を5通りの機構で呼び出す。各戦略はセットアップ時に
//! 呼び出し対象を束縛し、引数なしの「1回呼び出す」操作だけを公開する。

pub mod compiled;
pub mod context;
pub mod delegate;
pub mod direct;
pub mod dynamic;
pub mod factory;
pub mod reflective;
pub mod registry;

pub use compiled::CompiledInvoke;
pub use context::BenchContext;
pub use delegate::DelegateInvoke;
pub use direct::DirectCall;
pub use dynamic::DynamicDispatch;
pub use factory::create_strategy;
pub use reflective::ReflectiveInvoke;
pub use registry::StrategyRegistry;

use crate::core::InvocationError;
use mockall::automock;

/// 1回分の呼び出しを提供する戦略
#[automock]
pub trait InvocationStrategy {
    /// 表示名（実行内で一意）
    fn name(&self) -> &'static str;

    /// 束縛済みの対象を1回呼び出す
    fn invoke(&mut self) -> Result<i32, InvocationError>;
}
