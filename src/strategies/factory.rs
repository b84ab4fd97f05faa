// 戦略ファクトリー - 種類とキャッシュモードから戦略を生成

use super::{
    BenchContext, CompiledInvoke, DelegateInvoke, DirectCall, DynamicDispatch, InvocationStrategy,
    ReflectiveInvoke,
};
use crate::core::{CacheMode, CallArguments, InvocationError, StrategyKind};

/// 呼び出し対象を束縛した戦略を生成する
///
/// デリゲート生成などのセットアップはここで行い、計測区間には含めない。
pub fn create_strategy(
    kind: StrategyKind,
    mode: CacheMode,
    arguments: CallArguments,
    context: &BenchContext,
) -> Result<Box<dyn InvocationStrategy>, InvocationError> {
    let strategy: Box<dyn InvocationStrategy> = match kind {
        StrategyKind::Direct => Box::new(DirectCall::new(arguments, mode)),
        StrategyKind::Reflective => Box::new(ReflectiveInvoke::new(
            context.method().clone(),
            arguments,
            mode,
        )),
        StrategyKind::Dynamic => Box::new(DynamicDispatch::new(
            context.runtime().clone(),
            arguments,
            mode,
        )),
        StrategyKind::Delegate => Box::new(DelegateInvoke::new(
            context.create_delegate()?,
            arguments,
            mode,
        )),
        StrategyKind::Compiled => Box::new(CompiledInvoke::new(
            context.create_delegate()?.as_fn(),
            arguments,
            mode,
        )),
    };
    Ok(strategy)
}
