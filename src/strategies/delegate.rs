// デリゲートの dynamic_invoke による呼び出し

use super::InvocationStrategy;
use crate::core::{CacheMode, CallArguments, InvocationError, StrategyKind};
use crate::runtime::{unbox, ArgumentList, Delegate};
use crate::target::{BarFn, Foo};

/// レシーバを先頭に含む型消去された引数列
pub fn delegate_arguments(receiver: Foo, arguments: CallArguments) -> ArgumentList {
    vec![
        Box::new(receiver),
        Box::new(arguments.a),
        Box::new(arguments.b),
        Box::new(arguments.c),
    ]
}

/// 型付きデリゲートを、引数型を毎回検証する汎用エントリポイントで呼び出す
pub struct DelegateInvoke {
    delegate: Delegate<BarFn>,
    mode: CacheMode,
    arguments: CallArguments,
    cached_arguments: ArgumentList,
}

impl DelegateInvoke {
    pub fn new(delegate: Delegate<BarFn>, arguments: CallArguments, mode: CacheMode) -> Self {
        Self {
            delegate,
            mode,
            arguments,
            cached_arguments: delegate_arguments(Foo::new(), arguments),
        }
    }
}

impl InvocationStrategy for DelegateInvoke {
    fn name(&self) -> &'static str {
        StrategyKind::Delegate.display_name(self.mode)
    }

    fn invoke(&mut self) -> Result<i32, InvocationError> {
        let result = match self.mode {
            CacheMode::NonCached => {
                let args = delegate_arguments(Foo::new(), self.arguments);
                self.delegate.dynamic_invoke(&args)?
            }
            CacheMode::Cached => self.delegate.dynamic_invoke(&self.cached_arguments)?,
        };
        unbox(self.delegate.method().name(), result)
    }
}
