// 型付き関数ポインタによる呼び出し

use super::InvocationStrategy;
use crate::core::{CacheMode, CallArguments, InvocationError, StrategyKind};
use crate::target::{BarFn, Foo};
use std::hint::black_box;

/// デリゲートから取り出した `BarFn` を直接呼び出す
///
/// 関数ポインタは毎回 `black_box` を通し、間接呼び出しのまま計測する。
#[derive(Debug, Clone)]
pub struct CompiledInvoke {
    func: BarFn,
    mode: CacheMode,
    instance: Foo,
    arguments: CallArguments,
}

impl CompiledInvoke {
    pub fn new(func: BarFn, arguments: CallArguments, mode: CacheMode) -> Self {
        Self {
            func,
            mode,
            instance: Foo::new(),
            arguments,
        }
    }
}

impl InvocationStrategy for CompiledInvoke {
    fn name(&self) -> &'static str {
        StrategyKind::Compiled.display_name(self.mode)
    }

    fn invoke(&mut self) -> Result<i32, InvocationError> {
        let CallArguments { a, b, c } = self.arguments;
        let func = black_box(self.func);
        let result = match self.mode {
            CacheMode::NonCached => {
                let instance = Box::new(Foo::new());
                func(black_box(&*instance), a, b, c)
            }
            CacheMode::Cached => func(&self.instance, a, b, c),
        };
        Ok(result)
    }
}
