// 直接呼び出し（ベースライン）

use super::InvocationStrategy;
use crate::core::{CacheMode, CallArguments, InvocationError, StrategyKind};
use crate::target::Foo;
use std::hint::black_box;

/// コンパイル時に解決される `Foo::bar` の呼び出し
#[derive(Debug, Clone)]
pub struct DirectCall {
    mode: CacheMode,
    instance: Foo,
    arguments: CallArguments,
}

impl DirectCall {
    pub fn new(arguments: CallArguments, mode: CacheMode) -> Self {
        Self {
            mode,
            instance: Foo::new(),
            arguments,
        }
    }
}

impl InvocationStrategy for DirectCall {
    fn name(&self) -> &'static str {
        StrategyKind::Direct.display_name(self.mode)
    }

    fn invoke(&mut self) -> Result<i32, InvocationError> {
        let CallArguments { a, b, c } = self.arguments;
        let result = match self.mode {
            CacheMode::NonCached => {
                let instance = Box::new(Foo::new());
                black_box(&*instance).bar(a, b, c)
            }
            CacheMode::Cached => black_box(&self.instance).bar(a, b, c),
        };
        Ok(result)
    }
}
