// 動的ディスパッチによる呼び出し

use super::InvocationStrategy;
use crate::core::{CacheMode, CallArguments, InvocationError, StrategyKind};
use crate::runtime::{DynamicRuntime, DynamicValue};
use crate::target::{Foo, BAR};
use std::any::Any;
use std::hint::black_box;
use std::sync::Arc;

/// 型消去されたレシーバに対し、呼び出しのたびにメンバーを解決する
pub struct DynamicDispatch {
    runtime: Arc<DynamicRuntime>,
    mode: CacheMode,
    receiver: Box<dyn Any>,
    arguments: [DynamicValue; 3],
}

impl DynamicDispatch {
    pub fn new(runtime: Arc<DynamicRuntime>, arguments: CallArguments, mode: CacheMode) -> Self {
        Self {
            runtime,
            mode,
            receiver: Box::new(Foo::new()),
            arguments: [arguments.a.into(), arguments.b.into(), arguments.c.into()],
        }
    }
}

impl InvocationStrategy for DynamicDispatch {
    fn name(&self) -> &'static str {
        StrategyKind::Dynamic.display_name(self.mode)
    }

    fn invoke(&mut self) -> Result<i32, InvocationError> {
        let result = match self.mode {
            CacheMode::NonCached => {
                let receiver: Box<dyn Any> = black_box(Box::new(Foo::new()));
                self.runtime
                    .invoke_member(&*receiver, BAR, &self.arguments)?
            }
            CacheMode::Cached => self
                .runtime
                .invoke_member(&*self.receiver, BAR, &self.arguments)?,
        };
        result.into_int(BAR)
    }
}
