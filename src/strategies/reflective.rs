// メソッド記述子経由の呼び出し

use super::InvocationStrategy;
use crate::core::{CacheMode, CallArguments, InvocationError, StrategyKind};
use crate::runtime::{unbox, ArgumentList, MethodInfo};
use crate::target::Foo;
use std::sync::Arc;

/// `CallArguments` を型消去された引数列に変換する
pub fn boxed_arguments(arguments: CallArguments) -> ArgumentList {
    vec![
        Box::new(arguments.a),
        Box::new(arguments.b),
        Box::new(arguments.c),
    ]
}

/// セットアップ時に解決した `MethodInfo` を使う呼び出し
///
/// 非キャッシュ版はレシーバと引数列を毎回生成する。
pub struct ReflectiveInvoke {
    method: Arc<MethodInfo>,
    mode: CacheMode,
    instance: Foo,
    arguments: CallArguments,
    cached_arguments: ArgumentList,
}

impl ReflectiveInvoke {
    pub fn new(method: Arc<MethodInfo>, arguments: CallArguments, mode: CacheMode) -> Self {
        Self {
            method,
            mode,
            instance: Foo::new(),
            arguments,
            cached_arguments: boxed_arguments(arguments),
        }
    }
}

impl InvocationStrategy for ReflectiveInvoke {
    fn name(&self) -> &'static str {
        StrategyKind::Reflective.display_name(self.mode)
    }

    fn invoke(&mut self) -> Result<i32, InvocationError> {
        let result = match self.mode {
            CacheMode::NonCached => {
                let instance = Box::new(Foo::new());
                let args = boxed_arguments(self.arguments);
                self.method.invoke(&*instance, &args)?
            }
            CacheMode::Cached => self.method.invoke(&self.instance, &self.cached_arguments)?,
        };
        unbox(self.method.name(), result)
    }
}
