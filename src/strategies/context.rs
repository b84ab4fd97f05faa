// 起動時に一度だけ解決する型・メソッド記述子
// グローバル状態として保持せず、戦略の生成時に明示的に渡す

use crate::core::InvocationError;
use crate::runtime::{Delegate, DynamicRuntime, MethodInfo, Reflect, TypeDescriptor};
use crate::target::{BarFn, Foo, BAR};
use std::sync::Arc;

/// 全戦略で共有する読み取り専用のコンテキスト
#[derive(Debug, Clone)]
pub struct BenchContext {
    descriptor: Arc<TypeDescriptor>,
    method: Arc<MethodInfo>,
    runtime: Arc<DynamicRuntime>,
}

impl BenchContext {
    /// `Foo` の型記述子と `bar` のメソッド記述子を解決し、動的ランタイムへ登録する
    pub fn resolve() -> Result<Self, InvocationError> {
        let descriptor = Foo::type_descriptor();
        let method = descriptor.method(BAR)?;
        let runtime = DynamicRuntime::new().with_type::<Foo>();

        tracing::debug!(signature = %method.signature(), "resolved method descriptor");

        Ok(Self {
            descriptor: Arc::new(descriptor),
            method,
            runtime: Arc::new(runtime),
        })
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn method(&self) -> &Arc<MethodInfo> {
        &self.method
    }

    pub fn runtime(&self) -> &Arc<DynamicRuntime> {
        &self.runtime
    }

    /// `bar` に束縛したデリゲートを生成する
    pub fn create_delegate(&self) -> Result<Delegate<BarFn>, InvocationError> {
        Delegate::create(&self.method)
    }
}
