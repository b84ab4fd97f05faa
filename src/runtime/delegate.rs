//! デリゲート - 特定のメソッドに束縛された呼び出しハンドル
//!
//! ハンドル自体はメソッドのシグネチャで強く型付けされているが、
//! `dynamic_invoke` は型消去された引数列を受け取り、呼び出しのたびに
//! 引数型を検証する。`as_fn` は検証なしで呼べる型付き関数ポインタを返す。

use super::reflection::{validate_arguments, MethodInfo, TypeInfo};
use crate::core::InvocationError;
use std::any::Any;
use std::sync::Arc;

/// デリゲートとして束縛できる関数ポインタ型
///
/// 引数列の先頭はレシーバ（オープンインスタンスデリゲート）。
pub trait DelegateSignature: Any + Copy + Send + Sync {
    /// レシーバを含む引数の型
    fn parameter_types() -> Vec<TypeInfo>;

    fn return_type() -> TypeInfo;

    /// 型消去された引数列で呼び出す。型が合わなければ `None`
    fn call_erased(self, args: &[Box<dyn Any>]) -> Option<Box<dyn Any>>;
}

impl<T, A, B, C, R> DelegateSignature for fn(&T, A, B, C) -> R
where
    T: Any,
    A: Any + Copy,
    B: Any + Copy,
    C: Any + Copy,
    R: Any,
{
    fn parameter_types() -> Vec<TypeInfo> {
        vec![
            TypeInfo::of::<T>(),
            TypeInfo::of::<A>(),
            TypeInfo::of::<B>(),
            TypeInfo::of::<C>(),
        ]
    }

    fn return_type() -> TypeInfo {
        TypeInfo::of::<R>()
    }

    fn call_erased(self, args: &[Box<dyn Any>]) -> Option<Box<dyn Any>> {
        let [receiver, a, b, c] = args else {
            return None;
        };
        let result = self(
            receiver.downcast_ref::<T>()?,
            *a.downcast_ref::<A>()?,
            *b.downcast_ref::<B>()?,
            *c.downcast_ref::<C>()?,
        );
        Some(Box::new(result))
    }
}

/// メソッドに束縛されたデリゲート
#[derive(Debug)]
pub struct Delegate<F: DelegateSignature> {
    method: Arc<MethodInfo>,
    parameter_types: Vec<TypeInfo>,
    func: F,
}

impl<F: DelegateSignature> Delegate<F> {
    /// メソッド記述子からデリゲートを生成する
    ///
    /// メソッドの実体が `F` 型でなければ `DelegateBindError`。
    pub fn create(method: &Arc<MethodInfo>) -> Result<Self, InvocationError> {
        let func = method
            .entry_point::<F>()
            .ok_or_else(|| InvocationError::delegate_bind(method.name(), std::any::type_name::<F>()))?;

        Ok(Self {
            method: Arc::clone(method),
            parameter_types: F::parameter_types(),
            func,
        })
    }

    pub fn method(&self) -> &MethodInfo {
        &self.method
    }

    pub fn parameter_types(&self) -> &[TypeInfo] {
        &self.parameter_types
    }

    /// 型消去された引数列で呼び出す（毎回引数型を検証）
    pub fn dynamic_invoke(&self, args: &[Box<dyn Any>]) -> Result<Box<dyn Any>, InvocationError> {
        let name = self.method.name();
        validate_arguments(name, &self.parameter_types, args)?;

        self.func
            .call_erased(args)
            .ok_or_else(|| InvocationError::signature_mismatch(name, 0, self.method.signature()))
    }

    /// 型付き関数ポインタ
    pub fn as_fn(&self) -> F {
        self.func
    }
}
