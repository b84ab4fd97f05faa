//! 実行時メソッド記述子
//!
//! 型名・メソッド名から記述子を引き、`Box<dyn Any>` の引数列を
//! 呼び出し時に検証してから実体を呼び出す。

use crate::core::InvocationError;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 型消去された引数列
pub type ArgumentList = Vec<Box<dyn Any>>;

/// 検証済みの引数でメソッド本体を呼び出す関数
///
/// 引数の型が合わない場合は `None` を返す。
pub type MethodThunk = fn(&dyn Any, &[Box<dyn Any>]) -> Option<Box<dyn Any>>;

/// 実行時の型情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 値の実行時型がこの型と一致するか
    pub fn matches(&self, value: &dyn Any) -> bool {
        value.type_id() == self.id
    }
}

/// 引数の記述子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: &'static str,
    pub ty: TypeInfo,
}

impl ParameterInfo {
    pub fn new<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            ty: TypeInfo::of::<T>(),
        }
    }
}

/// 引数列を期待する型の並びと照合する
///
/// 個数、続いて各位置の型を検証する。
pub fn validate_arguments(
    method: &str,
    expected: &[TypeInfo],
    args: &[Box<dyn Any>],
) -> Result<(), InvocationError> {
    if args.len() != expected.len() {
        return Err(InvocationError::argument_count(
            method,
            expected.len(),
            args.len(),
        ));
    }

    for (position, (ty, arg)) in expected.iter().zip(args).enumerate() {
        if !ty.matches(&**arg) {
            return Err(InvocationError::signature_mismatch(method, position, ty.name()));
        }
    }

    Ok(())
}

/// ボックス化された戻り値を取り出す
pub fn unbox<T: Any + Copy>(method: &str, value: Box<dyn Any>) -> Result<T, InvocationError> {
    value
        .downcast::<T>()
        .map(|value| *value)
        .map_err(|_| InvocationError::return_type_mismatch(method, std::any::type_name::<T>()))
}

/// メソッド記述子
pub struct MethodInfo {
    declaring_type: TypeInfo,
    name: &'static str,
    parameters: Vec<ParameterInfo>,
    parameter_types: Vec<TypeInfo>,
    return_type: TypeInfo,
    thunk: MethodThunk,
    // 型付き関数ポインタ（デリゲート生成用）
    entry_point: Box<dyn Any + Send + Sync>,
}

impl MethodInfo {
    pub fn new<E: Any + Send + Sync>(
        declaring_type: TypeInfo,
        name: &'static str,
        parameters: Vec<ParameterInfo>,
        return_type: TypeInfo,
        thunk: MethodThunk,
        entry_point: E,
    ) -> Self {
        let parameter_types = parameters.iter().map(|parameter| parameter.ty).collect();
        Self {
            declaring_type,
            name,
            parameters,
            parameter_types,
            return_type,
            thunk,
            entry_point: Box::new(entry_point),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn declaring_type(&self) -> TypeInfo {
        self.declaring_type
    }

    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    pub fn return_type(&self) -> TypeInfo {
        self.return_type
    }

    /// 型付きのエントリポイントを取り出す
    ///
    /// `F` がメソッドの実際の関数ポインタ型と異なる場合は `None`。
    pub fn entry_point<F: Any + Copy>(&self) -> Option<F> {
        self.entry_point.downcast_ref::<F>().copied()
    }

    /// レシーバと型消去された引数列でメソッドを呼び出す
    pub fn invoke(
        &self,
        receiver: &dyn Any,
        args: &[Box<dyn Any>],
    ) -> Result<Box<dyn Any>, InvocationError> {
        if !self.declaring_type.matches(receiver) {
            return Err(InvocationError::receiver_mismatch(
                self.name,
                self.declaring_type.name(),
            ));
        }
        validate_arguments(self.name, &self.parameter_types, args)?;

        (self.thunk)(receiver, args).ok_or_else(|| {
            InvocationError::signature_mismatch(self.name, 0, self.signature())
        })
    }

    /// `name(a: i32, ...) -> i32` 形式のシグネチャ文字列
    pub fn signature(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| format!("{}: {}", parameter.name, parameter.ty.name()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({}) -> {}", self.name, parameters, self.return_type.name())
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("declaring_type", &self.declaring_type.name())
            .field("signature", &self.signature())
            .finish()
    }
}

/// 型記述子 - 型と公開メソッドの一覧
#[derive(Debug)]
pub struct TypeDescriptor {
    info: TypeInfo,
    methods: Vec<Arc<MethodInfo>>,
}

impl TypeDescriptor {
    pub fn new(info: TypeInfo) -> Self {
        Self {
            info,
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(Arc::new(method));
        self
    }

    pub fn info(&self) -> TypeInfo {
        self.info
    }

    pub fn methods(&self) -> &[Arc<MethodInfo>] {
        &self.methods
    }

    pub fn get_method(&self, name: &str) -> Option<Arc<MethodInfo>> {
        self.methods
            .iter()
            .find(|method| method.name() == name)
            .cloned()
    }

    /// 名前でメソッドを解決する
    pub fn method(&self, name: &str) -> Result<Arc<MethodInfo>, InvocationError> {
        self.get_method(name)
            .ok_or_else(|| InvocationError::method_not_found(self.info.name(), name))
    }
}

/// 実行時に型記述子を提供できる型
pub trait Reflect: Any {
    fn type_descriptor() -> TypeDescriptor;
}
