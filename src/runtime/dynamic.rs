//! 動的ディスパッチ用のランタイム
//!
//! 静的な型検査を経ずに、呼び出しのたびにレシーバの実行時型と
//! メンバー名からメソッドを解決し、`DynamicValue` の引数を
//! パラメータ型へ変換してから呼び出す。

use crate::core::InvocationError;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// 動的に型付けされた値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicValue {
    Int(i32),
    Bool(bool),
}

impl DynamicValue {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
        }
    }

    /// `position` 番目の引数として整数に変換する
    pub fn to_int(self, method: &str, position: usize) -> Result<i32, InvocationError> {
        match self {
            Self::Int(value) => Ok(value),
            Self::Bool(_) => Err(InvocationError::signature_mismatch(method, position, "int")),
        }
    }

    /// `position` 番目の引数として真偽値に変換する
    pub fn to_bool(self, method: &str, position: usize) -> Result<bool, InvocationError> {
        match self {
            Self::Bool(value) => Ok(value),
            Self::Int(_) => Err(InvocationError::signature_mismatch(method, position, "bool")),
        }
    }

    /// 戻り値を整数として取り出す
    pub fn into_int(self, method: &str) -> Result<i32, InvocationError> {
        match self {
            Self::Int(value) => Ok(value),
            Self::Bool(_) => Err(InvocationError::return_type_mismatch(method, "int")),
        }
    }
}

impl From<i32> for DynamicValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// 動的に呼び出せるメンバー
pub type DynamicMember = fn(&dyn Any, &[DynamicValue]) -> Result<DynamicValue, InvocationError>;

/// 動的ランタイムに登録できる型
pub trait DynamicTarget: Any {
    const TYPE_NAME: &'static str;

    fn members() -> Vec<(&'static str, DynamicMember)>;
}

struct DynamicType {
    name: &'static str,
    members: HashMap<&'static str, DynamicMember>,
}

/// 実行時型ごとのメンバー表
#[derive(Default)]
pub struct DynamicRuntime {
    types: HashMap<TypeId, DynamicType>,
}

impl DynamicRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: DynamicTarget>(&mut self) {
        let members = T::members().into_iter().collect();
        self.types.insert(
            TypeId::of::<T>(),
            DynamicType {
                name: T::TYPE_NAME,
                members,
            },
        );
    }

    pub fn with_type<T: DynamicTarget>(mut self) -> Self {
        self.register::<T>();
        self
    }

    pub fn is_registered(&self, type_id: TypeId) -> bool {
        self.types.contains_key(&type_id)
    }

    /// レシーバの実行時型とメンバー名からメソッドを解決して呼び出す
    pub fn invoke_member(
        &self,
        receiver: &dyn Any,
        member: &str,
        args: &[DynamicValue],
    ) -> Result<DynamicValue, InvocationError> {
        let ty = self
            .types
            .get(&receiver.type_id())
            .ok_or_else(|| InvocationError::unknown_type(format!("{:?}", receiver.type_id())))?;
        let call = ty
            .members
            .get(member)
            .ok_or_else(|| InvocationError::method_not_found(ty.name, member))?;

        call(receiver, args)
    }
}

impl fmt::Debug for DynamicRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.types.values().map(|ty| ty.name))
            .finish()
    }
}
