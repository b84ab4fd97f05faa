//! 呼び出し機構のランタイム
//!
//! - reflection: メソッド記述子と型消去された引数列による呼び出し
//! - dynamic: 実行時型とメンバー名による毎回の解決
//! - delegate: メソッドに束縛された呼び出しハンドル

pub mod delegate;
pub mod dynamic;
pub mod reflection;

pub use delegate::{Delegate, DelegateSignature};
pub use dynamic::{DynamicMember, DynamicRuntime, DynamicTarget, DynamicValue};
pub use reflection::{
    unbox, validate_arguments, ArgumentList, MethodInfo, MethodThunk, ParameterInfo, Reflect,
    TypeDescriptor, TypeInfo,
};
