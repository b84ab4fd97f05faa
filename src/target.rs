//! 計測対象の型 `Foo` とメソッド `bar`
//!
//! リフレクション用の型記述子と動的ランタイム用のメンバー表もここで登録する。

use crate::core::InvocationError;
use crate::runtime::{
    DynamicMember, DynamicTarget, DynamicValue, MethodInfo, ParameterInfo, Reflect,
    TypeDescriptor, TypeInfo,
};
use std::any::Any;

/// 計測対象メソッド名
pub const BAR: &str = "bar";

/// `Foo::bar` の関数ポインタ型
pub type BarFn = fn(&Foo, i32, i32, bool) -> i32;

/// 計測対象のレシーバ
///
/// 非キャッシュ版の戦略は呼び出しごとにヒープ上へ生成するため、
/// サイズ0の型にはしない（サイズ0だと `Box::new` が割り当てを行わない）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Foo {
    id: u32,
}

impl Foo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: u32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// `a + (c ? b : 0)`
    pub fn bar(&self, a: i32, b: i32, c: bool) -> i32 {
        a.wrapping_add(if c { b } else { 0 })
    }
}

fn bar_thunk(receiver: &dyn Any, args: &[Box<dyn Any>]) -> Option<Box<dyn Any>> {
    let foo = receiver.downcast_ref::<Foo>()?;
    let [a, b, c] = args else {
        return None;
    };
    let result = foo.bar(
        *a.downcast_ref::<i32>()?,
        *b.downcast_ref::<i32>()?,
        *c.downcast_ref::<bool>()?,
    );
    Some(Box::new(result))
}

impl Reflect for Foo {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::new(TypeInfo::of::<Foo>()).with_method(MethodInfo::new(
            TypeInfo::of::<Foo>(),
            BAR,
            vec![
                ParameterInfo::new::<i32>("a"),
                ParameterInfo::new::<i32>("b"),
                ParameterInfo::new::<bool>("c"),
            ],
            TypeInfo::of::<i32>(),
            bar_thunk,
            Foo::bar as BarFn,
        ))
    }
}

fn bar_dynamic(receiver: &dyn Any, args: &[DynamicValue]) -> Result<DynamicValue, InvocationError> {
    let foo = receiver
        .downcast_ref::<Foo>()
        .ok_or_else(|| InvocationError::receiver_mismatch(BAR, Foo::TYPE_NAME))?;
    let [a, b, c] = args else {
        return Err(InvocationError::argument_count(BAR, 3, args.len()));
    };
    let result = foo.bar(a.to_int(BAR, 0)?, b.to_int(BAR, 1)?, c.to_bool(BAR, 2)?);
    Ok(DynamicValue::Int(result))
}

impl DynamicTarget for Foo {
    const TYPE_NAME: &'static str = "Foo";

    fn members() -> Vec<(&'static str, DynamicMember)> {
        vec![(BAR, bar_dynamic as DynamicMember)]
    }
}
