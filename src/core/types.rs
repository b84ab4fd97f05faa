// ベンチマークで共通利用するデータ型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 呼び出し戦略の種類
///
/// 並び順がそのまま実行順になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// コンパイル時に解決される直接呼び出し（ベースライン）
    Direct,
    /// メソッド記述子と型消去された引数列による呼び出し
    Reflective,
    /// 呼び出しごとにレシーバ型とメンバー名を解決する動的ディスパッチ
    Dynamic,
    /// デリゲートの型検証付き汎用エントリポイント経由の呼び出し
    Delegate,
    /// デリゲートから取り出した型付き関数ポインタ経由の呼び出し
    Compiled,
}

impl StrategyKind {
    /// 全戦略（実行順）
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Direct,
        StrategyKind::Reflective,
        StrategyKind::Dynamic,
        StrategyKind::Delegate,
        StrategyKind::Compiled,
    ];

    /// 識別子
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Reflective => "reflective",
            Self::Dynamic => "dynamic",
            Self::Delegate => "delegate",
            Self::Compiled => "compiled",
        }
    }

    /// 説明文
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Direct => "静的に解決される直接呼び出し",
            Self::Reflective => "MethodInfo と Box<dyn Any> の引数列による呼び出し",
            Self::Dynamic => "レシーバの実行時型からメンバーを毎回解決する呼び出し",
            Self::Delegate => "デリゲートの dynamic_invoke（引数型を毎回検証）",
            Self::Compiled => "デリゲートの型付き関数ポインタによる呼び出し",
        }
    }

    /// キャッシュモードを含めた表示名
    pub const fn display_name(&self, mode: CacheMode) -> &'static str {
        match (self, mode) {
            (Self::Direct, CacheMode::NonCached) => "direct",
            (Self::Direct, CacheMode::Cached) => "direct (cached)",
            (Self::Reflective, CacheMode::NonCached) => "reflective",
            (Self::Reflective, CacheMode::Cached) => "reflective (cached)",
            (Self::Dynamic, CacheMode::NonCached) => "dynamic",
            (Self::Dynamic, CacheMode::Cached) => "dynamic (cached)",
            (Self::Delegate, CacheMode::NonCached) => "delegate",
            (Self::Delegate, CacheMode::Cached) => "delegate (cached)",
            (Self::Compiled, CacheMode::NonCached) => "compiled",
            (Self::Compiled, CacheMode::Cached) => "compiled (cached)",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// レシーバ・引数コンテナの再利用方針
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// 呼び出しごとにレシーバ・引数コンテナを生成
    NonCached,
    /// セットアップ時に生成したものを再利用
    Cached,
}

impl CacheMode {
    pub const ALL: [CacheMode; 2] = [CacheMode::NonCached, CacheMode::Cached];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NonCached => "non-cached",
            Self::Cached => "cached",
        }
    }
}

/// `Foo::bar` に渡す引数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallArguments {
    pub a: i32,
    pub b: i32,
    pub c: bool,
}

impl CallArguments {
    pub const fn new(a: i32, b: i32, c: bool) -> Self {
        Self { a, b, c }
    }

    /// 直接計算した期待値
    pub fn expected(&self) -> i32 {
        crate::target::Foo::new().bar(self.a, self.b, self.c)
    }
}

impl Default for CallArguments {
    fn default() -> Self {
        Self::new(1, 2, false)
    }
}

/// 1戦略分の計測結果
///
/// 生成後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingResult {
    name: String,
    first_call: Duration,
    next_calls: Duration,
    return_value: i32,
    iterations: u64,
}

impl TimingResult {
    pub fn new(
        name: impl Into<String>,
        first_call: Duration,
        next_calls: Duration,
        return_value: i32,
        iterations: u64,
    ) -> Self {
        Self {
            name: name.into(),
            first_call,
            next_calls,
            return_value,
            iterations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 初回呼び出しの所要時間
    pub fn first_call(&self) -> Duration {
        self.first_call
    }

    /// 2回目以降 `iterations` 回分の合計所要時間
    pub fn next_calls(&self) -> Duration {
        self.next_calls
    }

    pub fn return_value(&self) -> i32 {
        self.return_value
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// 2回目以降の1呼び出しあたりの平均時間
    pub fn per_call(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        let nanos = self.next_calls.as_nanos() / u128::from(self.iterations);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
