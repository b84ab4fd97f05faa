// 戦略レジストリ - 実行順を保持し、表示名の重複を拒否する

use super::{factory::create_strategy, BenchContext, InvocationStrategy};
use crate::core::{BenchConfig, BenchError, BenchResult, CacheMode, StrategyKind};
use std::fmt;

/// 登録順に実行される戦略の一覧
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn InvocationStrategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定で選ばれた戦略を登録する
    ///
    /// 実行順は設定の並びによらず `StrategyKind::ALL` × `CacheMode::ALL` の順。
    pub fn from_config(config: &BenchConfig, context: &BenchContext) -> BenchResult<Self> {
        config.validate()?;

        let kinds = StrategyKind::ALL
            .into_iter()
            .filter(|kind| config.strategies().contains(kind));
        let mut registry = Self::new();
        for kind in kinds {
            let modes = CacheMode::ALL
                .into_iter()
                .filter(|mode| config.cache_modes().contains(mode));
            for mode in modes {
                let strategy = create_strategy(kind, mode, config.arguments(), context)?;
                registry.register(strategy)?;
            }
        }
        Ok(registry)
    }

    /// 戦略を登録する。同名の戦略が既にあればエラー
    pub fn register(&mut self, strategy: Box<dyn InvocationStrategy>) -> BenchResult<()> {
        let name = strategy.name();
        if self.contains(name) {
            return Err(BenchError::duplicate_strategy(name));
        }
        self.strategies.push(strategy);
        Ok(())
    }

    pub fn with_strategy(mut self, strategy: Box<dyn InvocationStrategy>) -> BenchResult<Self> {
        self.register(strategy)?;
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.strategies.iter().any(|strategy| strategy.name() == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|strategy| strategy.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn strategies_mut(&mut self) -> &mut [Box<dyn InvocationStrategy>] {
        &mut self.strategies
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
