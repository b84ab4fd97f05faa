//! ベンチマーク実行設定
//!
//! 起動時に一度だけ確定し、ハーネスへ明示的に渡す。
//! - プリセット（default / quick / testing）
//! - ビルダー形式での上書き
//! - JSONファイルからの読み込みと検証

use super::error::{BenchResult, ValidationError, ValidationResult};
use super::types::{CacheMode, CallArguments, StrategyKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 全戦略で共有する既定の反復回数
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// 設定プリセット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigPreset {
    /// 1,000万回の本計測
    Default,
    /// 10万回の簡易計測
    Quick,
    /// 1,000回のテスト用計測（キー入力待ちなし）
    Testing,
}

impl ConfigPreset {
    pub const fn iterations(&self) -> u64 {
        match self {
            Self::Default => DEFAULT_ITERATIONS,
            Self::Quick => 100_000,
            Self::Testing => 1_000,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Quick => "quick",
            Self::Testing => "testing",
        }
    }
}

/// ベンチマーク設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    iterations: u64,
    arguments: CallArguments,
    strategies: Vec<StrategyKind>,
    cache_modes: Vec<CacheMode>,
    wait_for_key: bool,
}

impl BenchConfig {
    /// プリセットから設定を作成
    pub fn preset(preset: ConfigPreset) -> Self {
        Self {
            iterations: preset.iterations(),
            arguments: CallArguments::default(),
            strategies: StrategyKind::ALL.to_vec(),
            cache_modes: vec![CacheMode::NonCached],
            wait_for_key: !matches!(preset, ConfigPreset::Testing),
        }
    }

    /// JSONファイルから設定を読み込み、検証する
    pub fn from_json_file(path: &Path) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_arguments(mut self, arguments: CallArguments) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<StrategyKind>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_cache_modes(mut self, cache_modes: Vec<CacheMode>) -> Self {
        self.cache_modes = cache_modes;
        self
    }

    pub fn with_wait_for_key(mut self, wait_for_key: bool) -> Self {
        self.wait_for_key = wait_for_key;
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn arguments(&self) -> CallArguments {
        self.arguments
    }

    pub fn strategies(&self) -> &[StrategyKind] {
        &self.strategies
    }

    pub fn cache_modes(&self) -> &[CacheMode] {
        &self.cache_modes
    }

    pub fn wait_for_key(&self) -> bool {
        self.wait_for_key
    }

    /// 設定値の検証
    pub fn validate(&self) -> ValidationResult<()> {
        if self.iterations == 0 {
            return Err(ValidationError::new(
                "iterations",
                "1以上である必要があります",
            ));
        }
        if self.strategies.is_empty() {
            return Err(ValidationError::new(
                "strategies",
                "少なくとも1つの戦略を指定してください",
            ));
        }
        if self.cache_modes.is_empty() {
            return Err(ValidationError::new(
                "cache_modes",
                "少なくとも1つのキャッシュモードを指定してください",
            ));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = self.strategies.iter().find(|kind| !seen.insert(**kind)) {
            return Err(ValidationError::new(
                "strategies",
                format!("{duplicate} が重複しています"),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = self.cache_modes.iter().find(|mode| !seen.insert(**mode)) {
            return Err(ValidationError::new(
                "cache_modes",
                format!("{} が重複しています", duplicate.as_str()),
            ));
        }

        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::preset(ConfigPreset::Default)
    }
}
