use crate::core::{BenchConfig, CacheMode, CallArguments, ConfigPreset, StrategyKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "invocation_bench")]
#[command(about = "Benchmarks direct, reflective, dynamic, delegate and fn-pointer method calls")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// サブコマンド省略時は既定設定での `run`
    pub fn subcommand(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Time every strategy and print the sorted result table
    Run(RunArgs),

    /// Call every strategy once in both cache modes and check the results
    Verify(CallArgs),

    /// List the available strategies
    List,
}

/// `Foo::bar(a, b, c)` の引数
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CallArgs {
    /// First operand
    #[arg(short = 'a', long = "arg-a", default_value_t = 1, allow_hyphen_values = true)]
    pub a: i32,

    /// Second operand, added when -c is set
    #[arg(short = 'b', long = "arg-b", default_value_t = 2, allow_hyphen_values = true)]
    pub b: i32,

    /// Include the second operand in the sum
    #[arg(short = 'c', long = "arg-c")]
    pub c: bool,
}

impl From<&CallArgs> for CallArguments {
    fn from(args: &CallArgs) -> Self {
        CallArguments::new(args.a, args.b, args.c)
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Configuration preset
    #[arg(short = 'p', long, value_enum, default_value_t = PresetArg::Default)]
    pub preset: PresetArg,

    /// Number of timed calls after the first call
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,

    /// Reuse of receiver and argument containers [default: non-cached]
    #[arg(short = 'm', long, value_enum)]
    pub cache_mode: Option<CacheModeArg>,

    /// Strategies to run [default: all]
    #[arg(short = 's', long = "strategy", value_enum, value_delimiter = ',')]
    pub strategies: Vec<StrategyArg>,

    /// First operand [default: 1]
    #[arg(short = 'a', long = "arg-a", allow_hyphen_values = true)]
    pub a: Option<i32>,

    /// Second operand, added when -c is set [default: 2]
    #[arg(short = 'b', long = "arg-b", allow_hyphen_values = true)]
    pub b: Option<i32>,

    /// Include the second operand in the sum (`-c` alone means true) [default: false]
    #[arg(
        short = 'c',
        long = "arg-c",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub c: Option<bool>,

    /// JSON configuration file used instead of the preset
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit without waiting for a key press
    #[arg(long)]
    pub no_wait: bool,
}

impl RunArgs {
    /// プリセット（または設定ファイル）の値に、指定された引数だけを重ねる
    pub fn apply(&self, base: BenchConfig) -> BenchConfig {
        let mut arguments = base.arguments();
        if let Some(a) = self.a {
            arguments.a = a;
        }
        if let Some(b) = self.b {
            arguments.b = b;
        }
        if let Some(c) = self.c {
            arguments.c = c;
        }

        let mut config = base.with_arguments(arguments);
        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if let Some(cache_mode) = self.cache_mode {
            config = config.with_cache_modes(cache_mode.modes().to_vec());
        }
        if !self.strategies.is_empty() {
            config = config.with_strategies(self.strategies.iter().map(|s| s.kind()).collect());
        }
        if self.no_wait {
            config = config.with_wait_for_key(false);
        }
        config
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresetArg {
    #[default]
    Default,
    Quick,
    Testing,
}

impl From<PresetArg> for ConfigPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => ConfigPreset::Default,
            PresetArg::Quick => ConfigPreset::Quick,
            PresetArg::Testing => ConfigPreset::Testing,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheModeArg {
    NonCached,
    Cached,
    Both,
}

impl CacheModeArg {
    pub fn modes(&self) -> &'static [CacheMode] {
        match self {
            Self::NonCached => &[CacheMode::NonCached],
            Self::Cached => &[CacheMode::Cached],
            Self::Both => &CacheMode::ALL,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    Direct,
    Reflective,
    Dynamic,
    Delegate,
    Compiled,
}

impl StrategyArg {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Direct => StrategyKind::Direct,
            Self::Reflective => StrategyKind::Reflective,
            Self::Dynamic => StrategyKind::Dynamic,
            Self::Delegate => StrategyKind::Delegate,
            Self::Compiled => StrategyKind::Compiled,
        }
    }
}
