use crate::benchmarks::{BenchmarkReport, BenchmarkSuite, ConsoleObserver};
use crate::cli::RunArgs;
use crate::core::BenchConfig;
use crate::strategies::{BenchContext, StrategyRegistry};
use anyhow::{Context, Result};
use std::io::{self, BufRead, IsTerminal, Write};

/// 実行設定を解決する
///
/// `--config` があればファイル、なければプリセットを基にし、
/// コマンドラインで指定された値を上書きする。
pub fn resolve_config(args: &RunArgs) -> Result<BenchConfig> {
    let base = match &args.config {
        Some(path) => BenchConfig::from_json_file(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?,
        None => BenchConfig::preset(args.preset.into()),
    };

    let config = args.apply(base);
    config.validate()?;
    Ok(config)
}

/// 全戦略を計測して表を出力する
pub fn run_benchmark(args: &RunArgs, verbose: bool) -> Result<BenchmarkReport> {
    let config = resolve_config(args)?;
    let context = BenchContext::resolve().context("メソッド記述子の解決に失敗しました")?;
    let mut registry = StrategyRegistry::from_config(&config, &context)?;

    println!("building dataset on {} iterations...", config.iterations());

    let observer = if verbose {
        ConsoleObserver::new()
    } else {
        ConsoleObserver::quiet()
    };
    let suite = BenchmarkSuite::new(config.clone(), observer);
    let report = suite.run(&mut registry)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_table(&mut out)?;
    out.flush()?;

    if config.wait_for_key() && io::stdin().is_terminal() {
        wait_for_key()?;
    }

    Ok(report)
}

fn wait_for_key() -> Result<()> {
    println!("press a key to exit...");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
