use tracing::dispatcher;
use tracing_subscriber::{prelude::*, EnvFilter};

/// `-v` の数に対応する既定のログレベル
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// ログ出力を初期化する
///
/// `RUST_LOG` が設定されていればそれを優先する。出力先は stderr
/// （stdout は結果の表のみ）。
pub fn init_logging(verbosity: u8) {
    if dispatcher::has_been_set() {
        return;
    }

    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_new(default_level(verbosity)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
