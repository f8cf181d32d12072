use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter: `RUST_LOG` wins, then an explicit level from the config
/// file, then the verbose/default crate level.
fn build_filter(verbose: bool, configured_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match configured_level {
        Some(level) => EnvFilter::new(format!("dashfmt={}", level)),
        None if verbose => EnvFilter::new("dashfmt=debug,info"),
        None => EnvFilter::new("dashfmt=warn"),
    })
}

pub fn init_cli_logger(verbose: bool, configured_level: Option<&str>) {
    // stdout 保留給格式化結果，日誌一律寫到 stderr
    tracing_subscriber::registry()
        .with(build_filter(verbose, configured_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, configured_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, configured_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // for log collectors that ingest structured lines
        )
        .init();
}
