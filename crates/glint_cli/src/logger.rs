use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// Per-module directives from `RUST_LOG` still apply on top of `level`.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
