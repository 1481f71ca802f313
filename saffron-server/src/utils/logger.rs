//! 日志初始化
//!
//! tracing-subscriber 控制台输出；设置 LOG_DIR 后改写按天滚动的日志文件。

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize console logging with the default filter
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize logging, optionally writing to a daily-rolling file
///
/// The filter comes from `level` when given, otherwise `RUST_LOG`, otherwise
/// "info". The file writer is only used when `log_dir` names an existing
/// directory.
pub fn init_logger_with_file(level: Option<&str>, log_dir: Option<&str>) {
    let filter = match level {
        Some(l) => EnvFilter::new(l),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_dir.map(Path::new) {
        Some(dir) if dir.is_dir() => {
            let appender = tracing_appender::rolling::daily(dir, "saffron-server");
            builder.with_writer(appender).with_ansi(false).init();
        }
        _ => builder.init(),
    }
}
