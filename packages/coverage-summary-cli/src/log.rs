use tracing_subscriber::fmt::format::FmtSpan;

use crate::options::LogOptions;

pub fn parse_log_level(level: Option<&str>) -> Option<tracing::Level> {
    match level {
        Some("error") => Some(tracing::Level::ERROR),
        Some("debug") => Some(tracing::Level::DEBUG),
        Some("info") => Some(tracing::Level::INFO),
        Some("warn") => Some(tracing::Level::WARN),
        Some("trace") => Some(tracing::Level::TRACE),
        _ => None,
    }
}

/// Installs the global subscriber. Logs go to stderr, stdout may carry the
/// patched document. Nothing is installed without a log level.
pub fn initialize_log(log_options: &LogOptions) {
    if let Some(log_level) = parse_log_level(log_options.level.as_deref()) {
        let builder = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr);

        let builder = if log_options.enable_trace {
            builder.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
        } else {
            builder
        };

        builder
            .with_ansi(false)
            .event_format(tracing_subscriber::fmt::format().pretty())
            .init();
    }
}
