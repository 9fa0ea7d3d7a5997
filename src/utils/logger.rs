use std::io;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StderrLayer<S> = fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr>;

/// 預設過濾規則，RUST_LOG 存在時以其為準
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "coercion_check=debug,info"
    } else {
        "coercion_check=info"
    }
}

// stdout 保留給檢查結果，日誌一律寫到 stderr
fn stderr_layer<S>() -> StderrLayer<S> {
    fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Installs the global subscriber: compact lines, or JSON when `json` is set.
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| stderr_layer().json()))
        .with((!json).then(|| stderr_layer().compact()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "coercion_check=info");
        assert!(default_directive(true).starts_with("coercion_check=debug"));
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
