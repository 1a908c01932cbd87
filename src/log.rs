use env_logger::{Builder, Target};
use log::LevelFilter;

/// Builds a logger that writes to stderr, keeping stdout free for solution
/// output. Repeated initialization attempts are ignored.
pub fn build_stderr_logger_for_level(level: LevelFilter) {
    let _ = Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .parse_default_env()
        .try_init();
}

/// Maps the number of `-v` occurrences to a log level, starting at `base`.
pub fn build_stderr_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    let level = match verbosity {
        0 => base,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    build_stderr_logger_for_level(level.max(base));
}
