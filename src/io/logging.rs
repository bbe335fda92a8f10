//! Logger setup for the command-line tool

use log::LevelFilter;

/// Log level for the given `-v` count, `-q` overriding
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` at the requested level; `RUST_LOG` still takes precedence
///
/// Returns `false` if a logger was already installed.
pub fn init_logging(verbosity: u8, quiet: bool) -> bool {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity, quiet))
        .format_timestamp(None)
        .parse_default_env()
        .try_init()
        .is_ok()
}
