use log::LevelFilter;
use std::env;

pub const DEBUG_ENV: &str = "POWERLINE_PROMPT_DEBUG";

pub fn debug_enabled() -> bool {
    env::var(DEBUG_ENV).is_ok()
}

/// Route `log` output to stderr. Warnings only, unless debugging was asked
/// for; the prompt on stdout must stay clean.
pub fn init_logging(debug: bool) {
    let level = if debug || debug_enabled() {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
