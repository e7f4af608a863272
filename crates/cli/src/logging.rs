use std::io::Write;

use log::LevelFilter;

/// Maps `-v` occurrences onto a level; `RUST_LOG` still wins when set.
pub const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. Calling it twice is a no-op.
pub fn init(verbose: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] [{}] {}", record.level(), record.target(), record.args()))
        .try_init();

    if result.is_ok() {
        log::debug!("logger initialised at {}", level_for(verbose));
    }
}
