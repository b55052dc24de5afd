//! Logger set-up for the demo binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence when set. Otherwise slip events are logged at
/// info level, or at debug level with `verbose`, while other crates stay at
/// warn.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let default_filter = format!("warn,stumble={level}");
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder.format_timestamp(None).format_target(verbose);

    // A logger may already be installed when tests call this repeatedly.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn init_can_run_twice() {
        init(false);
        init(true);
    }
}
