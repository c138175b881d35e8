use crate::constants::{DEFAULT_FILTER, VERBOSE_FILTER};

/// Initialize the logger; `RUST_LOG` still takes precedence
pub fn init(verbose: bool) {
    let filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
