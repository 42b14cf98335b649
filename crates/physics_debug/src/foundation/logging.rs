//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize `env_logger`, using `default_filter` when `RUST_LOG` is unset
///
/// Later calls are ignored.
pub fn init_with_default(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}
