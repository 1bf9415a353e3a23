//! Logging setup for binaries and tests
//!
//! The library only emits through the `log` facade. Nothing is printed unless
//! the host installs a logger, which is what [`init`] does for the demo and
//! the live-window test.

/// Install `env_logger`, honoring `RUST_LOG`, defaulting to `info`
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
