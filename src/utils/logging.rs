// Sat Oct 17 2026 - Alex

use env_logger::{Builder, Env};

/// Environment variable holding the log filter, e.g. `debug`.
pub const LOG_ENV: &str = "NODE_SIZE_DEBUGGER_LOG";

/// Logs to standard error at `warn` unless [`LOG_ENV`] says otherwise.
/// Calling it again is a no-op.
pub fn init_logger() {
    let env = Env::default().filter_or(LOG_ENV, "warn");
    let _ = Builder::from_env(env).format_timestamp(None).try_init();
}
