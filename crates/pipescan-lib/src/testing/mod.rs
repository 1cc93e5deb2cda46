//! Shared helpers for unit tests
//!
//! Tests that touch process environment variables must hold [`env_lock`]
//! for their whole duration; the test harness runs tests on parallel threads.

use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serialize access to process environment variables
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Remove every variable that influences configuration loading
pub fn clean_test_env() {
    unsafe {
        std::env::remove_var("NO_COLOR");
        std::env::remove_var("FORCE_COLOR");
        std::env::remove_var("CLICOLOR");
        std::env::remove_var("CI");
        std::env::remove_var("PIPESCAN_HOST");
        std::env::remove_var("PIPESCAN_PORT");
        std::env::remove_var("PIPESCAN_BODY_LIMIT");
        std::env::remove_var("PIPESCAN_LOG_LEVEL");
        std::env::remove_var("PIPESCAN_LOG_FORMAT");
        std::env::remove_var("PIPESCAN_LOG_OUTPUT");
        std::env::remove_var("PIPESCAN_COLOR");
    }
}
