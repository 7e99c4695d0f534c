//! Application lifecycle events shared by every command.

use tracing::{error, info, warn};

use crate::errors::RgSweepError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an error with its code; user errors are logged as warnings.
pub fn log_app_error<E: RgSweepError>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error,
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error,
            user_error = false
        );
    }
}
