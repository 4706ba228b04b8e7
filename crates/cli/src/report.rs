//! Reporting fatal errors at the end of a command

use crate::output::Status;
use pwa_core::error::{exit_codes, Error};

/// Print `err` with its context and suggestion, and return the process
/// exit code it maps to
pub fn report_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(error) => {
            tracing::debug!(code = %error.code, category = error.code.category(), "Fatal error");
            Status::error(&format!("{} ({})", error.message, error.code));
            if let Some(context) = &error.context {
                Status::hint(context);
            }
            if let Some(suggestion) = &error.suggestion {
                Status::hint(suggestion);
            }
            error.exit_code()
        }
        None => {
            Status::error(&format!("{err:#}"));
            exit_codes::FAILURE
        }
    }
}
