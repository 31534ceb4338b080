use std::env::VarError;

use error_stack::ResultExt;
use kernel::KernelError;

use crate::error::ConvertError;

pub mod clock;
pub mod config;
pub mod database;
pub mod error;

/// Reads `key` from the process environment (or `.env`); `None` when unset.
pub(crate) fn env(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        result => result
            .map(Some)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read environment variable {key}")),
    }
}
