use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Expected catalog conditions are logged and the session goes on;
/// anything else stops it.
pub fn recoverable<T>(
    result: error_stack::Result<T, KernelError>,
) -> error_stack::Result<Option<T>, KernelError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(report) => match report.current_context() {
            KernelError::AlreadyExists
            | KernelError::NotFound
            | KernelError::BookAlreadyLent
            | KernelError::BookNotFound => {
                tracing::warn!("{report:?}");
                Ok(None)
            }
            KernelError::Internal => Err(report),
        },
    }
}
