use error_stack::ResultExt;
use serde::Serialize;

use kernel::KernelError;

pub use self::{book::*, loan::*, user::*};

mod book;
mod loan;
mod user;

pub(crate) fn to_json<T: Serialize>(value: &T) -> error_stack::Result<String, KernelError> {
    serde_json::to_string(value)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to format query result")
}
