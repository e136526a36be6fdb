use std::cell::Cell;
use std::rc::Rc;

use crate::error::ClientError;

/// Shared flag marking an in-flight operation as abandoned.
///
/// Clones observe the same flag. Once cancelled a token stays cancelled;
/// start the next operation with a fresh one.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Errors with [`ClientError::Cancelled`] once the token was cancelled.
    pub fn check(&self) -> Result<(), ClientError> {
        if self.is_cancelled() {
            Err(ClientError::Cancelled)
        } else {
            Ok(())
        }
    }
}
