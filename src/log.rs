//! Internal structured-log view of an [`Error`].
//!
//! Unlike the [`Dto`](crate::Dto), the log view carries every entry, including
//! stack traces, reverse traces and restricted scopes. It must only be handed
//! to the process's own log sink.
//!
//! With the `tracing` feature, [`Error::trace`] emits the view as an
//! `ERROR`-level event.

use serde_json::{json, Map, Value};

use crate::error::Error;

impl Error {
    /// Every entry as `(key, value)` pairs, restricted ones included.
    pub fn log_entries(&self) -> Map<String, Value> {
        self.entries().log_values()
    }

    /// Full structured view for an internal logger.
    pub fn log_value(&self) -> Value {
        json!({
            "message": self.message(),
            "error": self.error_chain(),
            "code": self.kind().code(),
            "kind": self.kind().hierarchy(),
            "status": self.status_code(),
            "entries": self.log_entries(),
        })
    }

    /// Emits the structured view through `tracing`.
    #[cfg(feature = "tracing")]
    pub fn trace(&self) {
        let entries = Value::Object(self.log_entries());
        tracing::error!(
            kind = %self.kind().hierarchy(),
            code = self.kind().code(),
            status = self.status_code(),
            entries = %entries,
            "{}",
            self.error_chain()
        );
    }
}

/// Emits `err` through `tracing` when it is an `Err`, passing the result on.
#[cfg(feature = "tracing")]
pub fn trace_err<T>(result: crate::Result<T>) -> crate::Result<T> {
    if let Err(err) = &result {
        err.trace();
    }
    result
}
