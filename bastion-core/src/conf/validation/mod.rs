mod error;
mod validation_ctx;

pub use error::ListenerError;
pub use validation_ctx::{ListenerErrors, ListenerIssue, ValidationCtx};
