//! Console error types

use super::admin::AdminError;
use thiserror::Error;

/// Failures inside a console command.
///
/// Every variant is recoverable: the dispatcher turns it into an
/// `Error: '<message>'` reply and the rest of the process is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConsoleError {
    /// The operator's line does not match what the prompt asked for
    #[error("Invalid input")]
    InvalidInput,

    /// The connection closed before the command finished reading
    #[error("end of input")]
    EndOfInput,

    /// An administrative operation failed
    #[error(transparent)]
    Admin(#[from] AdminError),
}
