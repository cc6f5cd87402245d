//! Build time errors

use std::io;

/// An error raised while declaring or running a compile task.
///
/// Every variant is fatal: errors propagate to the top-level build invocation
/// with no retry and no partial-artifact cleanup.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// An unsupported target kind was assigned to a [`CompileSpec`](crate::CompileSpec).
    ///
    /// Raised synchronously at assignment time, never deferred to execution.
    #[error("invalid target: {value}")]
    InvalidTarget {
        /// The rejected target value.
        value: String,
    },

    /// The external compiler process exited unsuccessfully.
    #[error("error executing command `{command_line}`")]
    CompilerFailed {
        /// The command line that was executed.
        command_line: String,
    },

    /// A filesystem operation failed while staging a reference.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The result type of task actions and spec configuration.
pub type BuildResult<T = ()> = Result<T, BuildError>;
