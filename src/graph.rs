//! Host-side collaborators consumed by this plugin.
//!
//! The host build engine owns the task graph, its staleness algorithm and
//! process execution. This plugin is a pure client: everything it needs from
//! the host is modeled as a small injected interface, so command construction
//! can be tested without a real file-timestamp graph.

use std::path::{Path, PathBuf};

use crate::error::BuildResult;

/// The deferred work attached to a file task.
///
/// Actions receive the build environment at invocation time, so platform
/// queries reflect the environment at execution rather than at declaration.
pub type TaskAction = Box<dyn FnMut(&mut dyn BuildEnvironment) -> BuildResult + Send>;

/// Execution-time services provided by the host.
pub trait BuildEnvironment {
    /// Whether the host is a windows machine. Selects the compiler binary.
    fn is_windows_host(&self) -> bool;

    /// Run a command line synchronously, blocking until the process exits.
    ///
    /// Returns `true` on success. The caller fails the enclosing task on
    /// `false`.
    fn execute(&mut self, command_line: &str) -> bool;
}

/// The host task graph, keyed by output file path.
pub trait TaskGraph {
    /// The handle type returned for registered tasks.
    type Handle: TaskHandle;

    /// Register a file-producing task.
    ///
    /// `prerequisites` participate in the host's staleness check: the action
    /// runs only when the output at `name` is missing or older than a
    /// prerequisite. The host guarantees at-most-once execution per run.
    fn define_file_task(
        &mut self,
        name: &Path,
        prerequisites: Vec<PathBuf>,
        action: TaskAction,
    ) -> Self::Handle;
}

/// A handle to a task registered with the host graph.
pub trait TaskHandle {
    /// Append ordering-only prerequisites after definition.
    ///
    /// Enhanced prerequisites are invoked before this task's own action but
    /// are excluded from its staleness comparison: a change to one never
    /// forces this task to rebuild on its own.
    fn enhance(&mut self, prerequisites: Vec<PathBuf>);

    /// Evaluate freshness and conditionally run the action.
    fn invoke(&mut self, env: &mut dyn BuildEnvironment) -> BuildResult;
}
