#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Task definitions for compiling F# source sets with `fsc`/`fsharpc`.
//!
//! A build script declares a compilation unit with [`fsharp`], configuring a
//! [`CompileSpec`] through a one-shot closure. The declaration registers one
//! file task with the host's task graph, keyed by the output path and
//! depending on the source files, plus one staging task per reference that
//! should be copied next to the output. Nothing executes at declaration time:
//! the host graph decides, by its own staleness check, whether the deferred
//! action runs, and only then is the compiler command line built and the
//! external process started.
//!
//! The host graph, process runner and platform query are consumed through the
//! traits in [`graph`]; [`OsEnvironment`] provides the process-backed
//! implementation of the execution-time half.
//!
//! ```no_run
//! use fsharp_tasks::{fsharp, BuildResult, TaskGraph};
//!
//! fn declare<G: TaskGraph>(graph: &mut G) -> BuildResult<G::Handle> {
//!     fsharp(graph, "p.exe", |spec| {
//!         spec.set_target("exe")?;
//!         spec.set_source_files(["s.fs"]);
//!         Ok(())
//!     })
//! }
//! ```

#[macro_use]
extern crate log;

pub mod command;
pub mod env;
pub mod error;
pub mod graph;
pub mod spec;
pub mod tasks;

use std::path::Path;

pub use crate::command::{CompileCommand, UNIX_COMPILER, WINDOWS_COMPILER};
pub use crate::env::OsEnvironment;
pub use crate::error::{BuildError, BuildResult};
pub use crate::graph::{BuildEnvironment, TaskAction, TaskGraph, TaskHandle};
pub use crate::spec::{CompileSpec, Reference, TargetKind};

/// Declare an F# compile task producing `output`.
///
/// The configuration closure runs synchronously with the spec, after defaults
/// are applied and before any task is registered; it is the sole
/// customization point. If it fails, nothing is registered.
///
/// Returns the handle of the main compile task.
pub fn fsharp<G, P, F>(graph: &mut G, output: P, configure: F) -> BuildResult<G::Handle>
where
    G: TaskGraph,
    P: AsRef<Path>,
    F: FnOnce(&mut CompileSpec) -> BuildResult,
{
    let mut spec = CompileSpec::new(output);
    configure(&mut spec)?;
    Ok(tasks::register(graph, spec))
}
