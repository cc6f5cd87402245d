//! Registers compile and reference staging tasks with the host graph.

use std::fs;
use std::path::{Path, PathBuf};

use crate::command::CompileCommand;
use crate::error::BuildError;
use crate::graph::{TaskAction, TaskGraph, TaskHandle};
use crate::spec::CompileSpec;

/// Register the tasks for one compile spec, returning the main task handle.
///
/// The spec is moved in and frozen here: the main action closes over it by
/// value, so nothing observed at execution time can differ from what was
/// configured. One file task is registered under the output path with the
/// source files as prerequisites; references are compile flags, not
/// prerequisites, so changing a reference alone never triggers a recompile.
/// Each staged reference gets its own copy task, attached to the main task as
/// an ordering-only prerequisite.
pub fn register<G: TaskGraph>(graph: &mut G, spec: CompileSpec) -> G::Handle {
    let staged = stage_references(graph, &spec);

    let name = spec.output().to_path_buf();
    let prerequisites = spec.source_files().to_vec();
    let mut main = graph.define_file_task(&name, prerequisites, compile_action(spec));
    if !staged.is_empty() {
        main.enhance(staged);
    }
    main
}

fn compile_action(spec: CompileSpec) -> TaskAction {
    Box::new(move |env| {
        let command = CompileCommand::new(&spec, env.is_windows_host());
        let command_line = command.to_string();
        debug!(
            "compiling {}: `{}`",
            spec.output().display(),
            command_line
        );
        if env.execute(&command_line) {
            Ok(())
        } else {
            Err(BuildError::CompilerFailed { command_line })
        }
    })
}

/// Register one copy task per reference whose effective policy asks for
/// staging. Returns the destination paths, to be enhanced onto the main task.
fn stage_references<G: TaskGraph>(graph: &mut G, spec: &CompileSpec) -> Vec<PathBuf> {
    let output_dir = spec.output().parent().unwrap_or_else(|| Path::new(""));

    let mut staged = vec![];
    for reference in spec.references() {
        if !reference.copies_local(spec.copy_references()) {
            continue;
        }
        let file_name = match reference.path().file_name() {
            Some(name) => name,
            None => continue,
        };
        let destination = output_dir.join(file_name);
        // self-copy is a no-op, not an error
        if destination == reference.path() {
            continue;
        }

        let source = reference.path().to_path_buf();
        graph.define_file_task(&destination, vec![source.clone()], copy_action(source, destination.clone()));
        staged.push(destination);
    }
    staged
}

fn copy_action(source: PathBuf, destination: PathBuf) -> TaskAction {
    Box::new(move |_env| {
        trace!(
            "staging reference {} -> {}",
            source.display(),
            destination.display()
        );
        fs::copy(&source, &destination)?;
        Ok(())
    })
}
