//! Compiler command construction

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::spec::CompileSpec;

/// The compiler binary used on windows hosts.
pub const WINDOWS_COMPILER: &str = "fsc";
/// The compiler binary used everywhere else.
pub const UNIX_COMPILER: &str = "fsharpc";

/// One compiler invocation, derived on demand from a frozen [`CompileSpec`].
///
/// A command has no persistent identity: it is built inside the deferred task
/// action, rendered to a command line, executed once and dropped. Building it
/// at execution time rather than registration time means the host platform
/// bit is read when the task actually runs.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CompileCommand {
    executable: &'static str,
    args: Vec<String>,
}

impl CompileCommand {
    /// Build the argument vector for a spec.
    ///
    /// Flag order is fixed for compatibility with the compiler toolchain:
    /// `--out:`, `--target:`, one `--reference:` per reference in declaration
    /// order, `--resident` when requested, then the source files in
    /// declaration order.
    pub fn new(spec: &CompileSpec, windows_host: bool) -> Self {
        let executable = if windows_host {
            WINDOWS_COMPILER
        } else {
            UNIX_COMPILER
        };

        let mut args = Vec::with_capacity(3 + spec.references().len() + spec.source_files().len());
        args.push(format!("--out:{}", spec.output().display()));
        args.push(format!("--target:{}", spec.target()));
        for reference in spec.references() {
            args.push(format!("--reference:{}", reference.path().display()));
        }
        if spec.resident() {
            args.push("--resident".to_string());
        }
        args.extend(spec.source_files().iter().map(|s| s.display().to_string()));

        Self { executable, args }
    }

    /// The compiler executable name.
    pub fn executable(&self) -> &str {
        self.executable
    }

    /// The ordered arguments, without the executable.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Display for CompileCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.executable, self.args.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::TargetKind;

    #[test]
    fn executable_follows_host_platform() {
        let spec = CompileSpec::new("p.exe");
        assert_eq!(CompileCommand::new(&spec, true).executable(), "fsc");
        assert_eq!(CompileCommand::new(&spec, false).executable(), "fsharpc");
    }

    #[test]
    fn output_path_is_verbatim() {
        let command = CompileCommand::new(&CompileSpec::new("f/p.exe"), false);
        assert_eq!(command.args()[0], "--out:f/p.exe");
    }

    #[test]
    fn references_keep_declaration_order() {
        let mut spec = CompileSpec::new("p.exe");
        spec.set_references(["ref1.dll", "ref2.dll"]);
        let command = CompileCommand::new(&spec, false);
        let references: Vec<_> = command
            .args()
            .iter()
            .filter(|a| a.starts_with("--reference:"))
            .collect();
        assert_eq!(references, ["--reference:ref1.dll", "--reference:ref2.dll"]);
    }

    #[test]
    fn resident_flag_present_by_default() {
        let spec = CompileSpec::new("p.exe");
        let command = CompileCommand::new(&spec, false);
        assert!(command.args().contains(&"--resident".to_string()));
    }

    #[test]
    fn resident_flag_absent_when_disabled() {
        let mut spec = CompileSpec::new("p.exe");
        spec.set_resident(false);
        let command = CompileCommand::new(&spec, false);
        assert!(!command.args().contains(&"--resident".to_string()));
    }

    #[test]
    fn renders_full_command_line() {
        let mut spec = CompileSpec::new("p.exe");
        spec.target_kind(TargetKind::Executable)
            .set_source_files(["s.fs"]);
        let command = CompileCommand::new(&spec, false);
        assert_eq!(
            command.to_string(),
            "fsharpc --out:p.exe --target:exe --resident s.fs"
        );
    }

    #[test]
    fn sources_follow_flags_in_declaration_order() {
        let mut spec = CompileSpec::new("p.exe");
        spec.set_source_files(["source1.fs", "source2.fs"])
            .set_resident(false);
        let command = CompileCommand::new(&spec, false);
        assert_eq!(
            command.to_string(),
            "fsharpc --out:p.exe --target:exe source1.fs source2.fs"
        );
    }

    #[test]
    fn target_flag_uses_string_form() {
        for (kind, flag) in [
            (TargetKind::Executable, "--target:exe"),
            (TargetKind::WindowsExecutable, "--target:winexe"),
            (TargetKind::Library, "--target:library"),
            (TargetKind::Module, "--target:module"),
        ] {
            let mut spec = CompileSpec::new("p.exe");
            spec.target_kind(kind);
            let command = CompileCommand::new(&spec, false);
            assert_eq!(command.args()[1], flag);
        }
    }
}
