//! The compile spec helps with defining F# compilation units

use std::path::{Path, PathBuf};

use strum_macros::{Display, EnumString};

use crate::error::{BuildError, BuildResult};

/// The kind of artifact the compiler should produce.
///
/// The string form of each kind is the value passed to the compiler's
/// `--target:` flag. Parsing is case-insensitive; anything outside these four
/// kinds is rejected.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TargetKind {
    /// A console executable
    #[default]
    #[strum(serialize = "exe")]
    Executable,
    /// A windowed executable
    #[strum(serialize = "winexe")]
    WindowsExecutable,
    /// A library assembly
    #[strum(serialize = "library")]
    Library,
    /// A module that can be added to another assembly
    #[strum(serialize = "module")]
    Module,
}

/// An external library artifact the compiled unit links against.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Reference {
    path: PathBuf,
    copy_local: Option<bool>,
}

impl Reference {
    /// Create a reference to a library artifact at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            copy_local: None,
        }
    }

    /// Override whether this reference is staged next to the build output,
    /// regardless of the spec-level [`copy_references`](CompileSpec::copy_references) policy.
    pub fn with_copy_local(mut self, copy_local: bool) -> Self {
        self.copy_local = Some(copy_local);
        self
    }

    /// The path of the referenced artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this reference should be copied next to the output, falling
    /// back to the spec-level policy when no per-reference override was set.
    pub fn copies_local(&self, default: bool) -> bool {
        self.copy_local.unwrap_or(default)
    }
}

impl From<&Path> for Reference {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for Reference {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for Reference {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// The compile spec describes one F# compilation unit.
///
/// A spec is created per task declaration, configured once through the
/// closure passed to [`fsharp`](crate::fsharp), then moved into task
/// registration. Once registered it is frozen: the task action closes over
/// the spec by value, so later configuration is impossible by construction.
#[derive(Debug, Clone)]
pub struct CompileSpec {
    target: TargetKind,
    output: PathBuf,
    source_files: Vec<PathBuf>,
    references: Vec<Reference>,
    copy_references: bool,
    resident: bool,
}

impl CompileSpec {
    /// Create a spec producing the given output artifact, with defaults
    /// applied: target [`Executable`](TargetKind::Executable), no sources, no
    /// references, `copy_references` off, `resident` on.
    pub fn new<P: AsRef<Path>>(output: P) -> Self {
        Self {
            target: TargetKind::default(),
            output: output.as_ref().to_path_buf(),
            source_files: vec![],
            references: vec![],
            copy_references: false,
            resident: true,
        }
    }

    /// The output artifact path. Doubles as the task's identifying name.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The kind of artifact to produce.
    pub fn target(&self) -> TargetKind {
        self.target
    }

    /// Set the target kind from its string form, compared case-insensitively.
    ///
    /// # Error
    /// Fails with [`BuildError::InvalidTarget`] for any value outside
    /// `exe`, `winexe`, `library` and `module`, immediately at assignment.
    pub fn set_target<S: AsRef<str>>(&mut self, target: S) -> BuildResult<&mut Self> {
        let value = target.as_ref();
        self.target = value.parse().map_err(|_| BuildError::InvalidTarget {
            value: value.to_string(),
        })?;
        Ok(self)
    }

    /// Set the target kind directly.
    pub fn target_kind(&mut self, target: TargetKind) -> &mut Self {
        self.target = target;
        self
    }

    /// The ordered source file list. Never nil; empty if never set.
    ///
    /// Order is preserved into the compiler argument vector.
    pub fn source_files(&self) -> &[PathBuf] {
        &self.source_files
    }

    /// Replace the source file list.
    pub fn set_source_files<I, P>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.source_files = sources
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        self
    }

    /// Add a single source file.
    pub fn source_file<P: AsRef<Path>>(&mut self, source: P) -> &mut Self {
        self.source_files.push(source.as_ref().to_path_buf());
        self
    }

    /// The ordered reference list. Never nil; empty if never set.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Replace the reference list.
    pub fn set_references<I, R>(&mut self, references: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference>,
    {
        self.references = references.into_iter().map(|r| r.into()).collect();
        self
    }

    /// Add a reference, using the spec-level copy policy.
    pub fn add_reference<R: Into<Reference>>(&mut self, reference: R) -> &mut Self {
        self.references.push(reference.into());
        self
    }

    /// Add a reference with an explicit per-reference copy override.
    pub fn add_reference_with<P: AsRef<Path>>(&mut self, path: P, copy_local: bool) -> &mut Self {
        self.references
            .push(Reference::new(path).with_copy_local(copy_local));
        self
    }

    /// Whether references are staged next to the output by default.
    pub fn copy_references(&self) -> bool {
        self.copy_references
    }

    /// Set the spec-level reference staging policy.
    pub fn set_copy_references(&mut self, copy_references: bool) -> &mut Self {
        self.copy_references = copy_references;
        self
    }

    /// Whether the compiler is asked to keep a resident process alive.
    pub fn resident(&self) -> bool {
        self.resident
    }

    /// Toggle the `--resident` compiler flag. On by default.
    pub fn set_resident(&mut self, resident: bool) -> &mut Self {
        self.resident = resident;
        self
    }
}
