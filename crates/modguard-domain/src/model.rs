use modguard_types::{ModuleId, RepoPath};

/// The dependency category named by the first `:`-separated segment of a
/// project reference. Anything outside the three known categories is
/// `Other` and is always a violation when evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepCategory {
    Platform,
    Features,
    Native,
    Other,
}

/// A captured `project(":<path>")` reference, verbatim.
///
/// References are opaque at capture time; classification happens at
/// evaluation. `platform:core` splits into category `Platform` and target
/// name `core`. A reference with no `:` has category `Other`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectRef(String);

impl ProjectRef {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn category(&self) -> DepCategory {
        match self.0.split_once(':') {
            Some(("platform", _)) => DepCategory::Platform,
            Some(("features", _)) => DepCategory::Features,
            Some(("native", _)) => DepCategory::Native,
            _ => DepCategory::Other,
        }
    }

    /// The second `:`-separated segment, e.g. `core` in `platform:core`.
    pub fn target_name(&self) -> Option<&str> {
        self.0.split(':').nth(1)
    }
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One discovered module directory with its declared dependencies.
#[derive(Clone, Debug)]
pub struct ModuleDecl {
    /// Module directory, relative to the project root.
    pub path: RepoPath,
    /// `None` means the path did not resolve to a known module shape;
    /// the engine skips such modules entirely.
    pub id: Option<ModuleId>,
    /// Declared references in order of appearance, duplicates included.
    pub dependencies: Vec<ProjectRef>,
}

/// All modules in scope for one check run.
#[derive(Clone, Debug, Default)]
pub struct ProjectModel {
    pub repo_root: RepoPath,
    pub modules: Vec<ModuleDecl>,
}
