use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use modguard_types::RepoPath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Discover module directories for the project rooted at `repo_root`.
///
/// Behavior:
/// - `app/` is a module directory itself.
/// - Every direct subdirectory of `platform/` and `features/` is a module.
/// - A missing root is tolerated; its modules are simply absent.
///
/// Results are repo-relative, deterministic: `app`, then `platform/*`, then
/// `features/*`, sorted within each root.
pub fn discover_modules(repo_root: &Utf8Path) -> anyhow::Result<Vec<RepoPath>> {
    let mut out: Vec<RepoPath> = Vec::new();

    if repo_root.join("app").is_dir() {
        out.push(RepoPath::new("app"));
    }

    for root in ["platform", "features"] {
        let root_dir = repo_root.join(root);
        if !root_dir.is_dir() {
            continue;
        }

        let mut modules: Vec<RepoPath> = Vec::new();
        for entry in WalkDir::new(&root_dir).min_depth(1).max_depth(1) {
            let entry = entry.with_context(|| format!("enumerate {root_dir}"))?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
                continue;
            };
            let rel = abs
                .strip_prefix(repo_root)
                .unwrap_or(&abs)
                .as_str()
                .replace('\\', "/");
            modules.push(RepoPath::new(rel));
        }
        modules.sort();
        out.extend(modules);
    }

    Ok(out)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
