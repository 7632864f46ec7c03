//! Repository adapters: discover module directories and read build declarations.
//!
//! This crate is allowed to do filesystem IO. Policy evaluation stays in
//! `modguard-domain`; this crate only assembles the project model.

#![forbid(unsafe_code)]

mod discover;
mod extract;

use anyhow::Context;
use camino::Utf8Path;
use modguard_domain::identity::resolve_module_id;
use modguard_domain::model::{ModuleDecl, ProjectModel};
use modguard_types::RepoPath;

pub use discover::discover_modules;
pub use extract::{extract_from_str, extract_project_refs};

/// Build the in-memory project model used by the policy engine.
///
/// Every discovered module directory lands in the model, including ones
/// whose identity does not resolve; the engine decides what to skip. A
/// module without a `build.gradle.kts` contributes zero dependencies.
pub fn build_project_model(repo_root: &Utf8Path) -> anyhow::Result<ProjectModel> {
    let module_dirs = discover::discover_modules(repo_root).context("discover modules")?;

    let mut model = ProjectModel {
        repo_root: RepoPath::from(repo_root),
        modules: Vec::new(),
    };

    for path in module_dirs {
        let build_file = repo_root.join(path.as_str()).join("build.gradle.kts");
        let dependencies = extract::extract_project_refs(&build_file)
            .with_context(|| format!("extract dependencies of {path}"))?;
        model.modules.push(ModuleDecl {
            id: resolve_module_id(&path),
            path,
            dependencies,
        });
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use modguard_types::ModuleId;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn model_includes_every_discovered_module() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(
            &root.join("app/build.gradle.kts"),
            r#"dependencies { implementation(project(":platform:core")) }"#,
        );
        write_file(
            &root.join("platform/core/build.gradle.kts"),
            "dependencies { }",
        );
        // A feature the identity rules do not know about.
        std::fs::create_dir_all(root.join("features/search")).expect("create dir");

        let model = build_project_model(&root).expect("build model");
        assert_eq!(model.modules.len(), 3);

        let app = &model.modules[0];
        assert_eq!(app.id, Some(ModuleId::App));
        assert_eq!(app.dependencies.len(), 1);
        assert_eq!(app.dependencies[0].as_str(), "platform:core");

        let core = &model.modules[1];
        assert_eq!(core.id, Some(ModuleId::Platform("core".into())));
        assert!(core.dependencies.is_empty());

        let search = &model.modules[2];
        assert_eq!(search.id, None);
        assert!(search.dependencies.is_empty());
    }

    #[test]
    fn module_without_build_file_declares_nothing() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        std::fs::create_dir_all(root.join("platform/state")).expect("create dir");

        let model = build_project_model(&root).expect("build model");
        assert_eq!(model.modules.len(), 1);
        assert!(model.modules[0].dependencies.is_empty());
    }
}
