use anyhow::Context;
use camino::Utf8Path;
use modguard_domain::model::ProjectRef;
use regex::Regex;
use std::sync::LazyLock;

/// Matches Gradle inter-module declarations like `project(":platform:core")`.
/// The captured path is everything between `":` and the closing quote.
static PROJECT_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"project\(":([^"]+)"\)"#).expect("project reference pattern is valid")
});

/// Extract declared project references from a module's build declaration.
///
/// A missing file is not an error: the module simply declares nothing.
/// Any other read failure indicates a broken build environment and
/// propagates. No validation happens here; text that does not match the
/// reference pattern is not captured.
pub fn extract_project_refs(build_file: &Utf8Path) -> anyhow::Result<Vec<ProjectRef>> {
    let text = match std::fs::read_to_string(build_file) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err).with_context(|| format!("read {build_file}")),
    };
    Ok(extract_from_str(&text))
}

/// Capture every reference in order of appearance, duplicates included.
pub fn extract_from_str(text: &str) -> Vec<ProjectRef> {
    PROJECT_REF_RE
        .captures_iter(text)
        .map(|caps| ProjectRef::new(&caps[1]))
        .collect()
}
