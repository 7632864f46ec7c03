use modguard_types::{ModuleId, RepoPath};

/// Resolve a module directory path to its [`ModuleId`].
///
/// The rules form an ordered decision list over the path's component set;
/// the first matching rule wins. A path containing both `app` and a later
/// match still resolves to `App`.
///
/// Returns `None` for paths that match no rule, and for a `platform`
/// component with nothing following it. Unresolvable modules are skipped by
/// the engine, never reported.
pub fn resolve_module_id(path: &RepoPath) -> Option<ModuleId> {
    let parts: Vec<&str> = path.components().collect();
    let has = |name: &str| parts.iter().any(|p| *p == name);

    if has("app") {
        return Some(ModuleId::App);
    }
    if has("features") && has("playback") {
        return Some(ModuleId::Feature("playback".to_string()));
    }
    if has("features") && has("library") {
        return Some(ModuleId::Feature("library".to_string()));
    }
    if has("platform") {
        let idx = parts.iter().position(|p| *p == "platform")?;
        let name = parts.get(idx + 1)?;
        return Some(ModuleId::Platform((*name).to_string()));
    }
    None
}
