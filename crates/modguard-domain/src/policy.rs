use modguard_types::ModuleId;
use std::collections::{BTreeMap, BTreeSet};

/// What one module is allowed to depend on, split by dependency category.
///
/// `native:*` references are not listed here: they are categorically
/// trusted by the engine and never checked against a set.
#[derive(Clone, Debug, Default)]
pub struct AllowedDeps {
    pub platforms: BTreeSet<String>,
    pub features: BTreeSet<String>,
}

impl AllowedDeps {
    fn new(platforms: &[&str], features: &[&str]) -> Self {
        Self {
            platforms: platforms.iter().map(|s| s.to_string()).collect(),
            features: features.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Render the allowed platform set for violation messages, e.g. `[core, state]`.
    pub fn platforms_display(&self) -> String {
        let names: Vec<&str> = self.platforms.iter().map(|s| s.as_str()).collect();
        format!("[{}]", names.join(", "))
    }
}

/// The single source of truth for dependency validity.
///
/// Built once at startup, read-only thereafter. A module whose [`ModuleId`]
/// has no entry here is silently skipped by the engine.
#[derive(Clone, Debug)]
pub struct PolicyTable {
    entries: BTreeMap<ModuleId, AllowedDeps>,
}

impl PolicyTable {
    /// The builtin allow-list. Compiled into the tool, not configurable.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            ModuleId::App,
            AllowedDeps::new(
                &["core", "state", "services", "native-bridge"],
                &["playback", "library"],
            ),
        );
        entries.insert(
            ModuleId::Feature("playback".to_string()),
            AllowedDeps::new(&["core", "state", "services", "native-bridge"], &[]),
        );
        entries.insert(
            ModuleId::Feature("library".to_string()),
            AllowedDeps::new(&["core", "state"], &[]),
        );
        entries.insert(ModuleId::Platform("core".to_string()), AllowedDeps::new(&[], &[]));
        entries.insert(
            ModuleId::Platform("state".to_string()),
            AllowedDeps::new(&["core"], &[]),
        );
        entries.insert(
            ModuleId::Platform("services".to_string()),
            AllowedDeps::new(&["core"], &[]),
        );
        entries.insert(
            ModuleId::Platform("native-bridge".to_string()),
            AllowedDeps::new(&["core"], &[]),
        );
        Self { entries }
    }

    pub fn allowed_for(&self, id: &ModuleId) -> Option<&AllowedDeps> {
        self.entries.get(id)
    }
}
