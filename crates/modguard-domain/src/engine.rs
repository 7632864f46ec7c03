use crate::model::{DepCategory, ProjectModel, ProjectRef};
use crate::policy::PolicyTable;
use crate::report::DomainReport;
use modguard_types::{codes, ModguardData, ModuleId, RepoPath, Verdict, Violation};

/// Evaluate every module in the model against the policy table.
///
/// All modules are counted as checked, including unresolvable ones; only
/// resolvable modules with a policy entry contribute violations. The run
/// never stops early.
pub fn evaluate(model: &ProjectModel, table: &PolicyTable) -> DomainReport {
    let mut violations: Vec<Violation> = Vec::new();
    let mut dependencies_scanned = 0u32;

    for module in &model.modules {
        dependencies_scanned += module.dependencies.len() as u32;
        let Some(id) = &module.id else { continue };
        let declared_in = module.path.join("build.gradle.kts");
        violations.extend(evaluate_module(
            id,
            &module.dependencies,
            Some(&declared_in),
            table,
        ));
    }

    let verdict = if violations.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let data = ModguardData {
        modules_checked: model.modules.len() as u32,
        dependencies_scanned,
        violations_total: violations.len() as u32,
    };

    DomainReport {
        verdict,
        violations,
        data,
    }
}

/// Evaluate one module's declared references against the policy table.
///
/// Pure function: same inputs, same output. Violations are produced in
/// declaration order and never deduplicated, so a repeated offending
/// reference shows up repeatedly.
pub fn evaluate_module(
    id: &ModuleId,
    dependencies: &[ProjectRef],
    declared_in: Option<&RepoPath>,
    table: &PolicyTable,
) -> Vec<Violation> {
    // Unknown modules are not violations; there is simply nothing to check.
    let Some(allowed) = table.allowed_for(id) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for dep in dependencies {
        let violation = |code: &str, reason: String| Violation {
            module: id.clone(),
            dependency: dep.as_str().to_string(),
            code: code.to_string(),
            reason,
            declared_in: declared_in.cloned(),
        };

        match dep.category() {
            DepCategory::Platform => {
                let name = dep.target_name().unwrap_or_default();
                if !allowed.platforms.contains(name) {
                    out.push(violation(
                        codes::CODE_DISALLOWED_PLATFORM_DEP,
                        format!(
                            "not allowed: platform dependencies must be in {}",
                            allowed.platforms_display()
                        ),
                    ));
                }
            }
            DepCategory::Features => {
                let name = dep.target_name().unwrap_or_default();
                if !allowed.features.contains(name) {
                    out.push(violation(
                        codes::CODE_DISALLOWED_FEATURE_DEP,
                        "not allowed: features cannot depend on other features".to_string(),
                    ));
                }
            }
            // Native targets are categorically trusted; the named target is
            // not verified to exist.
            DepCategory::Native => {}
            DepCategory::Other => {
                out.push(violation(
                    codes::CODE_UNKNOWN_DEP_TYPE,
                    "unknown dependency type".to_string(),
                ));
            }
        }
    }
    out
}
