//! The check use case: build the project model, evaluate policy, wrap the
//! result in a report envelope.

use anyhow::Context;
use camino::Utf8Path;
use modguard_domain::policy::PolicyTable;
use modguard_types::{ReportEnvelope, ToolMeta, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

pub fn run_check(repo_root: &Utf8Path) -> anyhow::Result<ReportEnvelope> {
    let started_at = OffsetDateTime::now_utc();

    let model = modguard_repo::build_project_model(repo_root).context("build project model")?;
    let table = PolicyTable::builtin();
    let domain = modguard_domain::evaluate(&model, &table);

    let finished_at = OffsetDateTime::now_utc();

    Ok(ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "modguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain.verdict,
        violations: domain.violations,
        data: domain.data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use modguard_types::Verdict;

    #[test]
    fn empty_project_passes_with_zero_modules() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");

        let report = run_check(&root).expect("run check");
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.modules_checked, 0);
        assert!(report.violations.is_empty());
    }
}
