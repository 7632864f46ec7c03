//! Human-readable text output for a check run.

use camino::Utf8Path;
use modguard_types::{ReportEnvelope, Verdict};

pub fn render_text(repo_root: &Utf8Path, report: &ReportEnvelope) -> String {
    let mut out = String::new();

    out.push_str("Checking module dependencies...\n");
    out.push_str(&format!("Project root: {repo_root}\n\n"));
    out.push_str(&format!("Checked {} modules\n\n", report.data.modules_checked));

    match report.verdict {
        Verdict::Fail => {
            out.push_str("Dependency violations found:\n\n");
            for violation in &report.violations {
                out.push_str(&format!("  {violation}\n"));
            }
            out.push_str("\nFix these violations to maintain module isolation.\n");
        }
        Verdict::Pass => {
            out.push_str("All module dependencies are valid.\n\n");
            out.push_str("Module isolation rules:\n");
            out.push_str("  - Features never depend on other features\n");
            out.push_str("  - Features only depend on platform modules\n");
            out.push_str("  - Platform modules follow strict dependency rules\n");
        }
    }

    out
}
