use crate::{ModuleId, RepoPath};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for modguard reports.
pub const SCHEMA_REPORT_V1: &str = "modguard.report.v1";

/// One disallowed dependency edge: the offending module, the raw
/// `project(":...")` reference, a stable code, and a human-readable reason.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub module: ModuleId,
    /// The dependency reference exactly as captured, e.g. `platform:state`.
    pub dependency: String,
    pub code: String,
    pub reason: String,
    /// Build declaration the reference was captured from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_in: Option<RepoPath>,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.module, self.dependency, self.reason)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Run summary counters carried in the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModguardData {
    pub modules_checked: u32,
    pub dependencies_scanned: u32,
    pub violations_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The emitted JSON artifact for one check run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub data: ModguardData,
}
