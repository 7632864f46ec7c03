//! Stable DTOs and IDs used across the modguard workspace.
//!
//! This crate is intentionally boring:
//! - module identifiers derived from the build tree layout
//! - data types for the emitted report
//! - stable string codes for violations
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod codes;
pub mod module;
pub mod path;
pub mod report;

pub use module::ModuleId;
pub use path::RepoPath;
pub use report::{ModguardData, ReportEnvelope, ToolMeta, Verdict, Violation, SCHEMA_REPORT_V1};
