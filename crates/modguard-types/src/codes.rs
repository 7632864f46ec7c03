//! Stable identifiers for violation codes.
//!
//! `code` is a short snake_case discriminator attached to every violation.

pub const CODE_DISALLOWED_PLATFORM_DEP: &str = "disallowed_platform_dep";
pub const CODE_DISALLOWED_FEATURE_DEP: &str = "disallowed_feature_dep";
pub const CODE_UNKNOWN_DEP_TYPE: &str = "unknown_dep_type";
