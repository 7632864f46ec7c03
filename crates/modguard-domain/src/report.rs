use modguard_types::{ModguardData, Verdict, Violation};

/// Pure evaluation result for one run, before any envelope or rendering.
#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub data: ModguardData,
}
