//! Compliance report types
//!
//! A report is built incrementally, append-only, one entry per
//! independent heuristic. It is never merged across files.

use serde::{Deserialize, Serialize};

/// Outcome of a single compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// The heuristic passed.
    Pass,
    /// The heuristic found an ATS-relevant problem.
    Warn,
    /// The check could not run (environment fact, not a defect).
    Skip,
    /// Informational only.
    Info,
}

impl CheckStatus {
    pub fn tag(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Skip => "SKIP",
            CheckStatus::Info => "INFO",
        }
    }
}

/// One independent heuristic result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
}

impl CheckResult {
    pub fn new(status: CheckStatus, name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            detail: detail.into(),
        }
    }

    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(CheckStatus::Pass, name, detail)
    }

    pub fn warn(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warn, name, detail)
    }

    pub fn skip(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(CheckStatus::Skip, name, detail)
    }

    pub fn info(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(CheckStatus::Info, name, detail)
    }
}

/// Ordered check results for one artifact file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub file: String,
    pub results: Vec<CheckResult>,
}

impl ComplianceReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// A run is ATS ready iff no check reports WARN. SKIP and INFO
    /// never affect the verdict.
    pub fn ats_ready(&self) -> bool {
        !self
            .results
            .iter()
            .any(|r| r.status == CheckStatus::Warn)
    }

    pub fn passed(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    /// Checks that produced a verdict (PASS or WARN).
    pub fn checked(&self) -> usize {
        self.passed() + self.warnings()
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComplianceReport {
        let mut report = ComplianceReport::new("resume.docx");
        report.push(CheckResult::pass("Fonts", "ATS-safe: Calibri"));
        report.push(CheckResult::skip("Text extraction", "tool missing"));
        report.push(CheckResult::info("Hyperlinks", "None found"));
        report
    }

    #[test]
    fn skip_and_info_do_not_affect_verdict() {
        let report = sample();
        assert!(report.ats_ready());
        assert_eq!(report.checked(), 1);
    }

    #[test]
    fn any_warn_fails_the_verdict() {
        let mut report = sample();
        report.push(CheckResult::warn("Tables", "1 table(s) found"));
        assert!(!report.ats_ready());
        assert_eq!(report.warnings(), 1);
        assert_eq!(report.checked(), 2);
    }

    #[test]
    fn results_keep_insertion_order() {
        let report = sample();
        let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Fonts", "Text extraction", "Hyperlinks"]);
    }
}
