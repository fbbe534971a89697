//! Validation summary and quality score.
//!
//! Collapses an issue list into per-severity counts, an overall validity
//! flag, and a 0-100 quality score for badge display.
//!
//! # Scoring
//!
//! | Severity | Weight |
//! |----------|--------|
//! | Error | 15 |
//! | Warning | 5 |
//! | Info | 1 |
//!
//! `score = max(0, 100 - 15E - 5W - I)`. Warnings and infos lower the
//! score but never invalidate the schedule; `is_valid` tracks errors only.

use serde::{Deserialize, Serialize};

use crate::validation::{Severity, ValidationIssue};

const ERROR_WEIGHT: i64 = 15;
const WARNING_WEIGHT: i64 = 5;
const INFO_WEIGHT: i64 = 1;

/// Aggregated validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of error-severity issues.
    pub errors: usize,
    /// Number of warning-severity issues.
    pub warnings: usize,
    /// Number of info-severity issues.
    pub infos: usize,
    /// True iff there are zero errors.
    pub is_valid: bool,
    /// Quality score, 0-100.
    pub score: u8,
}

/// Summarizes an issue list into counts, validity, and a score.
pub fn summarize(issues: &[ValidationIssue]) -> ValidationSummary {
    let mut errors = 0usize;
    let mut warnings = 0usize;
    let mut infos = 0usize;
    for issue in issues {
        match issue.severity {
            Severity::Error => errors += 1,
            Severity::Warning => warnings += 1,
            Severity::Info => infos += 1,
        }
    }

    let penalty = errors as i64 * ERROR_WEIGHT
        + warnings as i64 * WARNING_WEIGHT
        + infos as i64 * INFO_WEIGHT;
    let score = (100 - penalty).max(0) as u8;

    ValidationSummary {
        errors,
        warnings,
        infos,
        is_valid: errors == 0,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::IssueKind;

    fn issue(kind: IssueKind) -> ValidationIssue {
        ValidationIssue {
            id: "issue-1".into(),
            severity: kind.severity(),
            kind,
            message: String::new(),
            affected: Vec::new(),
        }
    }

    fn issues(errors: usize, warnings: usize, infos: usize) -> Vec<ValidationIssue> {
        let mut out = Vec::new();
        out.extend((0..errors).map(|_| issue(IssueKind::TeacherConflict)));
        out.extend((0..warnings).map(|_| issue(IssueKind::HeavyLoad)));
        out.extend((0..infos).map(|_| issue(IssueKind::WeekendClass)));
        out
    }

    #[test]
    fn test_empty_is_perfect() {
        let s = summarize(&[]);
        assert_eq!(s.errors, 0);
        assert_eq!(s.warnings, 0);
        assert_eq!(s.infos, 0);
        assert!(s.is_valid);
        assert_eq!(s.score, 100);
    }

    #[test]
    fn test_counts() {
        let s = summarize(&issues(2, 3, 4));
        assert_eq!(s.errors, 2);
        assert_eq!(s.warnings, 3);
        assert_eq!(s.infos, 4);
    }

    #[test]
    fn test_score_formula() {
        assert_eq!(summarize(&issues(0, 0, 0)).score, 100);
        assert_eq!(summarize(&issues(1, 0, 0)).score, 85);
        assert_eq!(summarize(&issues(0, 1, 0)).score, 95);
        assert_eq!(summarize(&issues(0, 0, 1)).score, 99);
        assert_eq!(summarize(&issues(1, 2, 3)).score, 100 - 15 - 10 - 3);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        // 7 errors: 100 - 105 < 0 → 0.
        assert_eq!(summarize(&issues(7, 0, 0)).score, 0);
        assert_eq!(summarize(&issues(100, 100, 100)).score, 0);
    }

    #[test]
    fn test_validity_tracks_errors_only() {
        assert!(summarize(&issues(0, 5, 5)).is_valid);
        assert!(!summarize(&issues(1, 0, 0)).is_valid);
    }
}
