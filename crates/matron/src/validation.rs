//! Advisory checks on assessment completeness. Issues never block scoring or
//! rule evaluation.

use crate::assessment::{Assessment, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Client ID is required")]
    MissingClientId,
    #[error("Assessment date is required")]
    MissingAssessmentDate,
}

pub fn validate_assessment(assessment: &Assessment) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if assessment.client_id.is_empty() {
        issues.push(ValidationIssue::MissingClientId);
    }
    if assessment.assessment_date.is_none() {
        issues.push(ValidationIssue::MissingAssessmentDate);
    }

    issues
}

/// True for whole numbers on the 0-5 scale.
pub fn validate_score(score: f64) -> bool {
    Score::try_from(score).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::sample_assessment;

    #[test]
    fn sample_assessment_is_complete() {
        let assessment = sample_assessment().expect("sample parses");
        assert!(validate_assessment(&assessment).is_empty());
    }

    #[test]
    fn reports_missing_identity_fields_in_order() {
        let mut assessment = sample_assessment().expect("sample parses");
        assessment.client_id.clear();
        assessment.assessment_date = None;

        let messages: Vec<String> = validate_assessment(&assessment)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            messages,
            vec!["Client ID is required", "Assessment date is required"]
        );
    }

    #[test]
    fn scores_must_be_whole_and_on_scale() {
        assert!(validate_score(0.0));
        assert!(validate_score(5.0));
        assert!(!validate_score(2.5));
        assert!(!validate_score(6.0));
        assert!(!validate_score(-1.0));
        assert!(!validate_score(f64::NAN));
    }
}
