//! Field validation for resume submissions.
//!
//! Bounds live in one rule table per field; `validate_submission` evaluates the
//! table uniformly so create and update share exactly the same contract.

use serde::Deserialize;

use crate::errors::AppError;

/// Inclusive length (or cardinality) bounds for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub label: &'static str,
    pub min: usize,
    pub max: usize,
}

impl FieldRule {
    const fn new(label: &'static str, min: usize, max: usize) -> Self {
        FieldRule { label, min, max }
    }
}

pub const TITLE: FieldRule = FieldRule::new("Title", 3, 100);
pub const SUMMARY: FieldRule = FieldRule::new("Summary", 10, 1000);
pub const HEADLINE: FieldRule = FieldRule::new("Headline", 3, 200);
pub const SKILLS: FieldRule = FieldRule::new("Skills", 1, 20);
pub const EXPERIENCE: FieldRule = FieldRule::new("Experience", 10, 5000);
pub const EDUCATION: FieldRule = FieldRule::new("Education", 10, 2000);
pub const INDUSTRY: FieldRule = FieldRule::new("Industry", 2, 100);
pub const AVAILABILITY: FieldRule = FieldRule::new("Availability", 2, 50);
pub const COMPANY: FieldRule = FieldRule::new("Company", 2, 100);
pub const ACHIEVEMENTS: FieldRule = FieldRule::new("Achievements", 0, 1000);
pub const PORTFOLIO: FieldRule = FieldRule::new("Portfolio", 0, 255);

/// Raw request body for create and update. Every key is optional at the
/// wire level; presence of the required ones is checked by `validate_submission`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeSubmission {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub headline: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub industry: Option<String>,
    pub availability: Option<String>,
    pub company: Option<String>,
    pub achievements: Option<String>,
    pub portfolio: Option<String>,
}

/// A submission that passed validation. Strings are trimmed; absent optional
/// fields are `None`, never empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFields {
    pub title: String,
    pub summary: String,
    pub headline: Option<String>,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub industry: Option<String>,
    pub availability: Option<String>,
    pub company: Option<String>,
    pub achievements: Option<String>,
    pub portfolio: Option<String>,
}

/// Returns the trimmed value if its character count is within `[min, max]`.
pub fn validate_string(value: &str, label: &str, min: usize, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    reject_nul(trimmed, label)?;
    let len = trimmed.chars().count();
    if len < min {
        return Err(AppError::Validation(format!(
            "{label} must be at least {min} characters long"
        )));
    }
    if len > max {
        return Err(AppError::Validation(format!(
            "{label} must be at most {max} characters long"
        )));
    }
    Ok(trimmed.to_string())
}

/// PostgreSQL text columns cannot store U+0000.
fn reject_nul(value: &str, label: &str) -> Result<(), AppError> {
    if value.contains('\0') {
        return Err(AppError::Validation(format!(
            "{label} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// Returns the list unchanged if its element count is within `[min, max]`.
pub fn validate_array<T>(values: Vec<T>, label: &str, min: usize, max: usize) -> Result<Vec<T>, AppError> {
    if values.len() < min {
        return Err(AppError::Validation(format!(
            "{label} must contain at least {min} item(s)"
        )));
    }
    if values.len() > max {
        return Err(AppError::Validation(format!(
            "{label} must contain at most {max} item(s)"
        )));
    }
    Ok(values)
}

fn required(value: &str, rule: FieldRule) -> Result<String, AppError> {
    validate_string(value, rule.label, rule.min, rule.max)
}

fn optional(value: Option<&str>, rule: FieldRule) -> Result<Option<String>, AppError> {
    match value {
        None | Some("") => Ok(None),
        Some(v) => validate_string(v, rule.label, rule.min, rule.max)
            .map(|trimmed| Some(trimmed).filter(|t| !t.is_empty())),
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Validates a full submission. All five required fields must be present on
/// every call; there is no partial-update mode.
pub fn validate_submission(submission: ResumeSubmission) -> Result<ResumeFields, AppError> {
    let (Some(title), Some(summary), Some(skills), Some(experience), Some(education)) = (
        present(&submission.title),
        present(&submission.summary),
        submission.skills.as_ref(),
        present(&submission.experience),
        present(&submission.education),
    ) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    for skill in skills {
        reject_nul(skill, SKILLS.label)?;
    }

    Ok(ResumeFields {
        title: required(title, TITLE)?,
        summary: required(summary, SUMMARY)?,
        headline: optional(submission.headline.as_deref(), HEADLINE)?,
        skills: validate_array(skills.clone(), SKILLS.label, SKILLS.min, SKILLS.max)?,
        experience: required(experience, EXPERIENCE)?,
        education: required(education, EDUCATION)?,
        industry: optional(submission.industry.as_deref(), INDUSTRY)?,
        availability: optional(submission.availability.as_deref(), AVAILABILITY)?,
        company: optional(submission.company.as_deref(), COMPANY)?,
        achievements: optional(submission.achievements.as_deref(), ACHIEVEMENTS)?,
        portfolio: optional(submission.portfolio.as_deref(), PORTFOLIO)?,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn valid_submission() -> ResumeSubmission {
        ResumeSubmission {
            title: Some("Backend Engineer".to_string()),
            summary: Some("Ten years building systems".to_string()),
            skills: Some(vec!["Go".to_string(), "SQL".to_string()]),
            experience: Some("Built payment pipelines at scale".to_string()),
            education: Some("BSc Computer Science".to_string()),
            ..Default::default()
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_string_trims_whitespace() {
        assert_eq!(validate_string("  hello  ", "X", 3, 10).unwrap(), "hello");
    }

    #[test]
    fn test_string_bounds_are_inclusive() {
        assert!(validate_string("abc", "Title", 3, 5).is_ok());
        assert!(validate_string("abcde", "Title", 3, 5).is_ok());
        assert!(validate_string("ab", "Title", 3, 5).is_err());
        assert!(validate_string("abcdef", "Title", 3, 5).is_err());
    }

    #[test]
    fn test_string_error_names_field_and_bound() {
        let msg = message(validate_string("ab", "Title", 3, 100).unwrap_err());
        assert_eq!(msg, "Title must be at least 3 characters long");
        let msg = message(validate_string(&"a".repeat(101), "Title", 3, 100).unwrap_err());
        assert_eq!(msg, "Title must be at most 100 characters long");
    }

    #[test]
    fn test_string_counts_characters_not_bytes() {
        // 3 characters, 9 bytes
        assert!(validate_string("日本語", "Title", 3, 3).is_ok());
    }

    #[test]
    fn test_array_bounds() {
        assert!(validate_array(vec!["a"; 1], "Skills", 1, 20).is_ok());
        assert!(validate_array(vec!["a"; 20], "Skills", 1, 20).is_ok());
        assert!(validate_array(vec!["a"; 21], "Skills", 1, 20).is_err());
        let msg = message(validate_array(Vec::<String>::new(), "Skills", 1, 20).unwrap_err());
        assert!(msg.contains("Skills"));
    }

    #[test]
    fn test_array_returned_unchanged() {
        let skills = vec![" Go ".to_string(), "SQL".to_string()];
        assert_eq!(validate_array(skills.clone(), "Skills", 1, 20).unwrap(), skills);
    }

    #[test]
    fn test_valid_submission_passes() {
        let fields = validate_submission(valid_submission()).unwrap();
        assert_eq!(fields.title, "Backend Engineer");
        assert_eq!(fields.skills, vec!["Go", "SQL"]);
        assert_eq!(fields.headline, None);
    }

    #[test]
    fn test_missing_required_field() {
        let mut s = valid_submission();
        s.education = None;
        assert_eq!(
            message(validate_submission(s).unwrap_err()),
            "Missing required fields"
        );
    }

    #[test]
    fn test_empty_required_string_counts_as_missing() {
        let mut s = valid_submission();
        s.title = Some(String::new());
        assert_eq!(
            message(validate_submission(s).unwrap_err()),
            "Missing required fields"
        );
    }

    #[test]
    fn test_empty_skills_list_fails_bound_not_presence() {
        let mut s = valid_submission();
        s.skills = Some(vec![]);
        let msg = message(validate_submission(s).unwrap_err());
        assert!(msg.starts_with("Skills"));
    }

    #[test]
    fn test_empty_optional_resolves_to_none() {
        let mut s = valid_submission();
        s.company = Some(String::new());
        s.achievements = Some(String::new());
        let fields = validate_submission(s).unwrap();
        assert_eq!(fields.company, None);
        assert_eq!(fields.achievements, None);
    }

    #[test]
    fn test_whitespace_only_optional_resolves_to_none() {
        let mut s = valid_submission();
        s.achievements = Some("   ".to_string());
        s.portfolio = Some("  ".to_string());
        let fields = validate_submission(s).unwrap();
        assert_eq!(fields.achievements, None);
        assert_eq!(fields.portfolio, None);
    }

    #[test]
    fn test_whitespace_only_optional_with_minimum_still_fails() {
        let mut s = valid_submission();
        s.headline = Some("   ".to_string());
        let msg = message(validate_submission(s).unwrap_err());
        assert_eq!(msg, "Headline must be at least 3 characters long");
    }

    #[test]
    fn test_nul_character_is_rejected() {
        let msg = message(validate_string("Backend\0Engineer", "Title", 3, 100).unwrap_err());
        assert_eq!(msg, "Title must not contain NUL characters");

        let mut s = valid_submission();
        s.portfolio = Some("https://x.dev/\0".to_string());
        let msg = message(validate_submission(s).unwrap_err());
        assert!(msg.starts_with("Portfolio"));
    }

    #[test]
    fn test_nul_character_in_skill_is_rejected() {
        let mut s = valid_submission();
        s.skills = Some(vec!["Go".to_string(), "S\0QL".to_string()]);
        let msg = message(validate_submission(s).unwrap_err());
        assert_eq!(msg, "Skills must not contain NUL characters");
    }

    #[test]
    fn test_optional_field_is_validated_when_present() {
        let mut s = valid_submission();
        s.availability = Some("x".to_string());
        let msg = message(validate_submission(s).unwrap_err());
        assert_eq!(msg, "Availability must be at least 2 characters long");
    }

    #[test]
    fn test_whitespace_only_required_field_fails_bound() {
        let mut s = valid_submission();
        s.summary = Some("          ".to_string());
        let msg = message(validate_submission(s).unwrap_err());
        assert!(msg.starts_with("Summary"));
    }

    #[test]
    fn test_every_rule_boundary() {
        let rules = [
            TITLE,
            SUMMARY,
            HEADLINE,
            EXPERIENCE,
            EDUCATION,
            INDUSTRY,
            AVAILABILITY,
            COMPANY,
            ACHIEVEMENTS,
            PORTFOLIO,
        ];
        for rule in rules {
            let at_max = "x".repeat(rule.max);
            let over_max = "x".repeat(rule.max + 1);
            assert!(validate_string(&at_max, rule.label, rule.min, rule.max).is_ok());
            assert!(validate_string(&over_max, rule.label, rule.min, rule.max).is_err());
            if rule.min > 0 {
                let at_min = "x".repeat(rule.min);
                let under_min = "x".repeat(rule.min - 1);
                assert!(validate_string(&at_min, rule.label, rule.min, rule.max).is_ok());
                assert!(validate_string(&under_min, rule.label, rule.min, rule.max).is_err());
            }
        }
    }
}
