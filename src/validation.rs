// ABOUTME: Schema-based form validation engine
// Declarative per-field rules with cross-field checks, evaluated all-or-nothing

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref DATE_PATTERN: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid");
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid");
}

/// A single field-level validation failure, attached to the field that
/// should display it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Identifies one of the declared schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaId {
    PersonalDetails,
    PinSetup,
    ProfileEdit,
    PinChange,
    SavingsGoal,
}

/// A single rule applied to one field.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// String length must be at least N characters.
    MinLen(usize),
    /// String length must be exactly N characters.
    ExactLen(usize),
    /// Must match the YYYY-MM-DD pattern. Pattern only - no calendar check.
    DateFormat,
    /// Must look like an email address.
    Email,
    /// Must parse as a number greater than zero.
    Positive,
    /// Must equal the named sibling field. Cross-field rules only run when
    /// every field-level rule has passed, so a mismatch surfaces as exactly
    /// one error on the field carrying this rule.
    EqualsField(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct FieldRule {
    field: &'static str,
    rule: Rule,
    message: &'static str,
}

/// A candidate record: an ordered set of (field, value) pairs. Missing
/// fields read as empty strings.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(&'static str, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(f, _)| *f == name)
            .map_or("", |(_, v)| v.as_str())
    }
}

/// A declared set of field-level and cross-field rules.
#[derive(Debug, Clone)]
pub struct Schema {
    id: SchemaId,
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn for_id(id: SchemaId) -> Self {
        let rules = match id {
            SchemaId::PersonalDetails => vec![
                FieldRule {
                    field: "full_name",
                    rule: Rule::MinLen(2),
                    message: "Full name must be at least 2 characters.",
                },
                FieldRule {
                    field: "date_of_birth",
                    rule: Rule::DateFormat,
                    message: "Date of Birth must be in YYYY-MM-DD format.",
                },
            ],
            SchemaId::PinSetup => vec![
                FieldRule {
                    field: "pin",
                    rule: Rule::ExactLen(4),
                    message: "PIN must be 4 digits.",
                },
                FieldRule {
                    field: "confirm_pin",
                    rule: Rule::ExactLen(4),
                    message: "Confirm PIN must be 4 digits.",
                },
                FieldRule {
                    field: "confirm_pin",
                    rule: Rule::EqualsField("pin"),
                    message: "PINs don't match",
                },
            ],
            SchemaId::ProfileEdit => vec![
                FieldRule {
                    field: "username",
                    rule: Rule::MinLen(3),
                    message: "Username too short",
                },
                FieldRule {
                    field: "email",
                    rule: Rule::Email,
                    message: "Invalid email address",
                },
            ],
            SchemaId::PinChange => vec![
                FieldRule {
                    field: "current_pin",
                    rule: Rule::ExactLen(4),
                    message: "PIN must be 4 digits",
                },
                FieldRule {
                    field: "new_pin",
                    rule: Rule::ExactLen(4),
                    message: "PIN must be 4 digits",
                },
                FieldRule {
                    field: "confirm_new_pin",
                    rule: Rule::ExactLen(4),
                    message: "PIN must be 4 digits",
                },
                FieldRule {
                    field: "confirm_new_pin",
                    rule: Rule::EqualsField("new_pin"),
                    message: "New PINs don't match",
                },
            ],
            SchemaId::SavingsGoal => vec![
                FieldRule {
                    field: "goal_name",
                    rule: Rule::MinLen(3),
                    message: "Goal name is too short.",
                },
                FieldRule {
                    field: "target_amount",
                    rule: Rule::Positive,
                    message: "Target amount must be positive.",
                },
            ],
        };

        Self { id, rules }
    }

    pub fn id(&self) -> SchemaId {
        self.id
    }

    /// Validate a candidate record. Returns the full error set for the
    /// submission - partial acceptance is not supported.
    pub fn validate(&self, record: &Record) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for field_rule in &self.rules {
            if matches!(field_rule.rule, Rule::EqualsField(_)) {
                continue;
            }
            let value = record.get(field_rule.field);
            if !check(field_rule.rule, value, record) {
                errors.push(FieldError::new(field_rule.field, field_rule.message));
            }
        }

        // Cross-field rules behave like refinements: they only run once the
        // field-level pass is clean.
        if errors.is_empty() {
            for field_rule in &self.rules {
                if !matches!(field_rule.rule, Rule::EqualsField(_)) {
                    continue;
                }
                let value = record.get(field_rule.field);
                if !check(field_rule.rule, value, record) {
                    errors.push(FieldError::new(field_rule.field, field_rule.message));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Validate a candidate record against a named schema. Pure and synchronous.
pub fn validate(id: SchemaId, record: &Record) -> Result<(), Vec<FieldError>> {
    Schema::for_id(id).validate(record)
}

fn check(rule: Rule, value: &str, record: &Record) -> bool {
    match rule {
        Rule::MinLen(n) => value.chars().count() >= n,
        Rule::ExactLen(n) => value.chars().count() == n,
        Rule::DateFormat => DATE_PATTERN.is_match(value),
        Rule::Email => EMAIL_PATTERN.is_match(value),
        Rule::Positive => value.trim().parse::<f64>().map_or(false, |v| v > 0.0),
        Rule::EqualsField(other) => value == record.get(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn personal(name: &str, dob: &str) -> Record {
        Record::new()
            .field("full_name", name)
            .field("date_of_birth", dob)
    }

    #[test]
    fn test_personal_details_valid() {
        let record = personal("Alex Doe", "2010-05-17");
        assert!(validate(SchemaId::PersonalDetails, &record).is_ok());
    }

    #[test]
    fn test_personal_details_boundary_name_length() {
        // Two characters is the minimum, not below it
        let record = personal("Jo", "2012-01-01");
        assert!(validate(SchemaId::PersonalDetails, &record).is_ok());

        let record = personal("J", "2012-01-01");
        let errors = validate(SchemaId::PersonalDetails, &record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "full_name");
    }

    #[test]
    fn test_personal_details_date_pattern_only() {
        // Not a real calendar date, but it matches the pattern
        let record = personal("Alex Doe", "2010-99-99");
        assert!(validate(SchemaId::PersonalDetails, &record).is_ok());

        let record = personal("Alex Doe", "17/05/2010");
        let errors = validate(SchemaId::PersonalDetails, &record).unwrap_err();
        assert_eq!(errors[0].field, "date_of_birth");
        assert_eq!(errors[0].message, "Date of Birth must be in YYYY-MM-DD format.");
    }

    #[test]
    fn test_personal_details_collects_all_errors() {
        let record = personal("J", "bad");
        let errors = validate(SchemaId::PersonalDetails, &record).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_pin_mismatch_attaches_to_confirm() {
        let record = Record::new().field("pin", "1234").field("confirm_pin", "4321");
        let errors = validate(SchemaId::PinSetup, &record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "confirm_pin");
        assert_eq!(errors[0].message, "PINs don't match");
    }

    #[test]
    fn test_pin_length_check_skips_cross_field() {
        // When a length rule fails, the refinement does not run, so the
        // short confirm value reports one error, not two.
        let record = Record::new().field("pin", "1234").field("confirm_pin", "432");
        let errors = validate(SchemaId::PinSetup, &record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "confirm_pin");
        assert_eq!(errors[0].message, "Confirm PIN must be 4 digits.");
    }

    #[test]
    fn test_pin_length_only_not_numeric() {
        // Source behavior: four characters pass, digits are not enforced
        let record = Record::new().field("pin", "abcd").field("confirm_pin", "abcd");
        assert!(validate(SchemaId::PinSetup, &record).is_ok());
    }

    #[test]
    fn test_profile_edit_email() {
        let record = Record::new()
            .field("username", "YouthUser123")
            .field("email", "user@example.com");
        assert!(validate(SchemaId::ProfileEdit, &record).is_ok());

        let record = Record::new()
            .field("username", "YouthUser123")
            .field("email", "not-an-email");
        let errors = validate(SchemaId::ProfileEdit, &record).unwrap_err();
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Invalid email address");
    }

    #[test]
    fn test_profile_edit_username_too_short() {
        let record = Record::new().field("username", "Yo").field("email", "a@b.co");
        let errors = validate(SchemaId::ProfileEdit, &record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "username");
    }

    #[test]
    fn test_pin_change_mismatch() {
        let record = Record::new()
            .field("current_pin", "1111")
            .field("new_pin", "2222")
            .field("confirm_new_pin", "3333");
        let errors = validate(SchemaId::PinChange, &record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "confirm_new_pin");
        assert_eq!(errors[0].message, "New PINs don't match");
    }

    #[test]
    fn test_pin_change_valid() {
        let record = Record::new()
            .field("current_pin", "1111")
            .field("new_pin", "2222")
            .field("confirm_new_pin", "2222");
        assert!(validate(SchemaId::PinChange, &record).is_ok());
    }

    #[test]
    fn test_savings_goal_rules() {
        let record = Record::new()
            .field("goal_name", "Summer Vacation")
            .field("target_amount", "500");
        assert!(validate(SchemaId::SavingsGoal, &record).is_ok());

        let record = Record::new().field("goal_name", "TV").field("target_amount", "-5");
        let errors = validate(SchemaId::SavingsGoal, &record).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let record = Record::new();
        let errors = validate(SchemaId::PersonalDetails, &record).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
