//! # Auth request payloads and their local validation
//!
//! [`SignupRequest`] and [`LoginRequest`] are transient value objects: the
//! form views build one per submission attempt, validate it, and discard it.
//! Serde renames keep the serialized form byte-compatible with the server's
//! contract — `uniId` and the capitalized `Department` are load-bearing.
//!
//! Validation is pure and synchronous. It reports only the first violated
//! rule, as a [`ValidationError`] whose `Display` is the exact message shown
//! to the user, so callers can toast `err.to_string()` without owning any
//! message table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delivery mode that requires a physical room.
pub const CAMPUS_MODE: &str = "campus";

/// Payload for `POST /api/auth/signup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub uni_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: String,
    pub role: String,
    #[serde(rename = "Department")]
    pub department: String,
    pub title: String,
    pub schedule: Vec<ScheduleEntry>,
}

/// One class session in the signup schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub subject: String,
    pub mode: String,
    pub room: String,
    pub start_time: String,
    pub end_time: String,
}

/// Payload for `POST /api/auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub uni_id: String,
    pub password: String,
}

/// First rule a request violated. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please add at least one schedule entry")]
    EmptySchedule,
    #[error("All schedule entries must have a subject")]
    MissingSubject,
    #[error("Please specify a room for campus classes")]
    MissingRoom,
    #[error("All schedule entries must have start and end times")]
    MissingTimes,
}

impl SignupRequest {
    /// Check the request locally, short-circuiting at the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            &self.uni_id,
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.confirm_password,
            &self.gender,
            &self.role,
            &self.department,
            &self.title,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < 6 {
            return Err(ValidationError::PasswordTooShort);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if self.schedule.is_empty() {
            return Err(ValidationError::EmptySchedule);
        }
        for entry in &self.schedule {
            entry.validate()?;
        }

        Ok(())
    }
}

impl ScheduleEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        if self.mode == CAMPUS_MODE && self.room.trim().is_empty() {
            return Err(ValidationError::MissingRoom);
        }
        if self.start_time.is_empty() || self.end_time.is_empty() {
            return Err(ValidationError::MissingTimes);
        }
        Ok(())
    }
}

impl LoginRequest {
    /// Both fields are required; no further shape checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.uni_id.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@` with a non-empty
/// local part, and a dot strictly inside the domain part.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(subject: &str, mode: &str, room: &str) -> ScheduleEntry {
        ScheduleEntry {
            subject: subject.to_string(),
            mode: mode.to_string(),
            room: room.to_string(),
            start_time: "9:00".to_string(),
            end_time: "10:00".to_string(),
        }
    }

    fn valid_request() -> SignupRequest {
        SignupRequest {
            uni_id: "u1".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.co".to_string(),
            password: "123456".to_string(),
            confirm_password: "123456".to_string(),
            gender: "f".to_string(),
            role: "student".to_string(),
            department: "CS".to_string(),
            title: "Mr".to_string(),
            schedule: vec![entry("Math", "online", "")],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_any_missing_field_is_rejected() {
        let clear: [fn(&mut SignupRequest); 10] = [
            |r: &mut SignupRequest| r.uni_id.clear(),
            |r: &mut SignupRequest| r.first_name.clear(),
            |r: &mut SignupRequest| r.last_name.clear(),
            |r: &mut SignupRequest| r.email.clear(),
            |r: &mut SignupRequest| r.password.clear(),
            |r: &mut SignupRequest| r.confirm_password.clear(),
            |r: &mut SignupRequest| r.gender.clear(),
            |r: &mut SignupRequest| r.role.clear(),
            |r: &mut SignupRequest| r.department.clear(),
            |r: &mut SignupRequest| r.title.clear(),
        ];
        for f in clear {
            let mut request = valid_request();
            f(&mut request);
            assert_eq!(request.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_missing_fields_message() {
        let mut request = valid_request();
        request.uni_id.clear();
        assert_eq!(
            request.validate().unwrap_err().to_string(),
            "Please fill in all fields"
        );
    }

    #[test]
    fn test_password_mismatch_is_checked_before_length() {
        let mut request = valid_request();
        request.password = "123".to_string();
        request.confirm_password = "1234".to_string();
        assert_eq!(request.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_short_password() {
        let mut request = valid_request();
        request.password = "12345".to_string();
        request.confirm_password = "12345".to_string();
        assert_eq!(request.validate(), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_email_shapes() {
        let valid = ["a@b.co", "first.last@uni.edu", "x@sub.domain.org"];
        for email in valid {
            let mut request = valid_request();
            request.email = email.to_string();
            assert_eq!(request.validate(), Ok(()), "expected {email} to pass");
        }

        let invalid = [
            "plain",
            "a@b",
            "a@b.",
            "a@.co",
            "@b.co",
            "a b@c.co",
            "a@b .co",
            "a@@b.co",
            "a@b@c.co",
        ];
        for email in invalid {
            let mut request = valid_request();
            request.email = email.to_string();
            assert_eq!(
                request.validate(),
                Err(ValidationError::InvalidEmail),
                "expected {email} to fail"
            );
        }
    }

    #[test]
    fn test_empty_schedule() {
        let mut request = valid_request();
        request.schedule.clear();
        assert_eq!(request.validate(), Err(ValidationError::EmptySchedule));
        assert_eq!(
            ValidationError::EmptySchedule.to_string(),
            "Please add at least one schedule entry"
        );
    }

    #[test]
    fn test_whitespace_subject_is_rejected() {
        let mut request = valid_request();
        request.schedule = vec![entry("   ", "online", "")];
        assert_eq!(request.validate(), Err(ValidationError::MissingSubject));
    }

    #[test]
    fn test_campus_entry_requires_room() {
        // The concrete scenario: identical to a valid request except the
        // single entry is campus-mode with no room.
        let mut request = valid_request();
        request.schedule = vec![entry("Math", "campus", "")];
        assert_eq!(request.validate(), Err(ValidationError::MissingRoom));
        assert_eq!(
            ValidationError::MissingRoom.to_string(),
            "Please specify a room for campus classes"
        );

        // Whitespace-only rooms count as missing
        request.schedule = vec![entry("Math", "campus", "  ")];
        assert_eq!(request.validate(), Err(ValidationError::MissingRoom));

        // A real room satisfies the rule
        request.schedule = vec![entry("Math", "campus", "B2-014")];
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_non_campus_entry_accepts_missing_room() {
        let mut request = valid_request();
        request.schedule = vec![entry("Math", "online", "")];
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_entries_need_both_times() {
        let mut request = valid_request();
        let mut e = entry("Math", "online", "");
        e.end_time.clear();
        request.schedule = vec![e];
        assert_eq!(request.validate(), Err(ValidationError::MissingTimes));

        let mut e = entry("Math", "online", "");
        e.start_time.clear();
        request.schedule = vec![e];
        assert_eq!(request.validate(), Err(ValidationError::MissingTimes));
    }

    #[test]
    fn test_schedule_entries_checked_in_order() {
        // The first entry's violation wins even when a later entry has a
        // different one.
        let mut request = valid_request();
        request.schedule = vec![entry("", "online", ""), entry("Math", "campus", "")];
        assert_eq!(request.validate(), Err(ValidationError::MissingSubject));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let request = LoginRequest {
            uni_id: "u1".to_string(),
            password: "".to_string(),
        };
        assert_eq!(request.validate(), Err(ValidationError::MissingFields));

        let request = LoginRequest {
            uni_id: "u1".to_string(),
            password: "123456".to_string(),
        };
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_wire_serialization_matches_contract() {
        let request = valid_request();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "uniId": "u1",
                "firstName": "A",
                "lastName": "B",
                "email": "a@b.co",
                "password": "123456",
                "confirmPassword": "123456",
                "gender": "f",
                "role": "student",
                "Department": "CS",
                "title": "Mr",
                "schedule": [{
                    "subject": "Math",
                    "mode": "online",
                    "room": "",
                    "startTime": "9:00",
                    "endTime": "10:00",
                }],
            })
        );
    }

    #[test]
    fn test_login_wire_serialization() {
        let request = LoginRequest {
            uni_id: "u1".to_string(),
            password: "123456".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"uniId": "u1", "password": "123456"})
        );
    }
}
