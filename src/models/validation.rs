use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{ContactRequest, ReservationRequest};

/// Per-field validation messages; an empty map means the form may submit
///
/// Fields are keyed by their form names and kept ordered so rendering and
/// logging are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrorMap(BTreeMap<String, String>);

impl ValidationErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Drop the error for one field, as when the guest edits that field
    pub fn clear_field(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "{}", fields.join(", "))
    }
}

/// Pure, synchronous per-form validation
pub trait ValidateForm {
    /// Check every field independently and report all failures at once
    fn validate(&self) -> ValidationErrorMap;
}

impl ValidateForm for ContactRequest {
    fn validate(&self) -> ValidationErrorMap {
        validate_contact_form(self)
    }
}

impl ValidateForm for ReservationRequest {
    fn validate(&self) -> ValidationErrorMap {
        validate_reservation_form(self, Local::now().date_naive())
    }
}

/// Validate the contact form
pub fn validate_contact_form(request: &ContactRequest) -> ValidationErrorMap {
    let mut errors = ValidationErrorMap::new();

    if request.name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }

    if request.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&request.email) {
        errors.insert("email", "Email is invalid");
    }

    if request.subject.trim().is_empty() {
        errors.insert("subject", "Subject is required");
    }

    if request.message.trim().is_empty() {
        errors.insert("message", "Message is required");
    }

    errors
}

/// Validate the reservation form against the given calendar date
///
/// `today` is injected so callers and tests control what "a past date" means;
/// time of day never participates in the comparison.
pub fn validate_reservation_form(
    request: &ReservationRequest,
    today: NaiveDate,
) -> ValidationErrorMap {
    let mut errors = ValidationErrorMap::new();

    if request.full_name.trim().is_empty() {
        errors.insert("fullName", "Full name is required");
    }

    if request.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&request.email) {
        errors.insert("email", "Email is invalid");
    }

    if request.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required");
    } else if !is_valid_phone(&request.phone) {
        errors.insert("phone", "Phone number is invalid");
    }

    if request.date.trim().is_empty() {
        errors.insert("date", "Date is required");
    } else {
        match NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d") {
            Ok(date) if date < today => {
                errors.insert("date", "Please select a future date");
            }
            Ok(_) => {}
            Err(_) => {
                errors.insert("date", "Date is invalid");
            }
        }
    }

    if request.time.trim().is_empty() {
        errors.insert("time", "Time is required");
    }

    errors
}

/// Check the `local@domain.tld` shape: one `@`, a dotted domain, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs at least one dot with non-empty labels on both sides
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty() && !host.starts_with('.') && !tld.is_empty()
}

/// Check the phone shape: optional leading `+`, then digits, spaces, hyphens,
/// and parentheses only, with at least one digit
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let rest = phone.strip_prefix('+').unwrap_or(phone);

    if rest.is_empty() {
        return false;
    }

    rest.chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')')
        && rest.chars().any(|c| c.is_ascii_digit())
}
