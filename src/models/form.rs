use thiserror::Error;

use super::ValidationErrorMap;

/// Where a form currently is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormLifecycle {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Errors raised by illegal form-session transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormStateError {
    /// A submit is already in flight; the new attempt is rejected outright
    #[error("Submission already in progress")]
    SubmissionInProgress,

    /// Validation produced field errors; the form never entered Submitting
    #[error("Form has validation errors: {0}")]
    InvalidFields(ValidationErrorMap),
}

/// Tracks one form instance: its lifecycle state plus the field errors
/// currently shown next to inputs
///
/// A validation pass always completes before the corresponding service call
/// is issued, and a field's error clears the instant that field is edited,
/// before any revalidation happens.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    state: FormLifecycle,
    errors: ValidationErrorMap,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormLifecycle {
        self.state
    }

    pub fn errors(&self) -> &ValidationErrorMap {
        &self.errors
    }

    /// The guest edited a field: drop its error immediately, whether or not
    /// the new value is itself valid
    pub fn edit_field(&mut self, field: &str) {
        self.errors.clear_field(field);
    }

    /// Attempt to start a submit with the given validation result
    ///
    /// Rejects re-entrant submits while one is in flight; with a non-empty
    /// error map the form stays out of Submitting and keeps the errors for
    /// display.
    pub fn begin_submit(&mut self, validation: ValidationErrorMap) -> Result<(), FormStateError> {
        if self.state == FormLifecycle::Submitting {
            return Err(FormStateError::SubmissionInProgress);
        }

        if !validation.is_empty() {
            self.errors = validation.clone();
            return Err(FormStateError::InvalidFields(validation));
        }

        self.errors = ValidationErrorMap::new();
        self.state = FormLifecycle::Submitting;
        Ok(())
    }

    /// The service call resolved successfully
    pub fn complete(&mut self) {
        if self.state == FormLifecycle::Submitting {
            self.state = FormLifecycle::Succeeded;
        }
    }

    /// The service call failed
    pub fn fail(&mut self) {
        if self.state == FormLifecycle::Submitting {
            self.state = FormLifecycle::Failed;
        }
    }

    /// The outcome banner was dismissed; the form is ready for another attempt
    pub fn acknowledge(&mut self) {
        if matches!(self.state, FormLifecycle::Succeeded | FormLifecycle::Failed) {
            self.state = FormLifecycle::Idle;
        }
    }
}
