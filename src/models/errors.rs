use thiserror::Error;

use super::{ConfirmationId, ValidationErrorMap};

/// Service-level errors surfaced to callers of the query and submission services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Reservation not found: {confirmation_id}")]
    ReservationNotFound { confirmation_id: ConfirmationId },

    #[error("Reservation already cancelled: {confirmation_id}")]
    ReservationAlreadyCancelled { confirmation_id: ConfirmationId },

    #[error("Validation failed for fields: {errors}")]
    ValidationFailed { errors: ValidationErrorMap },

    #[error("Fixture data unavailable: {source}")]
    Store {
        #[from]
        source: StoreError,
    },
}

/// Fixture-layer errors; any of these at startup is fatal since the whole
/// site depends on the fixtures being present
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Fixture document unavailable: {document}: {source}")]
    DocumentUnavailable {
        document: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture document: {document}: {source}")]
    Malformed {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fixture contract violation in {document}: {message}")]
    Contract { document: String, message: String },
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for fixture store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ServiceError::ReservationNotFound {
            confirmation_id: ConfirmationId::from("RES-ABC123".to_string()),
        };
        assert_eq!(error.to_string(), "Reservation not found: RES-ABC123");

        let store_error = StoreError::Contract {
            document: "specials.json".to_string(),
            message: "availableDays must not be empty".to_string(),
        };
        assert_eq!(
            store_error.to_string(),
            "Fixture contract violation in specials.json: availableDays must not be empty"
        );
    }

    #[test]
    fn test_store_error_conversion() {
        let store_error = StoreError::Contract {
            document: "menu.json".to_string(),
            message: "duplicate id 3".to_string(),
        };

        let service_error: ServiceError = store_error.into();
        match service_error {
            ServiceError::Store { source } => {
                assert!(source.to_string().contains("duplicate id 3"));
            }
            _ => panic!("Expected Store conversion"),
        }
    }

    #[test]
    fn test_validation_failed_display_names_fields() {
        let mut errors = ValidationErrorMap::new();
        errors.insert("email", "Email is invalid");
        errors.insert("phone", "Phone number is required");

        let error = ServiceError::ValidationFailed { errors };
        let rendered = error.to_string();
        assert!(rendered.contains("email"));
        assert!(rendered.contains("phone"));
    }
}
