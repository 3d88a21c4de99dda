use tracing::{info, instrument, warn};

use crate::models::{
    Acknowledgement, ContactRequest, ServiceError, ServiceResult, TestimonialSubmission,
    ValidateForm,
};
use crate::repositories::SimulatedLatency;

/// Guest feedback submissions: testimonials and contact messages
///
/// Fire-and-forget operations with no idempotency keys or retries; the
/// payload is logged and a canned acknowledgement returned.
pub struct FeedbackService {
    latency: SimulatedLatency,
}

impl FeedbackService {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }

    /// Accept a guest testimonial
    ///
    /// The rating is already range-checked by its type; there is no form
    /// validator for testimonials.
    #[instrument(skip(self, submission), fields(rating = %submission.rating))]
    pub async fn submit_testimonial(
        &self,
        submission: TestimonialSubmission,
    ) -> ServiceResult<Acknowledgement> {
        self.latency.submission_delay().await;

        info!(
            name = %submission.name,
            rating = %submission.rating,
            comment_len = submission.comment.len(),
            "Testimonial submitted"
        );

        Ok(Acknowledgement::ok("Testimonial submitted successfully"))
    }

    /// Accept a contact-form message
    ///
    /// The request must pass the contact form validator; an invalid payload
    /// is rejected without being processed.
    #[instrument(skip(self, request), fields(subject = %request.subject))]
    pub async fn submit_contact_form(
        &self,
        request: ContactRequest,
    ) -> ServiceResult<Acknowledgement> {
        let errors = request.validate();
        if !errors.is_empty() {
            warn!("Contact form rejected by validation: {}", errors);
            return Err(ServiceError::ValidationFailed { errors });
        }

        self.latency.submission_delay().await;

        info!(
            name = %request.name,
            subject = %request.subject,
            message_len = request.message.len(),
            "Contact form submitted"
        );

        Ok(Acknowledgement::ok("Message sent successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;

    fn service() -> FeedbackService {
        FeedbackService::new(SimulatedLatency::zero())
    }

    #[tokio::test]
    async fn test_submit_testimonial_acknowledged() {
        let submission = TestimonialSubmission {
            name: "Ana".to_string(),
            location: Some("Lisbon, Portugal".to_string()),
            rating: Rating::new(5).unwrap(),
            comment: "A wonderful evening.".to_string(),
        };

        let ack = service().submit_testimonial(submission).await.unwrap();

        assert!(ack.success);
        assert_eq!(ack.message, "Testimonial submitted successfully");
    }

    #[tokio::test]
    async fn test_submit_contact_form_acknowledged() {
        let request = ContactRequest {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Private dining".to_string(),
            message: "Do you host parties of eight?".to_string(),
        };

        let ack = service().submit_contact_form(request).await.unwrap();

        assert!(ack.success);
        assert_eq!(ack.message, "Message sent successfully");
    }

    #[tokio::test]
    async fn test_invalid_contact_form_rejected() {
        let request = ContactRequest {
            name: "".to_string(),
            email: "bad".to_string(),
            subject: "".to_string(),
            message: "".to_string(),
        };

        let result = service().submit_contact_form(request).await;

        match result {
            Err(ServiceError::ValidationFailed { errors }) => {
                assert_eq!(errors.len(), 4);
            }
            other => panic!("Expected ValidationFailed, got {:?}", other.map(|_| ())),
        }
    }
}
