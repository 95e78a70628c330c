use crate::config::FormEndpoint;

use super::inquiry::{FieldErrors, FormPayload, InquiryDraft};
use super::transport::SubmitError;

pub const SUCCESS_NOTICE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_NOTICE: &str = "An error occurred while sending your message. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// What the form should do after a submit click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Begin {
    /// A submission is already in flight.
    Ignored,
    Invalid(FieldErrors),
    Send(FormPayload),
}

/// Permission to clear the success notice once `after_ms` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    pub generation: u64,
    pub after_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionController {
    status: SubmissionStatus,
    notice: Option<&'static str>,
    generation: u64,
    success_notice_ms: u32,
}

impl SubmissionController {
    pub fn new(success_notice_ms: u32) -> Self {
        SubmissionController {
            status: SubmissionStatus::Idle,
            notice: None,
            generation: 0,
            success_notice_ms,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Fields and the submit button are disabled while this holds.
    pub fn is_locked(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn begin(&mut self, draft: &InquiryDraft, endpoint: &FormEndpoint) -> Begin {
        if self.is_locked() {
            return Begin::Ignored;
        }
        match draft.validate() {
            Err(errors) => Begin::Invalid(errors),
            Ok(inquiry) => {
                self.status = SubmissionStatus::Submitting;
                self.notice = None;
                Begin::Send(inquiry.encode(endpoint))
            }
        }
    }

    /// Records the outcome of the write. On success the caller clears the
    /// form and schedules the returned ticket.
    pub fn settle(&mut self, outcome: Result<(), SubmitError>) -> Option<ResetTicket> {
        if !self.is_locked() {
            return None;
        }
        self.generation += 1;
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.notice = Some(SUCCESS_NOTICE);
                Some(ResetTicket { generation: self.generation, after_ms: self.success_notice_ms })
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
                self.notice = Some(FAILURE_NOTICE);
                None
            }
        }
    }

    /// Returns to idle unless a newer submission has happened since the
    /// ticket was issued.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if ticket.generation != self.generation || self.status != SubmissionStatus::Success {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        self.notice = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::inquiry::FieldError;

    fn endpoint() -> FormEndpoint {
        FormEndpoint {
            action_url: "https://forms.example.com/formResponse".to_string(),
            name_field: "entry.1".to_string(),
            email_field: "entry.2".to_string(),
            phone_field: "entry.3".to_string(),
            message_field: "entry.4".to_string(),
        }
    }

    fn jane() -> InquiryDraft {
        InquiryDraft {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            message: "Please give me a quote for a new roof".to_string(),
        }
    }

    fn network_down() -> SubmitError {
        SubmitError::Network("TypeError: Failed to fetch".to_string())
    }

    #[test]
    fn valid_inquiry_goes_idle_submitting_success() {
        let mut controller = SubmissionController::new(5_000);
        assert_eq!(controller.status(), SubmissionStatus::Idle);

        let payload = match controller.begin(&jane(), &endpoint()) {
            Begin::Send(payload) => payload,
            other => panic!("expected a send, got {:?}", other),
        };
        assert_eq!(payload.get("entry.3"), None);
        assert_eq!(controller.status(), SubmissionStatus::Submitting);
        assert!(controller.is_locked());

        let ticket = controller.settle(Ok(())).unwrap();
        assert_eq!(controller.status(), SubmissionStatus::Success);
        assert_eq!(controller.notice(), Some(SUCCESS_NOTICE));
        assert!(!controller.is_locked());
        assert_eq!(ticket.after_ms, 5_000);
    }

    #[test]
    fn invalid_input_never_sends() {
        let mut controller = SubmissionController::new(5_000);
        let draft = InquiryDraft { name: "J".to_string(), email: "jane@".to_string(), ..jane() };
        match controller.begin(&draft, &endpoint()) {
            Begin::Invalid(errors) => {
                assert_eq!(errors.name, Some(FieldError::NameTooShort));
                assert_eq!(errors.email, Some(FieldError::InvalidEmail));
                assert_eq!(errors.message, None);
            }
            other => panic!("expected field errors, got {:?}", other),
        }
        assert_eq!(controller.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut controller = SubmissionController::new(5_000);
        assert!(matches!(controller.begin(&jane(), &endpoint()), Begin::Send(_)));
        assert_eq!(controller.begin(&jane(), &endpoint()), Begin::Ignored);
        assert_eq!(controller.begin(&InquiryDraft::default(), &endpoint()), Begin::Ignored);
        assert_eq!(controller.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn failure_allows_immediate_retry() {
        let mut controller = SubmissionController::new(5_000);
        let draft = jane();
        controller.begin(&draft, &endpoint());
        assert_eq!(controller.settle(Err(network_down())), None);
        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(controller.notice(), Some(FAILURE_NOTICE));

        // fields are untouched by the controller, so the same draft goes again
        assert!(matches!(controller.begin(&draft, &endpoint()), Begin::Send(_)));
        assert_eq!(controller.notice(), None);
        assert!(controller.settle(Ok(())).is_some());
    }

    #[test]
    fn invalid_retry_keeps_the_error_banner() {
        let mut controller = SubmissionController::new(5_000);
        controller.begin(&jane(), &endpoint());
        controller.settle(Err(network_down()));

        let draft = InquiryDraft { message: "short".to_string(), ..jane() };
        assert!(matches!(controller.begin(&draft, &endpoint()), Begin::Invalid(_)));
        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(controller.notice(), Some(FAILURE_NOTICE));
    }

    #[test]
    fn success_notice_expires_back_to_idle() {
        let mut controller = SubmissionController::new(5_000);
        controller.begin(&jane(), &endpoint());
        let ticket = controller.settle(Ok(())).unwrap();

        assert!(controller.expire(ticket));
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert_eq!(controller.notice(), None);
        assert!(!controller.expire(ticket));
    }

    #[test]
    fn stale_ticket_does_not_interrupt_a_later_submission() {
        let mut controller = SubmissionController::new(5_000);
        controller.begin(&jane(), &endpoint());
        let first = controller.settle(Ok(())).unwrap();

        controller.begin(&jane(), &endpoint());
        assert!(!controller.expire(first));
        assert_eq!(controller.status(), SubmissionStatus::Submitting);

        let second = controller.settle(Ok(())).unwrap();
        assert!(!controller.expire(first));
        assert!(controller.expire(second));
    }

    #[test]
    fn settle_without_begin_is_a_no_op() {
        let mut controller = SubmissionController::new(5_000);
        assert_eq!(controller.settle(Ok(())), None);
        assert_eq!(controller.status(), SubmissionStatus::Idle);
    }
}
