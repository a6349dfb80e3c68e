//! Waitlist form submission outcomes
//!
//! A submit attempt is `Sending` until it settles into exactly one of three
//! terminal outcomes:
//! - `Delivered`: the endpoint answered with a 2xx status
//! - `Rejected`: the endpoint answered with any other status
//! - `Unreachable`: no answer at all (transport failure or timeout)
//!
//! Each outcome renders a fixed message. Only `Delivered` clears the form.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};
use serde::Deserialize;

/// Upper bound on a single submit before it is treated as unreachable
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

pub const SENDING_MESSAGE: &str = "Sending…";
pub const DELIVERED_MESSAGE: &str = "Nora will reach out soon! ✨";
pub const REJECTED_MESSAGE: &str = "Hmm… something went wrong. Please try again.";
pub const UNREACHABLE_MESSAGE: &str = "Network error. Please try again.";

/// Why a request never produced a response
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("request could not be built: {0}")]
    Build(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    Transport,
    Timeout,
}

impl From<&SubmitError> for FailureReason {
    fn from(err: &SubmitError) -> Self {
        match err {
            SubmitError::Timeout(_) => FailureReason::Timeout,
            SubmitError::Build(_) | SubmitError::Transport(_) => FailureReason::Transport,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sending,
    Delivered,
    Rejected { status: u16 },
    Unreachable(FailureReason),
}

impl SubmissionOutcome {
    /// Classify a settled request: `Ok` carries the HTTP status
    pub fn from_result(result: Result<u16, SubmitError>) -> Self {
        match result {
            Ok(status) if (200..300).contains(&status) => SubmissionOutcome::Delivered,
            Ok(status) => SubmissionOutcome::Rejected { status },
            Err(err) => SubmissionOutcome::Unreachable(FailureReason::from(&err)),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmissionOutcome::Sending => SENDING_MESSAGE,
            SubmissionOutcome::Delivered => DELIVERED_MESSAGE,
            SubmissionOutcome::Rejected { .. } => REJECTED_MESSAGE,
            SubmissionOutcome::Unreachable(_) => UNREACHABLE_MESSAGE,
        }
    }

    pub fn clears_fields(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered)
    }

    /// CSS modifier for the status line
    pub fn css_class(&self) -> &'static str {
        match self {
            SubmissionOutcome::Sending => "form-status sending",
            SubmissionOutcome::Delivered => "form-status success",
            SubmissionOutcome::Rejected { .. } | SubmissionOutcome::Unreachable(_) => {
                "form-status error"
            }
        }
    }
}

/// In-flight guard: at most one submission per form at a time
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitGate {
    in_flight: bool,
    last: Option<SubmissionOutcome>,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate. Returns `None` while a request is already pending,
    /// otherwise the `Sending` outcome to render.
    pub fn begin(&mut self) -> Option<SubmissionOutcome> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.last = Some(SubmissionOutcome::Sending);
        self.last
    }

    /// Release the gate with the settled outcome
    pub fn finish(&mut self, result: Result<u16, SubmitError>) -> SubmissionOutcome {
        let outcome = SubmissionOutcome::from_result(result);
        self.in_flight = false;
        self.last = Some(outcome);
        outcome
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last(&self) -> Option<SubmissionOutcome> {
        self.last
    }
}

/// Race a whole request/response exchange against `deadline`.
///
/// Everything inside `exchange` counts against the deadline, including
/// reading the body of a rejection. `limit` is only reported in the error.
pub async fn settle_within<T, R, D>(
    exchange: R,
    deadline: D,
    limit: Duration,
) -> Result<T, SubmitError>
where
    R: Future<Output = Result<T, SubmitError>>,
    D: Future<Output = ()>,
{
    match select(pin!(exchange), pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SubmitError::Timeout(limit)),
    }
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    errors: Vec<RejectionEntry>,
}

#[derive(Debug, Deserialize)]
struct RejectionEntry {
    message: String,
}

/// Pull human-readable reasons out of a structured rejection body.
/// Unparseable bodies yield nothing.
pub fn rejection_reasons(body: &str) -> Vec<String> {
    serde_json::from_str::<RejectionBody>(body)
        .map(|parsed| parsed.errors.into_iter().map(|e| e.message).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    use super::*;

    #[test]
    fn test_success_status_delivered() {
        for status in [200, 201, 204, 299] {
            let outcome = SubmissionOutcome::from_result(Ok(status));
            assert_eq!(outcome, SubmissionOutcome::Delivered);
            assert_eq!(outcome.message(), DELIVERED_MESSAGE);
            assert!(outcome.clears_fields());
        }
    }

    #[test]
    fn test_failure_status_rejected() {
        for status in [302, 400, 422, 500, 503] {
            let outcome = SubmissionOutcome::from_result(Ok(status));
            assert_eq!(outcome, SubmissionOutcome::Rejected { status });
            assert_eq!(outcome.message(), REJECTED_MESSAGE);
            assert!(!outcome.clears_fields());
        }
    }

    #[test]
    fn test_transport_failure_unreachable() {
        let outcome =
            SubmissionOutcome::from_result(Err(SubmitError::Transport("offline".into())));

        assert_eq!(
            outcome,
            SubmissionOutcome::Unreachable(FailureReason::Transport)
        );
        assert_eq!(outcome.message(), UNREACHABLE_MESSAGE);
        assert!(!outcome.clears_fields());
    }

    #[test]
    fn test_timeout_is_unreachable() {
        let outcome = SubmissionOutcome::from_result(Err(SubmitError::Timeout(SUBMIT_TIMEOUT)));

        assert_eq!(outcome, SubmissionOutcome::Unreachable(FailureReason::Timeout));
        assert_eq!(outcome.message(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_terminal_messages_are_distinct() {
        let messages = [
            SubmissionOutcome::Delivered.message(),
            SubmissionOutcome::Rejected { status: 500 }.message(),
            SubmissionOutcome::Unreachable(FailureReason::Transport).message(),
        ];

        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_gate_refuses_duplicate_submit() {
        let mut gate = SubmitGate::new();

        assert_eq!(gate.begin(), Some(SubmissionOutcome::Sending));
        assert!(gate.in_flight());
        assert_eq!(gate.begin(), None);

        let outcome = gate.finish(Ok(200));
        assert_eq!(outcome, SubmissionOutcome::Delivered);
        assert!(!gate.in_flight());
        assert_eq!(gate.last(), Some(SubmissionOutcome::Delivered));

        // manual resubmission is allowed once settled
        assert!(gate.begin().is_some());
    }

    #[test]
    fn test_gate_released_after_failure() {
        let mut gate = SubmitGate::new();
        gate.begin();

        gate.finish(Err(SubmitError::Build("bad url".into())));

        assert!(!gate.in_flight());
        assert_eq!(
            gate.last(),
            Some(SubmissionOutcome::Unreachable(FailureReason::Transport))
        );
    }

    #[test]
    fn test_exchange_settles_before_deadline() {
        let result = block_on(settle_within(
            async { Ok::<u16, SubmitError>(201) },
            pending::<()>(),
            SUBMIT_TIMEOUT,
        ));

        assert_eq!(result, Ok(201));
    }

    #[test]
    fn test_stalled_rejection_body_hits_deadline() {
        // status arrives, body never finishes
        let exchange = async {
            let status = 422;
            pending::<()>().await;
            Ok(status)
        };
        let result = block_on(settle_within(exchange, ready(()), SUBMIT_TIMEOUT));

        assert_eq!(result, Err(SubmitError::Timeout(SUBMIT_TIMEOUT)));
        assert_eq!(
            SubmissionOutcome::from_result(result),
            SubmissionOutcome::Unreachable(FailureReason::Timeout)
        );
    }

    #[test]
    fn test_rejection_reasons() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","field":"email","message":"should be an email"}]}"#;
        assert_eq!(rejection_reasons(body), vec!["should be an email".to_string()]);

        assert!(rejection_reasons("<html>502</html>").is_empty());
        assert!(rejection_reasons("{}").is_empty());
    }
}
