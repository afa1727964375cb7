use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;

use super::validation::ContactForm;
use crate::config::SUBMIT_DELAY_MS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    AlreadyPending,
    #[error("your message could not be sent: {0}")]
    Rejected(String),
}

/// Serialises submissions: only one may be in flight at a time.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    state: SubmitState,
}

impl SubmissionGate {
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmitState::Pending
    }

    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::AlreadyPending);
        }
        self.state = SubmitState::Pending;
        Ok(())
    }

    pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> &SubmitState {
        self.state = match outcome {
            Ok(()) => SubmitState::Sent,
            Err(err) => SubmitState::Failed(err.to_string()),
        };
        &self.state
    }

    /// Back to an empty form, e.g. after "send another message".
    pub fn reset(&mut self) {
        if !self.is_pending() {
            self.state = SubmitState::Idle;
        }
    }
}

/// Stand-in for the delivery call: there is no backend, so the payload is
/// logged and the usual latency is simulated.
pub async fn deliver(form: ContactForm) -> Result<(), SubmitError> {
    let payload = serde_json::to_string(&form).map_err(|err| SubmitError::Rejected(err.to_string()))?;
    info!("contact request: {}", payload);
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let mut gate = SubmissionGate::default();
        assert_eq!(gate.begin(), Ok(()));
        assert_eq!(gate.begin(), Err(SubmitError::AlreadyPending));
        assert!(gate.is_pending());
    }

    #[test]
    fn success_then_resubmit_is_allowed() {
        let mut gate = SubmissionGate::default();
        gate.begin().unwrap();
        assert_eq!(gate.finish(Ok(())), &SubmitState::Sent);
        assert_eq!(gate.begin(), Ok(()));
    }

    #[test]
    fn failure_keeps_the_reason_and_reopens_the_form() {
        let mut gate = SubmissionGate::default();
        gate.begin().unwrap();
        let state = gate.finish(Err(SubmitError::Rejected("offline".into()))).clone();
        assert_eq!(
            state,
            SubmitState::Failed("your message could not be sent: offline".into())
        );
        assert!(!gate.is_pending());
        assert!(gate.begin().is_ok());
    }

    #[test]
    fn reset_cannot_interrupt_a_pending_send() {
        let mut gate = SubmissionGate::default();
        gate.begin().unwrap();
        gate.reset();
        assert!(gate.is_pending());
        gate.finish(Ok(()));
        gate.reset();
        assert_eq!(gate.state(), &SubmitState::Idle);
    }
}
