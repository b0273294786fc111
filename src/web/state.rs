//! Form view state machine.
//!
//! ```text
//! Idle --PageShown--> AwaitingInput --Submitted--> SubmittedInvalid
//!                                              \-> SubmittedMissingCredential
//!                                              \-> Loading --Completed--> Success | Error
//! ```
//!
//! Every state that shows the form accepts a new submission; `Idle` and
//! `Loading` ignore it.

use crate::Result;

/// What the page currently shows below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    AwaitingInput,
    /// Submitted text was empty or whitespace only.
    SubmittedInvalid,
    SubmittedMissingCredential,
    Loading,
    Success { answer: String },
    Error { message: String },
}

/// Input driving [`ViewState`] transitions.
#[derive(Debug)]
pub enum ViewEvent {
    PageShown,
    Submitted {
        text_blank: bool,
        credential_present: bool,
    },
    Completed(Result<String>),
}

impl ViewState {
    /// Apply `event`; events that do not apply leave the state unchanged.
    pub fn on(self, event: ViewEvent) -> ViewState {
        match (self, event) {
            (ViewState::Idle, ViewEvent::PageShown) => ViewState::AwaitingInput,
            (
                state,
                ViewEvent::Submitted {
                    text_blank,
                    credential_present,
                },
            ) if state.accepts_submission() => {
                if text_blank {
                    ViewState::SubmittedInvalid
                } else if !credential_present {
                    ViewState::SubmittedMissingCredential
                } else {
                    ViewState::Loading
                }
            }
            (ViewState::Loading, ViewEvent::Completed(Ok(answer))) => ViewState::Success { answer },
            (ViewState::Loading, ViewEvent::Completed(Err(e))) => ViewState::Error {
                message: e.to_string(),
            },
            (state, _) => state,
        }
    }

    /// True when the form is on screen and a submission may start.
    pub fn accepts_submission(&self) -> bool {
        !matches!(self, ViewState::Idle | ViewState::Loading)
    }

    /// True when the remote call should be made from this state.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(text_blank: bool, credential_present: bool) -> ViewEvent {
        ViewEvent::Submitted {
            text_blank,
            credential_present,
        }
    }

    #[test]
    fn test_page_shown_moves_to_awaiting_input() {
        assert_eq!(ViewState::Idle.on(ViewEvent::PageShown), ViewState::AwaitingInput);
        assert_eq!(
            ViewState::AwaitingInput.on(ViewEvent::PageShown),
            ViewState::AwaitingInput
        );
    }

    #[test]
    fn test_text_guard_runs_before_credential_guard() {
        assert_eq!(
            ViewState::AwaitingInput.on(submitted(true, false)),
            ViewState::SubmittedInvalid
        );
        assert_eq!(
            ViewState::AwaitingInput.on(submitted(true, true)),
            ViewState::SubmittedInvalid
        );
        assert_eq!(
            ViewState::AwaitingInput.on(submitted(false, false)),
            ViewState::SubmittedMissingCredential
        );
        assert_eq!(
            ViewState::AwaitingInput.on(submitted(false, true)),
            ViewState::Loading
        );
    }

    #[test]
    fn test_completion_outcomes() {
        assert_eq!(
            ViewState::Loading.on(ViewEvent::Completed(Ok("回答".into()))),
            ViewState::Success {
                answer: "回答".into()
            }
        );
        let failed = ViewState::Loading.on(ViewEvent::Completed(Err(crate::Error::Remote {
            status: 500,
            message: "boom".into(),
        })));
        assert_eq!(
            failed,
            ViewState::Error {
                message: "Remote error: HTTP 500: boom".into()
            }
        );
    }

    #[test]
    fn test_results_accept_resubmission() {
        let after_warning = ViewState::SubmittedInvalid.on(submitted(false, true));
        assert!(after_warning.is_loading());

        let after_error = ViewState::Error {
            message: "x".into(),
        }
        .on(submitted(false, false));
        assert_eq!(after_error, ViewState::SubmittedMissingCredential);
    }

    #[test]
    fn test_ignored_events() {
        assert_eq!(ViewState::Idle.on(submitted(false, true)), ViewState::Idle);
        assert_eq!(ViewState::Loading.on(submitted(true, true)), ViewState::Loading);
        assert_eq!(
            ViewState::AwaitingInput.on(ViewEvent::Completed(Ok("late".into()))),
            ViewState::AwaitingInput
        );
    }
}
