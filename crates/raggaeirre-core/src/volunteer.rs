//! Volunteer application modal.
//!
//! A single form submitted wholesale. Submission follows the same
//! begin / await backend / finish / auto-close sequence as the donation
//! flow, guarded by the same epoch scheme.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Outcome;
use crate::error::{SiteError, SiteResult, ValidationError};
use crate::hooks::PageHooks;
use crate::message::{MessageId, MessageKind, MessageSlot, TransientMessage};
use crate::validation;

/// Text shown while the application is sent
pub const SUBMITTING_TEXT: &str = "Submitting your application...";
/// Text shown after the backend accepts the application
pub const SUCCESS_TEXT: &str = "Thank you! Your volunteer application has been submitted successfully. We'll review your application and get back to you soon.";
/// Text shown when the backend fails
pub const FAILURE_TEXT: &str =
    "There was an error submitting your volunteer application. Please try again.";

/// Built-in success/error texts
pub fn default_messages() -> Outcome {
    Outcome {
        success: SUCCESS_TEXT.into(),
        error: FAILURE_TEXT.into(),
    }
}

/// Volunteer form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerApplication {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Area of interest (teaching, mentoring, fundraising, ...)
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub message: String,
}

impl VolunteerApplication {
    /// Name and email are required; phone is checked only when given.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::require("name", &self.name)?;
        validation::require_email(&self.email)?;
        validation::check_phone(&self.phone, false)
    }
}

/// Proof that an application was sent during a given session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationTicket {
    epoch: u64,
    application: VolunteerApplication,
}

impl ApplicationTicket {
    pub fn application(&self) -> &VolunteerApplication {
        &self.application
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Result of applying a backend answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationOutcome {
    Succeeded(MessageId),
    Failed(MessageId),
    Stale,
}

/// Volunteer modal controller
pub struct VolunteerFlow {
    hooks: Arc<dyn PageHooks>,
    form: VolunteerApplication,
    message: MessageSlot,
    texts: Outcome,
    open: bool,
    epoch: u64,
}

impl fmt::Debug for VolunteerFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolunteerFlow")
            .field("open", &self.open)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl VolunteerFlow {
    pub fn new(hooks: Arc<dyn PageHooks>) -> Self {
        Self {
            hooks,
            form: VolunteerApplication::default(),
            message: MessageSlot::new(),
            texts: default_messages(),
            open: false,
            epoch: 0,
        }
    }

    /// Use catalog texts for the success and error messages.
    pub fn with_messages(mut self, texts: Outcome) -> Self {
        self.texts = texts;
        self
    }

    pub fn open(&mut self) {
        self.open = true;
        self.epoch += 1;
        self.hooks.set_scroll_locked(true);
        tracing::debug!(epoch = self.epoch, "Volunteer modal opened");
    }

    /// Hide the modal, clear the form and any message.
    pub fn close(&mut self) {
        self.open = false;
        self.epoch += 1;
        self.form = VolunteerApplication::default();
        self.message.clear();
        self.hooks.set_scroll_locked(false);
        tracing::debug!(epoch = self.epoch, "Volunteer modal closed");
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Current form contents (what the inputs show)
    pub fn form(&self) -> &VolunteerApplication {
        &self.form
    }

    /// Mutable access for input bindings
    pub fn form_mut(&mut self) -> &mut VolunteerApplication {
        &mut self.form
    }

    pub fn message(&self) -> Option<&TransientMessage> {
        self.message.current()
    }

    /// Validate `application` and show the submitting message.
    pub fn begin_submission(
        &mut self,
        application: VolunteerApplication,
    ) -> SiteResult<ApplicationTicket> {
        if !self.open {
            return Err(SiteError::InvalidTransition(
                "cannot submit while the volunteer modal is closed".into(),
            ));
        }

        if let Err(error) = application.validate() {
            tracing::warn!(%error, "Volunteer application rejected");
            self.message.show(error.to_string(), MessageKind::Error);
            return Err(error.into());
        }

        self.form = application.clone();
        self.message.show(SUBMITTING_TEXT, MessageKind::Info);
        tracing::info!(interest = %application.interest, "Submitting volunteer application");

        Ok(ApplicationTicket {
            epoch: self.epoch,
            application,
        })
    }

    /// Apply the backend's answer for `ticket`.
    pub fn finish_submission(
        &mut self,
        ticket: &ApplicationTicket,
        result: SiteResult<()>,
    ) -> ApplicationOutcome {
        if ticket.epoch != self.epoch {
            tracing::debug!("Dropping volunteer result for a closed session");
            return ApplicationOutcome::Stale;
        }

        match result {
            Ok(()) => {
                tracing::info!("Volunteer application accepted");
                ApplicationOutcome::Succeeded(
                    self.message.show(self.texts.success.clone(), MessageKind::Success),
                )
            }
            Err(e) => {
                tracing::error!(error = %e, "Volunteer submission failed");
                ApplicationOutcome::Failed(
                    self.message.show(self.texts.error.clone(), MessageKind::Error),
                )
            }
        }
    }

    /// Close if still on the session `epoch` belongs to.
    pub fn auto_close(&mut self, epoch: u64) -> bool {
        if self.open && self.epoch == epoch {
            self.close();
            true
        } else {
            false
        }
    }

    pub fn expire_message(&mut self, id: MessageId) -> bool {
        self.message.expire(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::RecordingPage;

    fn application() -> VolunteerApplication {
        VolunteerApplication {
            name: "Otieno".into(),
            email: "otieno@example.org".into(),
            phone: "+254720215589".into(),
            interest: "teaching".into(),
            availability: "weekends".into(),
            message: "Happy to help with maths.".into(),
        }
    }

    fn flow() -> (VolunteerFlow, RecordingPage) {
        let page = RecordingPage::new();
        (VolunteerFlow::new(Arc::new(page.clone())), page)
    }

    #[test]
    fn test_open_close_toggles_scroll() {
        let (mut flow, page) = flow();
        flow.open();
        assert!(flow.is_open());
        assert!(page.scroll_locked());

        flow.close();
        assert!(!flow.is_open());
        assert!(!page.scroll_locked());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let (mut flow, _) = flow();
        flow.open();

        let err = flow
            .begin_submission(VolunteerApplication {
                email: "not-an-email".into(),
                ..application()
            })
            .unwrap_err();

        assert!(matches!(err, SiteError::Validation(ValidationError::InvalidEmail)));
        assert_eq!(flow.message().unwrap().kind, MessageKind::Error);
    }

    #[test]
    fn test_phone_is_optional() {
        let app = VolunteerApplication {
            phone: String::new(),
            ..application()
        };
        assert_eq!(app.validate(), Ok(()));
    }

    #[test]
    fn test_success_then_auto_close() {
        let (mut flow, _) = flow();
        flow.open();

        let ticket = flow.begin_submission(application()).unwrap();
        assert_eq!(flow.message().unwrap().text, SUBMITTING_TEXT);

        assert!(matches!(
            flow.finish_submission(&ticket, Ok(())),
            ApplicationOutcome::Succeeded(_)
        ));
        assert_eq!(flow.message().unwrap().text, SUCCESS_TEXT);

        assert!(flow.auto_close(ticket.epoch()));
        assert!(flow.message().is_none());
        assert_eq!(flow.form(), &VolunteerApplication::default());
    }

    #[test]
    fn test_failure_stays_open() {
        let (mut flow, _) = flow();
        flow.open();
        let ticket = flow.begin_submission(application()).unwrap();

        let outcome = flow.finish_submission(&ticket, Err(SiteError::Submission("timeout".into())));
        assert!(matches!(outcome, ApplicationOutcome::Failed(_)));
        assert!(flow.is_open());
        assert_eq!(flow.message().unwrap().text, FAILURE_TEXT);
        assert_eq!(flow.form().interest, "teaching");
    }

    #[test]
    fn test_close_clears_message_and_form() {
        let (mut flow, _) = flow();
        flow.open();
        flow.form_mut().name = "Half typed".into();
        let _ = flow.begin_submission(VolunteerApplication::default());
        assert!(flow.message().is_some());

        flow.close();
        assert!(flow.message().is_none());
        assert!(flow.form().name.is_empty());
    }
}
