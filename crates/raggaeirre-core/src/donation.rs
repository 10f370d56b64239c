//! Multi-step donation flow.
//!
//! ## State machine
//!
//! ```text
//!            proceed_to_payment            proceed_to_details
//!   Amount ─────────────────────▶ Payment ─────────────────────▶ Details
//!          ◀─────────────────────         ◀─────────────────────
//!            go_back_to_amount      │      go_back_to_payment
//!                                   │ method = bank
//!                                   ▼
//!                             [bank info overlay]   (step stays Payment)
//! ```
//!
//! `open()` and `close()` both reset the session to `Amount`. There is no
//! terminal state.
//!
//! ## Submission
//!
//! Submitting is split so no lock is held while the backend runs:
//!
//! 1. [`DonationFlow::begin_submission`] validates donor details, shows the
//!    "processing" message and returns a [`SubmissionTicket`].
//! 2. The caller awaits the backend.
//! 3. [`DonationFlow::finish_submission`] shows the success or error message.
//! 4. On success the caller waits and calls [`DonationFlow::auto_close`].
//!
//! The ticket carries the session epoch. Every open and close bumps the
//! epoch, so results and auto-closes for a session the user already closed
//! are dropped instead of touching the next one.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::amount::{format_kes, parse_leading_int};
use crate::catalog::Outcome;
use crate::error::{SiteError, SiteResult, ValidationError};
use crate::hooks::PageHooks;
use crate::message::{MessageId, MessageKind, MessageSlot, TransientMessage};
use crate::types::PaymentMethod;
use crate::validation;

/// A stage of the donation modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStep {
    #[default]
    Amount,
    Payment,
    Details,
}

impl DonationStep {
    /// Name used for the step's region (`amountStep`, ...) and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStep::Amount => "amount",
            DonationStep::Payment => "payment",
            DonationStep::Details => "details",
        }
    }
}

impl fmt::Display for DonationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of the phone input on the details step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhoneField {
    pub visible: bool,
    pub required: bool,
}

/// What the donor typed on the details step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorDetails {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// A validated donation, handed to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRequest {
    /// Whole KES
    pub amount: u64,
    pub method: PaymentMethod,
    pub donor: DonorDetails,
}

impl DonationRequest {
    /// Fill `{amount}` and `{method}` in a catalog message, e.g.
    /// `Thank you for your KES 1,000 donation via paypal!`
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{amount}", &format_kes(self.amount))
            .replace("{method}", self.method.as_str())
    }
}

/// Mutable state of one donation modal session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationSession {
    pub step: DonationStep,
    /// Whole KES; 0 means nothing chosen yet
    pub selected_amount: u64,
    /// Raw text of the custom amount input
    pub custom_amount: String,
    pub payment_method: Option<PaymentMethod>,
    /// `Donating KES 1,000`, set when entering the payment step
    pub amount_label: Option<String>,
    /// `KES 1,000 via paypal`, set when entering the details step
    pub payment_summary: Option<String>,
    pub phone_field: PhoneField,
    /// What the details form shows; survives going back to payment
    pub donor: DonorDetails,
}

/// Where `proceed_to_details` went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentAdvance {
    /// Step is now `Details`
    Details,
    /// Bank transfer chosen; overlay opened, step unchanged
    BankInfo,
}

/// Proof that a submission was started, tied to one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    epoch: u64,
    request: DonationRequest,
}

impl SubmissionTicket {
    pub fn request(&self) -> &DonationRequest {
        &self.request
    }

    /// Session epoch the ticket belongs to
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Result of applying a backend answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Success message shown; caller should schedule [`DonationFlow::auto_close`]
    Succeeded(MessageId),
    /// Error message shown; session left as it was
    Failed(MessageId),
    /// The session was closed while the backend ran; nothing changed
    Stale,
}

/// Text shown while the backend runs
pub const PROCESSING_TEXT: &str = "Processing your donation...";
/// Success text; `{amount}` and `{method}` are filled from the request
pub const SUCCESS_TEMPLATE: &str = "Thank you for your {amount} donation via {method}!";
/// Text shown when the backend fails
pub const FAILURE_TEXT: &str = "There was an error processing your donation. Please try again.";

/// Built-in success/error texts
pub fn default_messages() -> Outcome {
    Outcome {
        success: SUCCESS_TEMPLATE.into(),
        error: FAILURE_TEXT.into(),
    }
}

/// Donation modal controller
pub struct DonationFlow {
    presets: Vec<u64>,
    hooks: Arc<dyn PageHooks>,
    session: DonationSession,
    message: MessageSlot,
    texts: Outcome,
    open: bool,
    bank_info_open: bool,
    epoch: u64,
}

impl fmt::Debug for DonationFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DonationFlow")
            .field("open", &self.open)
            .field("session", &self.session)
            .field("bank_info_open", &self.bank_info_open)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl DonationFlow {
    /// Create a closed flow offering `presets` (KES).
    pub fn new(presets: Vec<u64>, hooks: Arc<dyn PageHooks>) -> Self {
        Self {
            presets,
            hooks,
            session: DonationSession::default(),
            message: MessageSlot::new(),
            texts: default_messages(),
            open: false,
            bank_info_open: false,
            epoch: 0,
        }
    }

    /// Use catalog texts for the success and error messages.
    pub fn with_messages(mut self, texts: Outcome) -> Self {
        self.texts = texts;
        self
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// Show the modal at the amount step and lock page scroll.
    pub fn open(&mut self) {
        self.reset();
        self.open = true;
        self.epoch += 1;
        self.hooks.set_scroll_locked(true);
        tracing::debug!(epoch = self.epoch, "Donation modal opened");
    }

    /// Hide the modal, restore scroll and forget everything entered.
    pub fn close(&mut self) {
        self.open = false;
        self.bank_info_open = false;
        self.epoch += 1;
        self.reset();
        self.hooks.set_scroll_locked(false);
        tracing::debug!(epoch = self.epoch, "Donation modal closed");
    }

    fn reset(&mut self) {
        self.session = DonationSession::default();
        self.message.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_bank_info_open(&self) -> bool {
        self.bank_info_open
    }

    /// Open the bank transfer overlay directly (e.g. from the contact section).
    pub fn open_bank_info(&mut self) {
        self.bank_info_open = true;
    }

    /// Hide the bank transfer overlay. The donation step is untouched.
    pub fn close_bank_info(&mut self) {
        self.bank_info_open = false;
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn step(&self) -> DonationStep {
        self.session.step
    }

    pub fn session(&self) -> &DonationSession {
        &self.session
    }

    pub fn presets(&self) -> &[u64] {
        &self.presets
    }

    pub fn message(&self) -> Option<&TransientMessage> {
        self.message.current()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The preset button currently highlighted, if any.
    ///
    /// A non-empty custom amount always wins, so no preset is highlighted
    /// while one is typed.
    pub fn selected_preset(&self) -> Option<u64> {
        if !self.session.custom_amount.is_empty() {
            return None;
        }
        let amount = self.session.selected_amount;
        (amount > 0 && self.presets.contains(&amount)).then_some(amount)
    }

    pub fn is_preset_selected(&self, amount: u64) -> bool {
        self.selected_preset() == Some(amount)
    }

    /// Whether the radio control for `method` is checked
    pub fn is_method_checked(&self, method: PaymentMethod) -> bool {
        self.session.payment_method == Some(method)
    }

    // ------------------------------------------------------------------
    // Amount step
    // ------------------------------------------------------------------

    /// Choose a preset (or any) amount; clears the custom amount input.
    pub fn select_amount(&mut self, amount: u64) {
        self.session.selected_amount = amount;
        self.session.custom_amount.clear();
        tracing::debug!(amount, "Donation amount selected");
    }

    /// Track typing in the custom amount input.
    ///
    /// Non-empty text replaces the selected amount and clears the preset
    /// highlight. Clearing the field leaves the last amount in place.
    pub fn set_custom_amount(&mut self, text: impl Into<String>) {
        self.session.custom_amount = text.into();
        if !self.session.custom_amount.is_empty() {
            self.session.selected_amount = parse_leading_int(&self.session.custom_amount);
        }
    }

    /// Validate the amount and move to the payment step.
    pub fn proceed_to_payment(&mut self) -> SiteResult<()> {
        self.expect_step(DonationStep::Amount, "proceed to payment")?;

        if !self.session.custom_amount.is_empty() {
            self.session.selected_amount = parse_leading_int(&self.session.custom_amount);
        }

        if self.session.selected_amount == 0 {
            return Err(self.reject(ValidationError::AmountRequired));
        }

        self.session.amount_label =
            Some(format!("Donating {}", format_kes(self.session.selected_amount)));
        self.session.step = DonationStep::Payment;
        tracing::debug!(amount = self.session.selected_amount, "Donation step: payment");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Payment step
    // ------------------------------------------------------------------

    /// Record the payment method; exactly one method is ever checked.
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.session.payment_method = Some(method);
        tracing::debug!(%method, "Payment method selected");
    }

    /// Go back to the amount step, keeping what was entered.
    pub fn go_back_to_amount(&mut self) -> SiteResult<()> {
        self.expect_step(DonationStep::Payment, "go back to amount")?;
        self.session.step = DonationStep::Amount;
        tracing::debug!("Donation step: amount");
        Ok(())
    }

    /// Validate the payment method and move to the details step.
    ///
    /// Bank transfers have no details form: the bank overlay opens instead
    /// and the step stays at `Payment`.
    pub fn proceed_to_details(&mut self) -> SiteResult<PaymentAdvance> {
        self.expect_step(DonationStep::Payment, "proceed to details")?;

        let Some(method) = self.session.payment_method else {
            return Err(self.reject(ValidationError::PaymentMethodRequired));
        };

        if method == PaymentMethod::Bank {
            self.bank_info_open = true;
            tracing::debug!("Bank transfer chosen, showing bank details");
            return Ok(PaymentAdvance::BankInfo);
        }

        self.session.payment_summary = Some(format!(
            "{} via {}",
            format_kes(self.session.selected_amount),
            method
        ));
        let needs_phone = method.needs_phone();
        self.session.phone_field = PhoneField {
            visible: needs_phone,
            required: needs_phone,
        };
        self.session.step = DonationStep::Details;
        tracing::debug!(%method, "Donation step: details");
        Ok(PaymentAdvance::Details)
    }

    // ------------------------------------------------------------------
    // Details step
    // ------------------------------------------------------------------

    /// Mutable access for the details form bindings
    pub fn donor_mut(&mut self) -> &mut DonorDetails {
        &mut self.session.donor
    }

    /// Go back to the payment step, keeping what was entered.
    pub fn go_back_to_payment(&mut self) -> SiteResult<()> {
        self.expect_step(DonationStep::Details, "go back to payment")?;
        self.session.step = DonationStep::Payment;
        tracing::debug!("Donation step: payment");
        Ok(())
    }

    /// Store `donor` as the form contents, validate it and show the
    /// processing message.
    pub fn begin_submission(&mut self, donor: DonorDetails) -> SiteResult<SubmissionTicket> {
        self.expect_step(DonationStep::Details, "submit donation")?;
        let method = self.session.payment_method.ok_or_else(|| {
            SiteError::InvalidTransition("details step reached without a payment method".into())
        })?;

        self.session.donor = donor;
        if let Err(e) = self.check_donor(&self.session.donor) {
            return Err(self.reject(e));
        }

        let request = DonationRequest {
            amount: self.session.selected_amount,
            method,
            donor: self.session.donor.clone(),
        };
        self.message.show(PROCESSING_TEXT, MessageKind::Info);
        tracing::info!(amount = request.amount, %method, "Submitting donation");

        Ok(SubmissionTicket {
            epoch: self.epoch,
            request,
        })
    }

    fn check_donor(&self, donor: &DonorDetails) -> Result<(), ValidationError> {
        validation::require("name", &donor.name)?;
        validation::require_email(&donor.email)?;
        validation::check_phone(&donor.phone, self.session.phone_field.required)
    }

    /// Apply the backend's answer for `ticket`.
    pub fn finish_submission(
        &mut self,
        ticket: &SubmissionTicket,
        result: SiteResult<()>,
    ) -> SubmissionOutcome {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                "Dropping donation result for a closed session"
            );
            return SubmissionOutcome::Stale;
        }

        match result {
            Ok(()) => {
                tracing::info!(amount = ticket.request.amount, "Donation accepted");
                SubmissionOutcome::Succeeded(
                    self.message
                        .show(ticket.request.render(&self.texts.success), MessageKind::Success),
                )
            }
            Err(e) => {
                tracing::error!(error = %e, "Donation submission failed");
                SubmissionOutcome::Failed(
                    self.message.show(self.texts.error.clone(), MessageKind::Error),
                )
            }
        }
    }

    /// Close the modal if it is still on the session `epoch` belongs to.
    ///
    /// Returns whether the modal was closed.
    pub fn auto_close(&mut self, epoch: u64) -> bool {
        if self.open && self.epoch == epoch {
            self.close();
            true
        } else {
            false
        }
    }

    /// Show a notice inside the modal.
    pub fn show_message(&mut self, text: impl Into<String>, kind: MessageKind) -> MessageId {
        self.message.show(text, kind)
    }

    /// Drop the message `id` if it is still showing.
    pub fn expire_message(&mut self, id: MessageId) -> bool {
        self.message.expire(id)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn expect_step(&self, expected: DonationStep, action: &str) -> SiteResult<()> {
        if !self.open {
            return Err(SiteError::InvalidTransition(format!(
                "cannot {} while the donation modal is closed",
                action
            )));
        }
        if self.session.step != expected {
            return Err(SiteError::InvalidTransition(format!(
                "cannot {} from the {} step",
                action, self.session.step
            )));
        }
        Ok(())
    }

    /// Show a validation failure inline and turn it into an error.
    fn reject(&mut self, error: ValidationError) -> SiteError {
        tracing::warn!(step = %self.session.step, %error, "Donation input rejected");
        self.message.show(error.to_string(), MessageKind::Error);
        SiteError::Validation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::RecordingPage;

    fn flow() -> (DonationFlow, RecordingPage) {
        let page = RecordingPage::new();
        let flow = DonationFlow::new(vec![500, 1000, 2500, 5000, 10000], Arc::new(page.clone()));
        (flow, page)
    }

    fn donor() -> DonorDetails {
        DonorDetails {
            name: "Wanjiku".into(),
            email: "wanjiku@example.org".into(),
            phone: String::new(),
            message: String::new(),
        }
    }

    fn at_details(method: PaymentMethod) -> DonationFlow {
        let (mut flow, _) = flow();
        flow.open();
        flow.select_amount(1000);
        flow.proceed_to_payment().unwrap();
        flow.select_payment_method(method);
        flow.proceed_to_details().unwrap();
        flow
    }

    #[test]
    fn test_open_starts_at_amount_and_locks_scroll() {
        let (mut flow, page) = flow();
        flow.open();

        assert!(flow.is_open());
        assert_eq!(flow.step(), DonationStep::Amount);
        assert!(page.scroll_locked());
    }

    #[test]
    fn test_select_amount_highlights_single_preset() {
        let (mut flow, _) = flow();
        flow.open();

        flow.select_amount(500);
        flow.select_amount(2500);

        let highlighted: Vec<_> = flow
            .presets()
            .iter()
            .copied()
            .filter(|a| flow.is_preset_selected(*a))
            .collect();
        assert_eq!(highlighted, vec![2500]);
        assert_eq!(flow.session().selected_amount, 2500);
    }

    #[test]
    fn test_non_preset_amount_highlights_nothing() {
        let (mut flow, _) = flow();
        flow.open();
        flow.select_amount(750);

        assert_eq!(flow.selected_preset(), None);
        assert_eq!(flow.session().selected_amount, 750);
    }

    #[test]
    fn test_select_amount_clears_custom_input() {
        let (mut flow, _) = flow();
        flow.open();
        flow.set_custom_amount("300");
        flow.select_amount(1000);

        assert!(flow.session().custom_amount.is_empty());
        assert_eq!(flow.selected_preset(), Some(1000));
    }

    #[test]
    fn test_custom_amount_overrides_preset() {
        let (mut flow, _) = flow();
        flow.open();
        flow.select_amount(1000);
        flow.set_custom_amount("1500");

        assert_eq!(flow.selected_preset(), None);
        flow.proceed_to_payment().unwrap();
        assert_eq!(flow.session().selected_amount, 1500);
        assert_eq!(
            flow.session().amount_label.as_deref(),
            Some("Donating KES 1,500")
        );
    }

    #[test]
    fn test_non_numeric_custom_amount_is_rejected() {
        let (mut flow, _) = flow();
        flow.open();
        flow.select_amount(1000);
        flow.set_custom_amount("lots");

        let err = flow.proceed_to_payment().unwrap_err();
        assert!(matches!(
            err,
            SiteError::Validation(ValidationError::AmountRequired)
        ));
        assert_eq!(flow.step(), DonationStep::Amount);
    }

    #[test]
    fn test_proceed_without_amount_shows_error() {
        let (mut flow, _) = flow();
        flow.open();

        assert!(flow.proceed_to_payment().is_err());
        assert_eq!(flow.step(), DonationStep::Amount);

        let message = flow.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "Please select or enter a donation amount.");
    }

    #[test]
    fn test_payment_method_required() {
        let (mut flow, _) = flow();
        flow.open();
        flow.select_amount(500);
        flow.proceed_to_payment().unwrap();

        let err = flow.proceed_to_details().unwrap_err();
        assert!(matches!(
            err,
            SiteError::Validation(ValidationError::PaymentMethodRequired)
        ));
        assert_eq!(flow.step(), DonationStep::Payment);
        assert_eq!(flow.message().unwrap().text, "Please select a payment method.");
    }

    #[test]
    fn test_single_checked_method() {
        let (mut flow, _) = flow();
        flow.open();
        flow.select_payment_method(PaymentMethod::Mpesa);
        flow.select_payment_method(PaymentMethod::Paypal);

        let checked: Vec<_> = PaymentMethod::ALL
            .into_iter()
            .filter(|m| flow.is_method_checked(*m))
            .collect();
        assert_eq!(checked, vec![PaymentMethod::Paypal]);
    }

    #[test]
    fn test_bank_opens_overlay_without_advancing() {
        let (mut flow, _) = flow();
        flow.open();
        flow.select_amount(5000);
        flow.proceed_to_payment().unwrap();
        flow.select_payment_method(PaymentMethod::Bank);

        assert_eq!(flow.proceed_to_details().unwrap(), PaymentAdvance::BankInfo);
        assert!(flow.is_bank_info_open());
        assert_eq!(flow.step(), DonationStep::Payment);

        flow.close_bank_info();
        assert!(!flow.is_bank_info_open());
        assert_eq!(flow.step(), DonationStep::Payment);
    }

    #[test]
    fn test_phone_field_only_for_mpesa() {
        let flow = at_details(PaymentMethod::Mpesa);
        assert_eq!(
            flow.session().phone_field,
            PhoneField {
                visible: true,
                required: true
            }
        );

        let flow = at_details(PaymentMethod::Paypal);
        assert_eq!(flow.session().phone_field, PhoneField::default());
        assert_eq!(
            flow.session().payment_summary.as_deref(),
            Some("KES 1,000 via paypal")
        );
    }

    #[test]
    fn test_back_navigation_keeps_data() {
        let mut flow = at_details(PaymentMethod::Paypal);
        *flow.donor_mut() = donor();

        flow.go_back_to_payment().unwrap();
        assert_eq!(flow.step(), DonationStep::Payment);
        assert_eq!(flow.session().payment_method, Some(PaymentMethod::Paypal));
        assert_eq!(flow.session().donor, donor());

        flow.go_back_to_amount().unwrap();
        assert_eq!(flow.step(), DonationStep::Amount);
        assert_eq!(flow.session().selected_amount, 1000);
        assert_eq!(flow.selected_preset(), Some(1000));
    }

    #[test]
    fn test_details_survive_back_and_forward() {
        let mut flow = at_details(PaymentMethod::Mpesa);
        flow.donor_mut().name = "Wanjiku".into();
        flow.donor_mut().phone = "0712345678".into();

        flow.go_back_to_payment().unwrap();
        assert_eq!(flow.session().donor.name, "Wanjiku");
        flow.proceed_to_details().unwrap();
        assert_eq!(flow.step(), DonationStep::Details);
        assert_eq!(flow.session().donor.name, "Wanjiku");
        assert_eq!(flow.session().donor.phone, "0712345678");

        flow.close();
        assert_eq!(flow.session().donor, DonorDetails::default());
        flow.open();
        assert_eq!(flow.session().donor, DonorDetails::default());
    }

    #[test]
    fn test_rejected_details_stay_in_form() {
        let mut flow = at_details(PaymentMethod::Paypal);
        let typed = DonorDetails {
            email: "not-an-email".into(),
            ..donor()
        };

        assert!(flow.begin_submission(typed.clone()).is_err());
        assert_eq!(flow.session().donor, typed);
    }

    #[test]
    fn test_catalog_texts_replace_builtin_messages() {
        let (flow, _) = flow();
        let mut flow = flow.with_messages(Outcome {
            success: "Asante! {amount} received by {method}.".into(),
            error: "Please try again later.".into(),
        });
        flow.open();
        flow.select_amount(2500);
        flow.proceed_to_payment().unwrap();
        flow.select_payment_method(PaymentMethod::Paypal);
        flow.proceed_to_details().unwrap();

        let ticket = flow.begin_submission(donor()).unwrap();
        flow.finish_submission(&ticket, Ok(()));
        assert_eq!(flow.message().unwrap().text, "Asante! KES 2,500 received by paypal.");

        let ticket = flow.begin_submission(donor()).unwrap();
        flow.finish_submission(&ticket, Err(SiteError::Submission("down".into())));
        assert_eq!(flow.message().unwrap().text, "Please try again later.");
    }

    #[test]
    fn test_back_from_wrong_step_is_rejected() {
        let (mut flow, _) = flow();
        flow.open();
        assert!(matches!(
            flow.go_back_to_payment(),
            Err(SiteError::InvalidTransition(_))
        ));
        assert!(matches!(
            flow.go_back_to_amount(),
            Err(SiteError::InvalidTransition(_))
        ));
        assert_eq!(flow.step(), DonationStep::Amount);
    }

    #[test]
    fn test_transitions_require_open_modal() {
        let (mut flow, _) = flow();
        flow.select_amount(1000);
        assert!(matches!(
            flow.proceed_to_payment(),
            Err(SiteError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_mpesa_submission_requires_phone() {
        let mut flow = at_details(PaymentMethod::Mpesa);

        let err = flow.begin_submission(donor()).unwrap_err();
        assert!(matches!(
            err,
            SiteError::Validation(ValidationError::MissingField("phone number"))
        ));
        assert_eq!(flow.message().unwrap().kind, MessageKind::Error);

        let ticket = flow
            .begin_submission(DonorDetails {
                phone: "0712345678".into(),
                ..donor()
            })
            .unwrap();
        assert_eq!(ticket.request().method, PaymentMethod::Mpesa);
        assert_eq!(flow.message().unwrap().text, PROCESSING_TEXT);
    }

    #[test]
    fn test_successful_submission_message() {
        let mut flow = at_details(PaymentMethod::Paypal);
        let ticket = flow.begin_submission(donor()).unwrap();

        let outcome = flow.finish_submission(&ticket, Ok(()));
        assert!(matches!(outcome, SubmissionOutcome::Succeeded(_)));

        let message = flow.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, "Thank you for your KES 1,000 donation via paypal!");

        assert!(flow.auto_close(ticket.epoch()));
        assert!(!flow.is_open());
        assert_eq!(flow.step(), DonationStep::Amount);
        assert!(flow.message().is_none());
    }

    #[test]
    fn test_failed_submission_keeps_step() {
        let mut flow = at_details(PaymentMethod::Paypal);
        let ticket = flow.begin_submission(donor()).unwrap();

        let outcome =
            flow.finish_submission(&ticket, Err(SiteError::Submission("gateway down".into())));
        assert!(matches!(outcome, SubmissionOutcome::Failed(_)));
        assert_eq!(flow.step(), DonationStep::Details);
        assert_eq!(flow.message().unwrap().text, FAILURE_TEXT);
        assert!(flow.is_open());
    }

    #[test]
    fn test_result_for_closed_session_is_dropped() {
        let mut flow = at_details(PaymentMethod::Paypal);
        let ticket = flow.begin_submission(donor()).unwrap();

        flow.close();
        flow.open();

        assert_eq!(flow.finish_submission(&ticket, Ok(())), SubmissionOutcome::Stale);
        assert!(flow.message().is_none());
        assert!(!flow.auto_close(ticket.epoch()));
        assert!(flow.is_open());
    }

    #[test]
    fn test_close_resets_everything() {
        let (mut flow, page) = flow();
        flow.open();
        flow.set_custom_amount("42");
        flow.proceed_to_payment().unwrap();
        flow.select_payment_method(PaymentMethod::Bank);
        flow.proceed_to_details().unwrap();
        flow.show_message("note", MessageKind::Info);

        flow.close();

        assert!(!flow.is_open());
        assert!(!flow.is_bank_info_open());
        assert_eq!(flow.session(), &DonationSession::default());
        assert!(flow.message().is_none());
        assert!(!page.scroll_locked());
    }
}
