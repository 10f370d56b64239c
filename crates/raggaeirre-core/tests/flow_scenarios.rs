//! End-to-end flows through `SiteContext` with paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use raggaeirre_core::{
    ApplicationOutcome, Catalog, DonationStep, DonorDetails, Key, MessageKind, ModalKind,
    PaymentAdvance, PaymentMethod, RecordingBackend, RecordingPage, SiteContext, SiteError,
    SubmissionOutcome, ValidationError, VolunteerApplication,
};

fn site_with(backend: Arc<RecordingBackend>, page: &RecordingPage) -> Arc<SiteContext> {
    SiteContext::builder(Catalog::builtin())
        .backend(backend)
        .hooks(Arc::new(page.clone()))
        .build()
}

fn donor() -> DonorDetails {
    DonorDetails {
        name: "Wanjiru Mwangi".into(),
        email: "wanjiru@example.org".into(),
        ..Default::default()
    }
}

#[tokio::test(start_paused = true)]
async fn paypal_donation_succeeds_and_auto_closes() {
    let backend = Arc::new(RecordingBackend::new());
    let page = RecordingPage::new();
    let site = site_with(backend.clone(), &page);

    site.with_donation(|flow| {
        flow.open();
        flow.select_amount(1000);
        flow.proceed_to_payment().unwrap();
        flow.select_payment_method(PaymentMethod::Paypal);
        assert_eq!(flow.proceed_to_details().unwrap(), PaymentAdvance::Details);
        assert!(!flow.session().phone_field.visible);
        assert_eq!(flow.session().payment_summary.as_deref(), Some("KES 1,000 via paypal"));
    });

    let submit = {
        let site = site.clone();
        tokio::spawn(async move { site.submit_donation(donor()).await })
    };

    // success message is up before the auto-close delay runs out
    tokio::time::sleep(Duration::from_millis(100)).await;
    {
        let flow = site.donation();
        let message = flow.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert!(message.text.contains("1,000"));
        assert!(message.text.contains("paypal"));
        assert!(flow.is_open());
    }

    let outcome = submit.await.unwrap().unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Succeeded(_)));

    let flow = site.donation();
    assert!(!flow.is_open());
    assert_eq!(flow.step(), DonationStep::Amount);
    assert_eq!(flow.session().selected_amount, 0);
    assert!(flow.message().is_none());
    assert!(!page.scroll_locked());

    let sent = backend.donations();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].amount, 1000);
    assert_eq!(sent[0].method, PaymentMethod::Paypal);
}

#[tokio::test(start_paused = true)]
async fn missing_amount_stays_on_amount_step() {
    let page = RecordingPage::new();
    let site = site_with(Arc::new(RecordingBackend::new()), &page);

    site.with_donation(|flow| flow.open());
    let err = site.with_donation(|flow| flow.proceed_to_payment()).unwrap_err();
    assert!(matches!(
        err,
        SiteError::Validation(ValidationError::AmountRequired)
    ));

    {
        let flow = site.donation();
        assert_eq!(flow.step(), DonationStep::Amount);
        let message = flow.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "Please select or enter a donation amount.");
    }

    tokio::time::sleep(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;
    assert!(site.donation().message().is_none());
}

#[tokio::test(start_paused = true)]
async fn mpesa_requires_phone_on_details() {
    let backend = Arc::new(RecordingBackend::new());
    let page = RecordingPage::new();
    let site = site_with(backend.clone(), &page);

    site.with_donation(|flow| {
        flow.open();
        flow.set_custom_amount("750");
        flow.proceed_to_payment().unwrap();
        flow.select_payment_method(PaymentMethod::Mpesa);
        flow.proceed_to_details().unwrap();
        assert!(flow.session().phone_field.required);
    });

    let err = site.submit_donation(donor()).await.unwrap_err();
    assert!(matches!(err, SiteError::Validation(_)));
    assert!(backend.donations().is_empty());

    let with_phone = DonorDetails {
        phone: "0712 345 678".into(),
        ..donor()
    };
    let outcome = site.submit_donation(with_phone).await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Succeeded(_)));
    assert_eq!(backend.donations()[0].amount, 750);
}

#[tokio::test(start_paused = true)]
async fn bank_transfer_opens_overlay_and_escape_closes_it_first() {
    let page = RecordingPage::new();
    let site = site_with(Arc::new(RecordingBackend::new()), &page);

    site.with_donation(|flow| {
        flow.open();
        flow.select_amount(5000);
        flow.proceed_to_payment().unwrap();
        flow.select_payment_method(PaymentMethod::Bank);
        assert_eq!(flow.proceed_to_details().unwrap(), PaymentAdvance::BankInfo);
    });
    assert!(site.active_modals().bank_info);
    assert_eq!(site.donation().step(), DonationStep::Payment);

    site.handle_key(Key::Escape);
    assert!(!site.active_modals().bank_info);
    assert!(site.donation().is_open());
    assert_eq!(site.donation().step(), DonationStep::Payment);

    site.handle_key(Key::Escape);
    assert!(!site.active_modals().any());
}

#[tokio::test(start_paused = true)]
async fn closing_during_submission_drops_the_result() {
    let backend = Arc::new(raggaeirre_core::SimulatedBackend::succeeding(Duration::from_secs(2)));
    let page = RecordingPage::new();
    let site = SiteContext::builder(Catalog::builtin())
        .backend(backend)
        .hooks(Arc::new(page.clone()))
        .build();

    site.with_donation(|flow| {
        flow.open();
        flow.select_amount(500);
        flow.proceed_to_payment().unwrap();
        flow.select_payment_method(PaymentMethod::Paypal);
        flow.proceed_to_details().unwrap();
    });

    let submit = {
        let site = site.clone();
        tokio::spawn(async move { site.submit_donation(donor()).await })
    };
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(site.donation().message().unwrap().kind, MessageKind::Info);

    site.handle_backdrop_click(ModalKind::Donation);
    site.with_donation(|flow| flow.open());

    let outcome = submit.await.unwrap().unwrap();
    assert_eq!(outcome, SubmissionOutcome::Stale);

    // the reopened session is untouched
    let flow = site.donation();
    assert!(flow.is_open());
    assert!(flow.message().is_none());
    assert_eq!(flow.step(), DonationStep::Amount);
}

#[tokio::test(start_paused = true)]
async fn volunteer_application_round() {
    let backend = Arc::new(RecordingBackend::new());
    let page = RecordingPage::new();
    let site = site_with(backend.clone(), &page);

    site.with_volunteer(|flow| flow.open());
    let bad = VolunteerApplication {
        name: "Otieno".into(),
        email: "not-an-email".into(),
        ..Default::default()
    };
    assert!(site.submit_application(bad).await.is_err());
    assert_eq!(site.volunteer().message().unwrap().kind, MessageKind::Error);

    let good = VolunteerApplication {
        name: "Otieno".into(),
        email: "otieno@example.org".into(),
        interest: "mentoring".into(),
        ..Default::default()
    };
    let submit = {
        let site = site.clone();
        tokio::spawn(async move { site.submit_application(good).await })
    };
    tokio::time::sleep(Duration::from_millis(3900)).await;
    assert!(site.volunteer().is_open());
    assert_eq!(site.volunteer().message().unwrap().kind, MessageKind::Success);

    let outcome = submit.await.unwrap().unwrap();
    assert!(matches!(outcome, ApplicationOutcome::Succeeded(_)));
    assert!(!site.volunteer().is_open());
    assert_eq!(backend.applications()[0].interest, "mentoring");
}

#[tokio::test(start_paused = true)]
async fn failed_application_leaves_form_open() {
    let page = RecordingPage::new();
    let site = site_with(Arc::new(RecordingBackend::failing()), &page);

    site.with_volunteer(|flow| flow.open());
    let application = VolunteerApplication {
        name: "Otieno".into(),
        email: "otieno@example.org".into(),
        ..Default::default()
    };
    let outcome = site.submit_application(application).await.unwrap();
    assert!(matches!(outcome, ApplicationOutcome::Failed(_)));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(site.volunteer().is_open());
    assert!(page.scroll_locked());
}

#[tokio::test(start_paused = true)]
async fn closing_modal_removes_visible_message() {
    let page = RecordingPage::new();
    let site = site_with(Arc::new(RecordingBackend::new()), &page);

    site.with_donation(|flow| flow.open());
    let _ = site.with_donation(|flow| flow.proceed_to_payment());
    assert!(site.donation().message().is_some());

    site.handle_key(Key::Escape);
    assert!(site.donation().message().is_none());
}
