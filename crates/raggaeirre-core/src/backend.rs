//! Where submissions go.
//!
//! The site has no payment processor yet; [`SimulatedBackend`] waits a fixed
//! delay and answers with a configured outcome. A real backend implements
//! [`SubmissionBackend`] and plugs into the same flows, whose success and
//! failure branches are both live.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::config::{SimulatedOutcome, SiteConfig};
use crate::donation::DonationRequest;
use crate::error::{SiteError, SiteResult};
use crate::volunteer::VolunteerApplication;

/// Accepts donations and volunteer applications
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    async fn submit_donation(&self, request: &DonationRequest) -> SiteResult<()>;

    async fn submit_application(&self, application: &VolunteerApplication) -> SiteResult<()>;
}

/// Fixed-delay stand-in for a real backend
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedBackend {
    pub fn new(delay: Duration, outcome: SimulatedOutcome) -> Self {
        Self { delay, outcome }
    }

    /// Always succeeds after `delay`
    pub fn succeeding(delay: Duration) -> Self {
        Self::new(delay, SimulatedOutcome::Succeed)
    }

    /// Always fails after `delay`
    pub fn failing(delay: Duration) -> Self {
        Self::new(delay, SimulatedOutcome::Fail)
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.timings.submission_delay(), config.simulated_outcome)
    }

    async fn answer(&self, what: &str) -> SiteResult<()> {
        tokio::time::sleep(self.delay).await;
        match self.outcome {
            SimulatedOutcome::Succeed => Ok(()),
            SimulatedOutcome::Fail => Err(SiteError::Submission(format!(
                "simulated {} failure",
                what
            ))),
        }
    }
}

#[async_trait]
impl SubmissionBackend for SimulatedBackend {
    async fn submit_donation(&self, request: &DonationRequest) -> SiteResult<()> {
        tracing::debug!(amount = request.amount, method = %request.method, "Simulated donation");
        self.answer("donation").await
    }

    async fn submit_application(&self, application: &VolunteerApplication) -> SiteResult<()> {
        tracing::debug!(name = %application.name, "Simulated volunteer application");
        self.answer("application").await
    }
}

/// Records what was submitted and answers immediately
#[derive(Debug, Default)]
pub struct RecordingBackend {
    fail: bool,
    donations: Mutex<Vec<DonationRequest>>,
    applications: Mutex<Vec<VolunteerApplication>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recording backend that rejects everything
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn donations(&self) -> Vec<DonationRequest> {
        self.donations.lock().clone()
    }

    pub fn applications(&self) -> Vec<VolunteerApplication> {
        self.applications.lock().clone()
    }

    fn result(&self) -> SiteResult<()> {
        if self.fail {
            Err(SiteError::Submission("rejected by recording backend".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SubmissionBackend for RecordingBackend {
    async fn submit_donation(&self, request: &DonationRequest) -> SiteResult<()> {
        self.donations.lock().push(request.clone());
        self.result()
    }

    async fn submit_application(&self, application: &VolunteerApplication) -> SiteResult<()> {
        self.applications.lock().push(application.clone());
        self.result()
    }
}
