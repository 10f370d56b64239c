//! Static site content: gallery items, donation presets, bank and contact
//! details, impact numbers and canned messages.
//!
//! The flows only ever read the catalog. [`Catalog::builtin`] carries the
//! foundation's published content; a JSON file with the same shape can
//! replace it wholesale (see [`Catalog::from_json_file`]).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::{donation, volunteer};
use crate::types::{MediaItem, MediaKind, PaymentMethod};

/// Everything the site shows that is not user input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub media: Vec<MediaItem>,
    pub donation: DonationOptions,
    pub bank: BankInfo,
    pub contact: ContactInfo,
    pub stats: ImpactStats,
    pub navigation: Vec<NavLink>,
    pub messages: Messages,
}

/// Preset amounts and payment method presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationOptions {
    /// Preset buttons, in KES
    pub amounts: Vec<u64>,
    pub payment_methods: BTreeMap<PaymentMethod, PaymentMethodInfo>,
}

/// How a payment method card is labelled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodInfo {
    pub name: String,
    pub description: String,
    /// Font Awesome class, e.g. `fas fa-mobile-alt`
    pub icon: String,
    /// CSS colour
    pub color: String,
}

/// Details shown in the bank transfer overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankInfo {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub swift_code: String,
    pub branch: String,
}

impl BankInfo {
    /// Label/value pairs in the order the overlay lists them
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Bank Name", self.bank_name.as_str()),
            ("Account Name", self.account_name.as_str()),
            ("Account Number", self.account_number.as_str()),
            ("SWIFT Code", self.swift_code.as_str()),
            ("Branch", self.branch.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub address: String,
}

/// Headline numbers for the "Our Impact in Numbers" counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactStats {
    pub students_supported: u64,
    pub active_programs: u64,
    pub communities_reached: u64,
    /// Percent
    pub success_rate: u64,
}

impl ImpactStats {
    /// Counter texts as they appear before animation (`50+`, `95%`)
    pub fn counter_texts(&self) -> [(&'static str, String); 4] {
        [
            ("Students Supported", format!("{}+", self.students_supported)),
            ("Active Programs", format!("{}+", self.active_programs)),
            ("Communities Reached", format!("{}+", self.communities_reached)),
            ("Success Rate", format!("{}%", self.success_rate)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Anchor, e.g. `#about`
    pub href: String,
    pub text: String,
}

impl NavLink {
    /// Section id without the leading `#`
    pub fn section_id(&self) -> &str {
        self.href.trim_start_matches('#')
    }
}

/// Success/error text pair for one action
///
/// The donation success text may use `{amount}` and `{method}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub donation: Outcome,
    pub volunteer: Outcome,
    pub copy: Outcome,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&raw)?;
        catalog.check()?;
        tracing::debug!(path = %path.display(), items = catalog.media.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Reject catalogs the flows cannot work with.
    ///
    /// Presets must be positive and every payment method needs card text.
    pub fn check(&self) -> SiteResult<()> {
        if let Some(zero) = self.donation.amounts.iter().find(|a| **a == 0) {
            return Err(SiteError::Config(format!(
                "donation preset {} must be positive",
                zero
            )));
        }
        for method in PaymentMethod::ALL {
            if !self.donation.payment_methods.contains_key(&method) {
                return Err(SiteError::Config(format!(
                    "missing payment method info for {}",
                    method
                )));
            }
        }
        Ok(())
    }

    /// Card text for a payment method
    pub fn payment_method(&self, method: PaymentMethod) -> Option<&PaymentMethodInfo> {
        self.donation.payment_methods.get(&method)
    }

    /// The foundation's published content.
    pub fn builtin() -> Self {
        Self {
            media: builtin_media(),
            donation: DonationOptions {
                amounts: vec![500, 1000, 2500, 5000, 10000],
                payment_methods: BTreeMap::from([
                    (
                        PaymentMethod::Mpesa,
                        method_info("M-Pesa", "Pay via M-Pesa mobile money", "fas fa-mobile-alt", "#008000"),
                    ),
                    (
                        PaymentMethod::Paypal,
                        method_info("PayPal", "Pay with PayPal or credit card", "fas fa-credit-card", "#003087"),
                    ),
                    (
                        PaymentMethod::Bank,
                        method_info("Bank Transfer", "Direct bank transfer", "fas fa-university", "#ff7e00"),
                    ),
                ]),
            },
            bank: BankInfo {
                bank_name: "Kenya Commercial Bank (KCB)".into(),
                account_name: "Raggaeirre Support Foundation".into(),
                account_number: "1234567890".into(),
                swift_code: "KCBLKENX".into(),
                branch: "Machakos Branch".into(),
            },
            contact: ContactInfo {
                emails: vec![
                    "info@raggaeirresupport.org".into(),
                    "nasiombeliz@gmail.com".into(),
                ],
                phones: vec!["+254 735 967 950".into(), "+254 720 215 589".into()],
                address: "Machakos, County, 2805-90100".into(),
            },
            stats: ImpactStats {
                students_supported: 50,
                active_programs: 15,
                communities_reached: 8,
                success_rate: 95,
            },
            navigation: [
                ("#home", "Home"),
                ("#about", "About"),
                ("#programs", "Programs"),
                ("#testimonials", "Testimonials"),
                ("#stories", "Stories"),
                ("#contact", "Contact"),
            ]
            .into_iter()
            .map(|(href, text)| NavLink {
                href: href.into(),
                text: text.into(),
            })
            .collect(),
            messages: Messages {
                donation: donation::default_messages(),
                volunteer: volunteer::default_messages(),
                copy: Outcome {
                    success: "Copied to clipboard!".into(),
                    error: "Failed to copy to clipboard.".into(),
                },
            },
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn method_info(name: &str, description: &str, icon: &str, color: &str) -> PaymentMethodInfo {
    PaymentMethodInfo {
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
        color: color.into(),
    }
}

fn builtin_media() -> Vec<MediaItem> {
    let image = |id, src: &str, title: &str, description: &str| MediaItem {
        id,
        kind: MediaKind::Image,
        src: src.into(),
        thumbnail: None,
        title: title.into(),
        description: Some(description.into()),
    };
    let video = |id, src: &str, thumbnail: &str, title: &str, description: &str| MediaItem {
        id,
        kind: MediaKind::Video,
        src: src.into(),
        thumbnail: Some(thumbnail.into()),
        title: title.into(),
        description: Some(description.into()),
    };

    vec![
        image(
            1,
            "images/classroom-learning.jpg",
            "Children Learning Together",
            "Students engaged in classroom activities, showing the power of education in transforming lives.",
        ),
        image(
            2,
            "images/Patron-students.jpg",
            "Facilitator with Students",
            "Our organization facilitator working directly with children in the classroom.",
        ),
        video(
            3,
            "videos/student-success-story.mp4",
            "images/testimonial-student-1.jpg",
            "Student Success Story",
            "Khamati Elvina shares her journey and how the foundation changed her life.",
        ),
        image(
            4,
            "images/children-lineup.jpg",
            "School Children",
            "Children lined up at school, some with shoes, others without, but all sharing the same dreams.",
        ),
        video(
            5,
            "videos/ryan-testimonial.mp4",
            "images/testimonial-student-2.jpg",
            "Ryan's Testimonial",
            "Khamati Ryan talks about how educational support has given him hope for the future.",
        ),
        image(
            6,
            "images/School-washroom.jpg",
            "School Facilities",
            "The current state of school facilities, highlighting the need for infrastructure improvements.",
        ),
        video(
            7,
            "videos/siblings-journey.mp4",
            "images/testimonial-students-3.jpg",
            "Siblings' Journey",
            "Elvina and Ryan, studying together and supporting each other through their educational journey.",
        ),
        image(
            8,
            "images/school-urinary.jpg",
            "Infrastructure Challenges",
            "Current school infrastructure showing the urgent need for improvements and support.",
        ),
    ]
}
