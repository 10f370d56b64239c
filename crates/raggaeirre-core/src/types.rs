//! Core types shared by the flows and the catalog

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// How a donor pays.
///
/// The lowercase form (`mpesa`, `paypal`, `bank`) is what appears in
/// summaries and the thank-you message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// M-Pesa mobile money; the only method that asks for a phone number
    Mpesa,
    /// PayPal or card
    Paypal,
    /// Direct bank transfer; shows bank details instead of a details form
    Bank,
}

impl PaymentMethod {
    /// All methods in display order
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Mpesa, PaymentMethod::Paypal, PaymentMethod::Bank];

    /// Short identifier used in markup, summaries and CLI flags
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "mpesa",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Bank => "bank",
        }
    }

    /// Whether choosing this method collects a phone number on the details step
    pub fn needs_phone(&self) -> bool {
        matches!(self, PaymentMethod::Mpesa)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mpesa" | "m-pesa" => Ok(PaymentMethod::Mpesa),
            "paypal" => Ok(PaymentMethod::Paypal),
            "bank" => Ok(PaymentMethod::Bank),
            other => Err(SiteError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// Kind of gallery item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still photo
    Image,
    /// Local video clip, shown with a thumbnail in the grid
    Video,
}

/// A single photo or video in the media gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Stable identifier
    pub id: u32,
    /// Image or video
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Path of the full-size media
    pub src: String,
    /// Grid thumbnail (videos); falls back to `src`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Caption title
    pub title: String,
    /// Longer caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MediaItem {
    /// Image the grid tile shows
    pub fn tile_src(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.src)
    }

    /// True for video items
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Which overlay a key press or click refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    /// Gallery lightbox
    Media,
    /// Donation flow
    Donation,
    /// Volunteer application
    Volunteer,
    /// Bank transfer details (side overlay of the donation flow)
    BankInfo,
}
