use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::Occasion;

/// Time slots offered by the reservation form, lunch then dinner
pub const OFFERED_TIME_SLOTS: [&str; 14] = [
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30", "18:00", "18:30", "19:00", "19:30",
    "20:00", "20:30", "21:00", "21:30",
];

/// Party size: a seated table of 1-10, or the "10+" large-party sentinel
/// which the restaurant handles by phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GuestCount {
    Seated(u8),
    LargeParty,
}

impl GuestCount {
    pub const MAX_SEATED: u8 = 10;

    pub fn seated(guests: u8) -> Result<Self, String> {
        if (1..=Self::MAX_SEATED).contains(&guests) {
            Ok(GuestCount::Seated(guests))
        } else {
            Err(format!(
                "Guest count must be between 1 and {}, got {}",
                Self::MAX_SEATED,
                guests
            ))
        }
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestCount::Seated(guests) => write!(f, "{}", guests),
            GuestCount::LargeParty => write!(f, "10+"),
        }
    }
}

impl FromStr for GuestCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "10+" {
            return Ok(GuestCount::LargeParty);
        }
        let guests: u8 = s
            .parse()
            .map_err(|_| format!("Invalid guest count: {}", s))?;
        GuestCount::seated(guests)
    }
}

impl TryFrom<String> for GuestCount {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GuestCount> for String {
    fn from(count: GuestCount) -> Self {
        count.to_string()
    }
}

/// A table reservation submitted by a guest
///
/// `date` stays a raw `YYYY-MM-DD` string so a malformed value surfaces as a
/// field validation error rather than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: GuestCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// A message sent through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Token naming a reservation attempt; unique per create call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfirmationId(String);

impl ConfirmationId {
    /// Generate a fresh confirmation token
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        ConfirmationId(format!("RES-{}", uuid[..12].to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ConfirmationId {
    fn from(value: String) -> Self {
        ConfirmationId(value)
    }
}

/// Reservation lifecycle inside the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A stored reservation, keyed by its confirmation id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub confirmation_id: ConfirmationId,
    pub request: ReservationRequest,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl ReservationRecord {
    pub fn new(confirmation_id: ConfirmationId, request: ReservationRequest) -> Self {
        Self {
            confirmation_id,
            request,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        }
    }
}

/// Canned success/failure result returned by every submission operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Acknowledgement for a created reservation, echoing the submitted payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationConfirmation {
    pub success: bool,
    pub message: String,
    pub confirmation_id: ConfirmationId,
    pub reservation: ReservationRequest,
}

/// Status view returned by the reservation lookup operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationStatusView {
    pub confirmation_id: ConfirmationId,
    pub status: ReservationStatus,
}
