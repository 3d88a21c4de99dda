use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Weekday;

/// A recurring chef's special
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Special {
    pub id: u32,
    pub name: String,
    #[serde(rename = "shortDescription")]
    pub short_description: String,
    #[serde(rename = "fullDescription")]
    pub full_description: String,
    pub price: Decimal,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "isPopular")]
    pub is_popular: bool,
    /// Non-empty; enforced by the fixture store at load time
    #[serde(rename = "availableDays")]
    pub available_days: Vec<Weekday>,
}

impl Special {
    pub fn runs_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }
}
