use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::{
    Amenities, Classification, ListingDraft, LocationDetails, LookingTo, PropertyProfile,
};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Inactive,
}

/// A submitted listing as kept in the persisted list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredListing {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: ListingStatus,
    /// Owner placeholder; there is no account model behind it
    pub posted_by: String,
    pub owner_email: Option<String>,

    pub classification: Classification,
    pub location_details: LocationDetails,
    pub profile: PropertyProfile,
    pub amenities: Amenities,

    /// `data:<mime>;base64,...` strings, in attachment order
    pub images: Vec<String>,
    pub video: Option<String>,

    pub title: String,
    pub bedrooms_count: u32,
    pub bathrooms_count: u32,
    /// "locality, city"
    pub location: String,
    pub has_photos: bool,
    pub has_videos: bool,
}

impl StoredListing {
    pub fn looking_to(&self) -> LookingTo {
        self.classification.looking_to
    }

    /// Numeric asking price, if the stored text parses
    pub fn price(&self) -> Option<f64> {
        self.profile
            .expected_price()
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
    }

    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }

    /// Recovers the draft portion of the record
    pub fn to_draft(&self) -> ListingDraft {
        ListingDraft {
            classification: self.classification.clone(),
            location: self.location_details.clone(),
            profile: self.profile.clone(),
            amenities: self.amenities.clone(),
        }
    }
}
