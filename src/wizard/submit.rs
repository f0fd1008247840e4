use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ListingDraft, ListingStatus, LookingTo, SessionUser, StoredListing};

/// Placeholder owner recorded on every listing
pub const OWNER_PLACEHOLDER: &str = "Owner";

/// Where the user lands after a successful post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Redirect {
    Buy,
    Rent,
}

impl Redirect {
    /// PG listings are rentals and land on the rent page
    pub fn for_intent(looking_to: LookingTo) -> Self {
        match looking_to {
            LookingTo::Sell => Redirect::Buy,
            LookingTo::Rent | LookingTo::Pg => Redirect::Rent,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Buy => "/buy",
            Redirect::Rent => "/rent",
        }
    }
}

/// A stored listing plus where to send the user next
#[derive(Debug, Clone)]
pub struct Submission {
    pub listing: StoredListing,
    pub redirect: Redirect,
}

/// Millisecond timestamp id, bumped past any id already taken
pub fn next_listing_id(now: DateTime<Utc>, existing: &[StoredListing]) -> String {
    let mut candidate = now.timestamp_millis();
    while existing.iter().any(|l| l.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// "locality, city", skipping whichever is blank
pub fn location_line(draft: &ListingDraft) -> String {
    [draft.location.locality.trim(), draft.location.city.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn listing_title(draft: &ListingDraft) -> String {
    let classification = &draft.classification;
    let kind = classification
        .subtype
        .map(|s| s.label())
        .unwrap_or_else(|| classification.category.label());

    let rooms = match draft.profile.bedrooms {
        Some(n) if n > 0 => format!("{} BHK ", n),
        _ => String::new(),
    };

    let purpose = match classification.looking_to {
        LookingTo::Sell => "for Sale",
        LookingTo::Rent => "for Rent",
        LookingTo::Pg => "PG",
    };

    let locality = draft.location.locality.trim();
    if locality.is_empty() {
        format!("{}{} {}", rooms, kind, purpose)
    } else {
        format!("{}{} {} in {}", rooms, kind, purpose, locality)
    }
}

/// Build the stored record from a draft and its already-encoded media
pub fn assemble_listing(
    draft: &ListingDraft,
    images: Vec<String>,
    video: Option<String>,
    owner: Option<&SessionUser>,
    id: String,
    created_at: DateTime<Utc>,
) -> StoredListing {
    StoredListing {
        id,
        created_at,
        status: ListingStatus::Active,
        posted_by: OWNER_PLACEHOLDER.to_string(),
        owner_email: owner.map(|u| u.email.clone()),
        classification: draft.classification.clone(),
        location_details: draft.location.clone(),
        profile: draft.profile.clone(),
        amenities: draft.amenities.clone(),
        has_photos: !images.is_empty(),
        has_videos: video.is_some(),
        images,
        video,
        title: listing_title(draft),
        bedrooms_count: draft.profile.bedrooms.unwrap_or(0),
        bathrooms_count: draft.profile.bathrooms.unwrap_or(0),
        location: location_line(draft),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertySubtype;
    use crate::wizard::validation::tests::complete_draft;
    use chrono::TimeZone;

    #[test]
    fn test_redirects() {
        assert_eq!(Redirect::for_intent(LookingTo::Sell).path(), "/buy");
        assert_eq!(Redirect::for_intent(LookingTo::Rent).path(), "/rent");
        assert_eq!(Redirect::for_intent(LookingTo::Pg), Redirect::Rent);
    }

    #[test]
    fn test_id_skips_taken_values() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let draft = complete_draft();
        let taken = vec![
            assemble_listing(&draft, vec![], None, None, "1700000000000".to_string(), now),
            assemble_listing(&draft, vec![], None, None, "1700000000001".to_string(), now),
        ];
        assert_eq!(next_listing_id(now, &taken), "1700000000002");
        assert_eq!(next_listing_id(now, &[]), "1700000000000");
    }

    #[test]
    fn test_convenience_fields() {
        let draft = complete_draft();
        let owner = SessionUser {
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            phone: None,
        };
        let listing = assemble_listing(
            &draft,
            vec!["data:image/png;base64,AA==".to_string()],
            None,
            Some(&owner),
            "42".to_string(),
            Utc::now(),
        );

        assert_eq!(listing.title, "2 BHK Flat/Apartment for Sale in Koramangala");
        assert_eq!(listing.location, "Koramangala, Bangalore");
        assert_eq!(listing.bedrooms_count, 2);
        assert_eq!(listing.bathrooms_count, 2);
        assert!(listing.has_photos);
        assert!(!listing.has_videos);
        assert_eq!(listing.owner_email.as_deref(), Some("meera@example.com"));
        assert_eq!(listing.posted_by, "Owner");
        assert!(listing.is_active());
        assert_eq!(listing.to_draft(), draft);
    }

    #[test]
    fn test_title_without_rooms_or_locality() {
        let mut draft = ListingDraft::default();
        draft.classification.looking_to = LookingTo::Pg;
        draft.classification.subtype = Some(PropertySubtype::Hostel);
        assert_eq!(listing_title(&draft), "Hostel PG");
        assert_eq!(location_line(&draft), "");
    }
}
