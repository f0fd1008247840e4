pub mod json_file;
pub mod memory;
pub mod session;
pub mod traits;
pub mod types;

pub use json_file::JsonFileRepository;
pub use memory::{InMemoryRepository, InMemorySession};
pub use session::JsonFileSession;
pub use traits::{ListingRepository, SessionStore};
pub use types::{ListingQuery, SortBy, SortOrder};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{ListingDraft, PropertySubtype, StoredListing};
    use crate::wizard::submit::assemble_listing;
    use chrono::{TimeZone, Utc};

    /// A minimal active sell listing with the given id and price
    pub(crate) fn listing(id: &str, price: f64) -> StoredListing {
        let mut draft = ListingDraft::default();
        draft.classification.subtype = Some(PropertySubtype::Flat);
        draft.location.city = "Surat".to_string();
        draft.location.locality = "Adajan".to_string();
        draft.profile.bedrooms = Some(2);
        draft.profile.set_expected_price(price.to_string());

        let created_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assemble_listing(&draft, Vec::new(), None, None, id.to_string(), created_at)
    }
}
