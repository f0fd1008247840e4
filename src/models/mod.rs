pub mod draft;
pub mod listing;
pub mod session;

pub use draft::{
    Amenities, AreaMeasurement, AreaUnit, Classification, ListingDraft, LocationDetails,
    LookingTo, PropertyCategory, PropertyProfile, PropertySubtype,
};
pub use listing::{ListingStatus, StoredListing};
pub use session::SessionUser;
