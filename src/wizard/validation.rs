use crate::models::draft::is_filled;
use crate::models::ListingDraft;

/// Minimum description length accepted on the profile step, counted in
/// UTF-16 code units as a browser text field reports it. An emoji outside
/// the Basic Multilingual Plane counts as two.
pub const MIN_DESCRIPTION_CHARS: usize = 50;

/// Basic details: intent and category chosen
pub fn is_step1_valid(draft: &ListingDraft) -> bool {
    !draft.classification.looking_to.label().is_empty()
        && !draft.classification.category.label().is_empty()
}

/// Location: city and locality
pub fn is_step2_valid(draft: &ListingDraft) -> bool {
    is_filled(&draft.location.city) && is_filled(&draft.location.locality)
}

/// Property profile: rooms, area, floors, price, and a long enough description
pub fn is_step3_valid(draft: &ListingDraft) -> bool {
    let profile = &draft.profile;
    profile.bedrooms.is_some()
        && profile.bathrooms.is_some()
        && profile.balconies.is_some()
        && profile.carpet_area().is_present()
        && !profile.total_floors.trim().is_empty()
        && !profile.property_floor.trim().is_empty()
        && !profile.expected_price().trim().is_empty()
        && profile.description.encode_utf16().count() >= MIN_DESCRIPTION_CHARS
}

/// Validity of any step; media and amenities are optional
pub fn is_step_valid(step: u8, draft: &ListingDraft) -> bool {
    match step {
        1 => is_step1_valid(draft),
        2 => is_step2_valid(draft),
        3 => is_step3_valid(draft),
        4 | 5 => true,
        _ => false,
    }
}
