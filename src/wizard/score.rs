//! Completeness score shown next to the wizard.
//!
//! Only steps 1 to 3 award points. Photos, video and amenities add nothing, and a
//! step that was completed and later emptied keeps gating its fields in. Both are
//! open product questions and are left as observed.

use crate::models::draft::is_filled;
use crate::models::ListingDraft;

use super::steps::StepNavigator;

pub const MAX_SCORE: u8 = 100;

const STEP1_POINTS: u32 = 20;
const STEP2_POINTS_PER_FIELD: u32 = 5;
const STEP3_POINTS_PER_FIELD: u32 = 3;

/// Score for `draft` given where the user stands in the wizard
pub fn completeness_score(draft: &ListingDraft, current_step: u8, completed: &[u8]) -> u8 {
    let mut score = 0u32;

    let classification = &draft.classification;
    if completed.contains(&1)
        || (!classification.looking_to.label().is_empty() && !classification.category.label().is_empty())
    {
        score += STEP1_POINTS;
    }

    if current_step > 2 || completed.contains(&2) {
        let location = &draft.location;
        let filled = [
            &location.city,
            &location.locality,
            &location.house_no,
            &location.project_society,
        ]
        .into_iter()
        .filter(|value| is_filled(value))
        .count() as u32;
        score += filled * STEP2_POINTS_PER_FIELD;
    }

    if current_step >= 3 || completed.contains(&3) {
        let profile = &draft.profile;
        let filled = [
            profile.bedrooms.is_some(),
            profile.bathrooms.is_some(),
            profile.balconies.is_some(),
            profile.carpet_area().is_present(),
            !profile.total_floors.is_empty(),
            !profile.property_floor.is_empty(),
            !profile.availability_status.is_empty(),
            !profile.ownership.is_empty(),
            !profile.expected_price().is_empty(),
            !profile.description.is_empty(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count() as u32;
        score += filled * STEP3_POINTS_PER_FIELD;
    }

    score.min(MAX_SCORE as u32) as u8
}

/// Convenience over a navigator's state
pub fn score_for(draft: &ListingDraft, nav: &StepNavigator) -> u8 {
    completeness_score(draft, nav.current(), nav.completed())
}
