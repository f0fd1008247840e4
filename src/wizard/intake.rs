use crate::error::IntakeError;
use crate::models::{Classification, LookingTo, PropertyCategory, PropertySubtype, SessionUser};
use tracing::{debug, info};

const RESIDENTIAL: [PropertySubtype; 8] = [
    PropertySubtype::Flat,
    PropertySubtype::Villa,
    PropertySubtype::Floor,
    PropertySubtype::Plot,
    PropertySubtype::Studio,
    PropertySubtype::Serviced,
    PropertySubtype::Farmhouse,
    PropertySubtype::Other,
];

const COMMERCIAL: [PropertySubtype; 7] = [
    PropertySubtype::Office,
    PropertySubtype::Retail,
    PropertySubtype::Plot,
    PropertySubtype::Storage,
    PropertySubtype::Industry,
    PropertySubtype::Hospitality,
    PropertySubtype::Other,
];

const PG: [PropertySubtype; 6] = [
    PropertySubtype::Single,
    PropertySubtype::Shared,
    PropertySubtype::Hostel,
    PropertySubtype::OneRk,
    PropertySubtype::Apartment,
    PropertySubtype::Other,
];

pub const PHONE_DIGITS: usize = 10;

/// Subtypes offered for an intent/category pair
pub fn subtypes_for(looking_to: LookingTo, category: PropertyCategory) -> &'static [PropertySubtype] {
    match (looking_to, category) {
        (LookingTo::Pg, _) => &PG,
        (_, PropertyCategory::Commercial) => &COMMERCIAL,
        (_, PropertyCategory::Residential) => &RESIDENTIAL,
    }
}

/// Intents offered for a category; PG is residential only
pub fn intents_for(category: PropertyCategory) -> &'static [LookingTo] {
    match category {
        PropertyCategory::Residential => &[LookingTo::Sell, LookingTo::Rent, LookingTo::Pg],
        PropertyCategory::Commercial => &[LookingTo::Sell, LookingTo::Rent],
    }
}

/// What the "start posting" panel collects before the wizard opens
#[derive(Debug, Clone)]
pub struct IntakeRequest {
    pub looking_to: LookingTo,
    pub category: PropertyCategory,
    pub subtype: Option<PropertySubtype>,
    pub phone: String,
}

/// Check the posting panel in the order the user sees the messages
pub fn check_intake(request: &IntakeRequest, user: Option<&SessionUser>) -> Result<Classification, IntakeError> {
    let user = user.ok_or(IntakeError::NotLoggedIn)?;

    let category = match request.looking_to {
        LookingTo::Pg => PropertyCategory::Residential,
        _ => request.category,
    };

    let subtype = request.subtype.ok_or(IntakeError::MissingSubtype)?;
    if !subtypes_for(request.looking_to, category).contains(&subtype) {
        return Err(IntakeError::SubtypeNotOffered {
            subtype: subtype.label().to_string(),
            category: if request.looking_to == LookingTo::Pg {
                LookingTo::Pg.label().to_string()
            } else {
                category.label().to_string()
            },
        });
    }

    let phone = request.phone.trim();
    if phone.is_empty() {
        return Err(IntakeError::MissingPhone);
    }
    if phone.chars().count() != PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        debug!("Rejected phone number of length {}", phone.chars().count());
        return Err(IntakeError::InvalidPhone);
    }

    info!(
        "✅ {} may post: {} / {} / {}",
        user.email,
        request.looking_to,
        category.label(),
        subtype.label()
    );

    Ok(Classification {
        looking_to: request.looking_to,
        category,
        subtype: Some(subtype),
    })
}
