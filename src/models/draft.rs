use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::wizard::pricing::price_per_unit_area;

/// Dropdown placeholder shown before a city is picked
pub const CITY_PLACEHOLDER: &str = "Select City";
/// Dropdown placeholder shown before a locality is picked
pub const LOCALITY_PLACEHOLDER: &str = "Select Locality";
/// Dropdown placeholder shown before a project/society is picked
pub const PROJECT_PLACEHOLDER: &str = "Select Project/Society/Building";

/// Returns true when a free-text or dropdown value carries real content
pub fn is_filled(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && value != CITY_PLACEHOLDER
        && value != LOCALITY_PLACEHOLDER
        && value != PROJECT_PLACEHOLDER
}

/// What the owner wants to do with the property
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LookingTo {
    #[default]
    Sell,
    Rent,
    #[serde(rename = "PG")]
    Pg,
}

impl LookingTo {
    pub fn label(&self) -> &'static str {
        match self {
            LookingTo::Sell => "Sell",
            LookingTo::Rent => "Rent / Lease",
            LookingTo::Pg => "PG",
        }
    }
}

impl fmt::Display for LookingTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LookingTo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sell" | "buy" => Ok(LookingTo::Sell),
            "rent" | "lease" | "rent / lease" => Ok(LookingTo::Rent),
            "pg" => Ok(LookingTo::Pg),
            other => Err(format!("unknown transaction intent '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    #[default]
    Residential,
    Commercial,
}

impl PropertyCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyCategory::Residential => "Residential",
            PropertyCategory::Commercial => "Commercial",
        }
    }
}

impl FromStr for PropertyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(PropertyCategory::Residential),
            "commercial" => Ok(PropertyCategory::Commercial),
            other => Err(format!("unknown property category '{}'", other)),
        }
    }
}

/// Concrete kind of property, shared across the residential, commercial and PG catalogs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PropertySubtype {
    Flat,
    Villa,
    Floor,
    Plot,
    Studio,
    Serviced,
    Farmhouse,
    Office,
    Retail,
    Storage,
    Industry,
    Hospitality,
    Single,
    Shared,
    Hostel,
    OneRk,
    Apartment,
    Other,
}

impl PropertySubtype {
    pub const ALL: [PropertySubtype; 18] = [
        PropertySubtype::Flat,
        PropertySubtype::Villa,
        PropertySubtype::Floor,
        PropertySubtype::Plot,
        PropertySubtype::Studio,
        PropertySubtype::Serviced,
        PropertySubtype::Farmhouse,
        PropertySubtype::Office,
        PropertySubtype::Retail,
        PropertySubtype::Storage,
        PropertySubtype::Industry,
        PropertySubtype::Hospitality,
        PropertySubtype::Single,
        PropertySubtype::Shared,
        PropertySubtype::Hostel,
        PropertySubtype::OneRk,
        PropertySubtype::Apartment,
        PropertySubtype::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PropertySubtype::Flat => "flat",
            PropertySubtype::Villa => "villa",
            PropertySubtype::Floor => "floor",
            PropertySubtype::Plot => "plot",
            PropertySubtype::Studio => "studio",
            PropertySubtype::Serviced => "serviced",
            PropertySubtype::Farmhouse => "farmhouse",
            PropertySubtype::Office => "office",
            PropertySubtype::Retail => "retail",
            PropertySubtype::Storage => "storage",
            PropertySubtype::Industry => "industry",
            PropertySubtype::Hospitality => "hospitality",
            PropertySubtype::Single => "single",
            PropertySubtype::Shared => "shared",
            PropertySubtype::Hostel => "hostel",
            PropertySubtype::OneRk => "one-rk",
            PropertySubtype::Apartment => "apartment",
            PropertySubtype::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertySubtype::Flat => "Flat/Apartment",
            PropertySubtype::Villa => "Independent House / Villa",
            PropertySubtype::Floor => "Independent / Builder Floor",
            PropertySubtype::Plot => "Plot / Land",
            PropertySubtype::Studio => "1 RK/ Studio Apartment",
            PropertySubtype::Serviced => "Serviced Apartment",
            PropertySubtype::Farmhouse => "Farmhouse",
            PropertySubtype::Office => "Office",
            PropertySubtype::Retail => "Retail",
            PropertySubtype::Storage => "Storage",
            PropertySubtype::Industry => "Industry",
            PropertySubtype::Hospitality => "Hospitality",
            PropertySubtype::Single => "Single Room",
            PropertySubtype::Shared => "Shared Room",
            PropertySubtype::Hostel => "Hostel",
            PropertySubtype::OneRk => "1 RK",
            PropertySubtype::Apartment => "Full Apartment",
            PropertySubtype::Other => "Other",
        }
    }
}

impl FromStr for PropertySubtype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PropertySubtype::ALL
            .iter()
            .copied()
            .find(|subtype| subtype.id() == wanted)
            .ok_or_else(|| format!("unknown property subtype '{}'", s.trim()))
    }
}

/// Step 1 fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Classification {
    pub looking_to: LookingTo,
    pub category: PropertyCategory,
    pub subtype: Option<PropertySubtype>,
}

/// Step 2 fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocationDetails {
    pub city: String,
    pub locality: String,
    pub sub_locality: String,
    /// Building / society name
    pub project_society: String,
    pub house_no: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AreaUnit {
    #[default]
    #[serde(rename = "sq.ft.")]
    SqFt,
    #[serde(rename = "sq.m.")]
    SqM,
    #[serde(rename = "sq.yards")]
    SqYards,
    #[serde(rename = "acres")]
    Acres,
    #[serde(rename = "hectares")]
    Hectares,
}

impl AreaUnit {
    pub fn label(&self) -> &'static str {
        match self {
            AreaUnit::SqFt => "sq.ft.",
            AreaUnit::SqM => "sq.m.",
            AreaUnit::SqYards => "sq.yards",
            AreaUnit::Acres => "acres",
            AreaUnit::Hectares => "hectares",
        }
    }
}

/// An area value as typed by the user, paired with its unit
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AreaMeasurement {
    pub value: String,
    pub unit: AreaUnit,
}

impl AreaMeasurement {
    pub fn is_present(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Step 3 fields.
///
/// `expected_price` and `carpet_area` are only writable through their setters so
/// that `price_per_unit_area` follows exactly those two inputs. Deserializing
/// always re-derives it, whatever value the source carried.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "ProfileFields")]
pub struct PropertyProfile {
    /// "1 BHK", "2 BHK", "Other"
    pub apartment_type: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub balconies: Option<u32>,
    carpet_area: AreaMeasurement,
    pub built_up_area: AreaMeasurement,
    pub super_built_up_area: AreaMeasurement,
    pub total_floors: String,
    pub property_floor: String,
    pub availability_status: String,
    pub ownership: String,
    expected_price: String,
    price_per_unit_area: String,
    pub price_includes_all: bool,
    pub price_excludes_tax: bool,
    pub price_negotiable: bool,
    pub description: String,
}

/// Input shape of `PropertyProfile`, without the derived field
#[derive(Deserialize)]
#[serde(default)]
struct ProfileFields {
    apartment_type: String,
    bedrooms: Option<u32>,
    bathrooms: Option<u32>,
    balconies: Option<u32>,
    carpet_area: AreaMeasurement,
    built_up_area: AreaMeasurement,
    super_built_up_area: AreaMeasurement,
    total_floors: String,
    property_floor: String,
    availability_status: String,
    ownership: String,
    expected_price: String,
    price_includes_all: bool,
    price_excludes_tax: bool,
    price_negotiable: bool,
    description: String,
}

impl Default for ProfileFields {
    fn default() -> Self {
        Self {
            apartment_type: String::new(),
            bedrooms: None,
            bathrooms: None,
            balconies: None,
            carpet_area: AreaMeasurement::default(),
            built_up_area: AreaMeasurement::default(),
            super_built_up_area: AreaMeasurement::default(),
            total_floors: String::new(),
            property_floor: String::new(),
            availability_status: "Ready to move".to_string(),
            ownership: "Freehold".to_string(),
            expected_price: String::new(),
            price_includes_all: false,
            price_excludes_tax: false,
            price_negotiable: false,
            description: String::new(),
        }
    }
}

impl From<ProfileFields> for PropertyProfile {
    fn from(fields: ProfileFields) -> Self {
        let price_per_unit_area = price_per_unit_area(&fields.expected_price, &fields.carpet_area.value);
        Self {
            apartment_type: fields.apartment_type,
            bedrooms: fields.bedrooms,
            bathrooms: fields.bathrooms,
            balconies: fields.balconies,
            carpet_area: fields.carpet_area,
            built_up_area: fields.built_up_area,
            super_built_up_area: fields.super_built_up_area,
            total_floors: fields.total_floors,
            property_floor: fields.property_floor,
            availability_status: fields.availability_status,
            ownership: fields.ownership,
            expected_price: fields.expected_price,
            price_per_unit_area,
            price_includes_all: fields.price_includes_all,
            price_excludes_tax: fields.price_excludes_tax,
            price_negotiable: fields.price_negotiable,
            description: fields.description,
        }
    }
}

impl Default for PropertyProfile {
    fn default() -> Self {
        ProfileFields::default().into()
    }
}

impl PropertyProfile {
    pub fn carpet_area(&self) -> &AreaMeasurement {
        &self.carpet_area
    }

    pub fn expected_price(&self) -> &str {
        &self.expected_price
    }

    pub fn price_per_unit_area(&self) -> &str {
        &self.price_per_unit_area
    }

    pub fn set_expected_price(&mut self, price: impl Into<String>) {
        self.expected_price = price.into();
        self.refresh_price_per_unit_area();
    }

    pub fn set_carpet_area(&mut self, value: impl Into<String>) {
        self.carpet_area.value = value.into();
        self.refresh_price_per_unit_area();
    }

    /// Changing the unit does not touch the derived price
    pub fn set_carpet_area_unit(&mut self, unit: AreaUnit) {
        self.carpet_area.unit = unit;
    }

    pub(crate) fn refresh_price_per_unit_area(&mut self) {
        self.price_per_unit_area = price_per_unit_area(&self.expected_price, &self.carpet_area.value);
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoadWidthUnit {
    #[default]
    Feet,
    Meters,
}

/// Step 5 facets. Every list is an independent multi-select.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Amenities {
    pub furnishing: Vec<String>,
    pub covered_parking: Option<u32>,
    pub open_parking: Option<u32>,
    pub features: Vec<String>,
    pub water_source: Vec<String>,
    pub orientation: Vec<String>,
    pub flooring: Vec<String>,
    pub road_width: String,
    pub road_width_unit: RoadWidthUnit,
    pub nearby: Vec<String>,
    pub gated_society: bool,
    pub corner_property: bool,
    pub pet_friendly: bool,
    pub wheelchair_friendly: bool,
}

impl Amenities {
    /// Flips membership of `value` in a multi-select facet
    pub fn toggle(facet: &mut Vec<String>, value: &str) {
        match facet.iter().position(|v| v == value) {
            Some(idx) => {
                facet.remove(idx);
            }
            None => facet.push(value.to_string()),
        }
    }
}

/// The wizard's accumulated form state, minus media
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListingDraft {
    pub classification: Classification,
    pub location: LocationDetails,
    pub profile: PropertyProfile,
    pub amenities: Amenities,
}

impl ListingDraft {
    /// Parse a draft from JSON; read-only fields are re-derived
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_preselect_intent_and_category() {
        let draft = ListingDraft::default();
        assert_eq!(draft.classification.looking_to, LookingTo::Sell);
        assert_eq!(draft.classification.category, PropertyCategory::Residential);
        assert_eq!(draft.profile.availability_status, "Ready to move");
        assert_eq!(draft.profile.ownership, "Freehold");
        assert_eq!(draft.profile.carpet_area().unit, AreaUnit::SqFt);
    }

    #[test]
    fn test_placeholders_do_not_count_as_filled() {
        assert!(!is_filled(""));
        assert!(!is_filled("   "));
        assert!(!is_filled(CITY_PLACEHOLDER));
        assert!(!is_filled(LOCALITY_PLACEHOLDER));
        assert!(!is_filled(PROJECT_PLACEHOLDER));
        assert!(is_filled("Mumbai"));
    }

    #[test]
    fn test_subtype_parses_from_id() {
        assert_eq!("one-rk".parse::<PropertySubtype>(), Ok(PropertySubtype::OneRk));
        assert_eq!(" Villa ".parse::<PropertySubtype>(), Ok(PropertySubtype::Villa));
        assert!("castle".parse::<PropertySubtype>().is_err());
    }

    #[test]
    fn test_looking_to_serializes_pg_in_caps() {
        let json = serde_json::to_string(&LookingTo::Pg).unwrap();
        assert_eq!(json, "\"PG\"");
        assert_eq!("rent".parse::<LookingTo>(), Ok(LookingTo::Rent));
    }

    #[test]
    fn test_toggle_facet() {
        let mut facet = vec!["Lift".to_string()];
        Amenities::toggle(&mut facet, "Gym");
        Amenities::toggle(&mut facet, "Lift");
        assert_eq!(facet, vec!["Gym".to_string()]);
    }

    #[test]
    fn test_from_json_ignores_supplied_derived_price() {
        let json = r#"{
            "profile": {
                "carpet_area": { "value": "500", "unit": "sq.ft." },
                "expected_price": "250000",
                "price_per_unit_area": "1.00"
            }
        }"#;
        let draft = ListingDraft::from_json(json).unwrap();
        assert_eq!(draft.profile.price_per_unit_area(), "500.00");
        assert_eq!(draft.classification.looking_to, LookingTo::Sell);
    }

    #[test]
    fn test_unit_change_keeps_derived_price() {
        let mut profile = PropertyProfile::default();
        profile.set_carpet_area("1200");
        profile.set_expected_price("6000000");
        assert_eq!(profile.price_per_unit_area(), "5000.00");

        profile.set_carpet_area_unit(AreaUnit::SqM);
        profile.description = "Corner flat".to_string();
        assert_eq!(profile.carpet_area().unit, AreaUnit::SqM);
        assert_eq!(profile.price_per_unit_area(), "5000.00");
    }

    #[test]
    fn test_profile_round_trip_keeps_derived_price() {
        let mut profile = PropertyProfile::default();
        profile.set_carpet_area("800");
        profile.set_expected_price("400000");

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"price_per_unit_area\":\"500.00\""));
        let reloaded: PropertyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, profile);
    }
}
