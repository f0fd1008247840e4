use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::{LookingTo, PropertySubtype, StoredListing};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Price,
    Date,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(SortBy::Price),
            "date" => Ok(SortBy::Date),
            other => Err(format!("unknown sort key '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// Filter and sort parameters for browsing listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Restrict to active listings for this intent
    pub looking_to: Option<LookingTo>,
    pub property_type: Option<PropertySubtype>,
    /// Minimum asking price
    pub min_price: Option<f64>,
    /// Maximum asking price
    pub max_price: Option<f64>,
    /// Exact bedroom count
    pub bedrooms: Option<u32>,
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
}

impl ListingQuery {
    pub fn matches(&self, listing: &StoredListing) -> bool {
        if let Some(looking_to) = self.looking_to {
            if listing.looking_to() != looking_to || !listing.is_active() {
                return false;
            }
        }
        if let Some(subtype) = self.property_type {
            if listing.classification.subtype != Some(subtype) {
                return false;
            }
        }
        if let Some(bedrooms) = self.bedrooms {
            if listing.bedrooms_count != bedrooms {
                return false;
            }
        }
        // listings without a numeric price are not excluded by price bounds
        if let Some(price) = listing.price() {
            if self.min_price.is_some_and(|min| price < min) {
                return false;
            }
            if self.max_price.is_some_and(|max| price > max) {
                return false;
            }
        }
        true
    }

    /// Filter then sort. Sorting is stable; unpriced listings sort as zero.
    pub fn apply(&self, listings: Vec<StoredListing>) -> Vec<StoredListing> {
        let mut found: Vec<StoredListing> = listings.into_iter().filter(|l| self.matches(l)).collect();

        if let Some(sort_by) = self.sort_by {
            found.sort_by(|a, b| {
                let ordering = match sort_by {
                    SortBy::Price => a
                        .price()
                        .unwrap_or(0.0)
                        .partial_cmp(&b.price().unwrap_or(0.0))
                        .unwrap_or(Ordering::Equal),
                    SortBy::Date => a.created_at.cmp(&b.created_at),
                };
                match self.sort_order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        found
    }
}
