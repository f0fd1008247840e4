//! Property posting wizard: draft state, step validation, completeness score,
//! media slots, and a listing repository.

pub mod config;
pub mod error;
pub mod media;
pub mod models;
pub mod store;
pub mod wizard;

pub use config::AppConfig;
pub use error::{ConfigError, IntakeError, MediaError, NavError, StoreError, SubmitError};
pub use models::{ListingDraft, StoredListing};
pub use wizard::ListingWizard;
