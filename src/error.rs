use thiserror::Error;

/// A file was refused by one of the attachment slots
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    #[error("{name}: unsupported image type '{mime_type}'")]
    UnsupportedImageType { name: String, mime_type: String },

    #[error("{name}: image is {size} bytes, the limit is 10MB")]
    ImageTooLarge { name: String, size: u64 },

    #[error("Please select a valid video file (mp4, mov, or H264) under 80MB")]
    InvalidVideo { name: String, mime_type: String, size: u64 },

    #[error("{name}: could not be read for encoding: {reason}")]
    Encoding { name: String, reason: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage write rejected: {0}")]
    WriteRejected(String),
}

/// Navigation attempts the step machine refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("step {0} is not complete")]
    StepIncomplete(u8),

    #[error("step {0} has not been reached yet")]
    StepLocked(u8),

    #[error("no such step: {0}")]
    UnknownStep(u8),
}

/// Why the pre-wizard posting panel refused to continue
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Please login first to post your property.")]
    NotLoggedIn,

    #[error("Please select the type of property you wish to advertise")]
    MissingSubtype,

    #[error("{subtype} is not offered for {category} listings")]
    SubtypeNotOffered { subtype: String, category: String },

    #[error("Please enter your contact phone number.")]
    MissingPhone,

    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,
}

/// Failures at the submission boundary. `Display` is what the user sees.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    InProgress,

    #[error("Please complete all required steps before posting")]
    Incomplete(#[source] NavError),

    #[error("Failed to submit property. Please try again.")]
    Media(#[source] MediaError),

    #[error("Failed to submit property. Please try again.")]
    Store(#[source] StoreError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
