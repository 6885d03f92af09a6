//! Error types for the USDT deposit guide

use thiserror::Error;

use crate::section::ActiveSection;

/// Main error type for guide content operations
#[derive(Error, Debug)]
pub enum GuideError {
    /// Content document could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content document is not valid JSON for the content model
    #[error("Content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Section identifier is not one of `pc`, `mobile`, `notes`
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// A step guide has no steps
    #[error("Section '{0}' has no steps")]
    EmptySection(ActiveSection),

    /// Step ordinals must run 1..=n in order
    #[error("Section '{section}' step {position} is numbered {found}")]
    StepOrder {
        section: ActiveSection,
        position: usize,
        found: u32,
    },

    /// A step carries no instruction text
    #[error("Section '{section}' step {number} has no instructions")]
    EmptyStep { section: ActiveSection, number: u32 },

    /// Notes must name at least one accepted network and a warning
    #[error("Notes are incomplete: {0}")]
    IncompleteNotes(String),

    /// Image URLs must be absolute http(s) links
    #[error("Invalid image URL: {0}")]
    InvalidImageUrl(String),
}

/// Result type alias for guide operations
pub type Result<T> = std::result::Result<T, GuideError>;
