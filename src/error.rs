// src/error.rs
use thiserror::Error;

use crate::project::RewardId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request to {url} failed ({reason})")]
    Transport { url: String, reason: String },

    #[error("Could not get the project description, got HTTP response {code}: \"{status}\"")]
    UnexpectedStatus { code: u16, status: String },

    #[error("No embedded project data found in the page")]
    MissingProjectData,

    #[error("Malformed project data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reward {reward} is missing field '{field}'")]
    MissingField { reward: RewardId, field: &'static str },

    #[error("Reward {id} is no longer listed by the project")]
    VanishedReward { id: RewardId },

    #[error("Project URL not valid: {input} ({reason})")]
    InvalidUrl { input: String, reason: String },

    #[error("Invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },

    #[error("Input closed before any reward was selected")]
    PromptClosed,

    #[error("Selection {index} is out of range ({count} choices)")]
    SelectionOutOfRange { index: usize, count: usize },

    #[error("No reward was selected")]
    EmptySelection,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
