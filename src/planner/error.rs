//! Error types and handling
//!
//! This module contains the error taxonomy for the planner. Input
//! validation errors are recoverable (the wizard re-prompts); data-file and
//! pool-exhaustion errors indicate malformed or insufficient seed data and
//! abort the run.

use thiserror::Error;

/// Errors that can occur while planning an itinerary
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The traveler name failed validation
    #[error("Invalid name: {0:?} (letters, digits, and spaces only)")]
    InvalidName(String),

    /// No travel style was selected
    #[error("Invalid styles: select at least one travel style")]
    InvalidStyles,

    /// The duration input failed validation
    #[error("Invalid duration: {0:?} (must be a whole number of days between 1 and 10)")]
    InvalidDuration(String),

    /// A candidate pool ran out of templates before the trip was fully planned
    #[error("No {pool} candidates remaining on day {day}; the data files do not carry enough \
             templates for this request")]
    CandidatePoolExhausted {
        /// Which pool ran dry ("activity", "urban location", "natural location")
        pool: &'static str,
        /// The day being generated when the pool ran dry
        day: u8,
    },

    /// A data file could not be opened or read
    #[error("Cannot read data file {path}: {source}")]
    DataFileUnreadable {
        /// Path of the unreadable file
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A data file line did not match the expected record format
    #[error("Malformed record in {path} at line {line}: {reason}")]
    DataFileMalformed {
        /// Path of the malformed file
        path: String,
        /// 1-based line number of the offending record
        line: usize,
        /// What was wrong with the record
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<anyhow::Error> for PlannerError {
    fn from(error: anyhow::Error) -> Self {
        PlannerError::Configuration(error.to_string())
    }
}

impl PlannerError {
    /// Create an invalid-name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Create an invalid-duration error
    pub fn invalid_duration(input: impl Into<String>) -> Self {
        Self::InvalidDuration(input.into())
    }

    /// Create a pool-exhaustion error
    pub fn pool_exhausted(pool: &'static str, day: u8) -> Self {
        Self::CandidatePoolExhausted { pool, day }
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if this error is recoverable by correcting user input
    ///
    /// Recoverable errors make the wizard re-prompt; anything else is
    /// surfaced to the operator and aborts the run.
    pub fn is_recoverable(&self) -> bool {
        match self {
            PlannerError::InvalidName(_) => true,
            PlannerError::InvalidStyles => true,
            PlannerError::InvalidDuration(_) => true,
            PlannerError::CandidatePoolExhausted { .. } => false,
            PlannerError::DataFileUnreadable { .. } => false,
            PlannerError::DataFileMalformed { .. } => false,
            PlannerError::Configuration(_) => false,
            PlannerError::Io(_) => false,
            PlannerError::Serialization(_) => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            PlannerError::InvalidName(_) => "Name Validation",
            PlannerError::InvalidStyles => "Style Validation",
            PlannerError::InvalidDuration(_) => "Duration Validation",
            PlannerError::CandidatePoolExhausted { .. } => "Candidate Pool",
            PlannerError::DataFileUnreadable { .. } => "Data File",
            PlannerError::DataFileMalformed { .. } => "Data File",
            PlannerError::Configuration(_) => "Configuration",
            PlannerError::Io(_) => "IO",
            PlannerError::Serialization(_) => "Serialization",
        }
    }
}

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
