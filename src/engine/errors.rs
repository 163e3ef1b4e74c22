use thiserror::Error;

use crate::calendar::CalendarError;
use crate::models::{ReconcileError, ValidationError};

pub const INVALID_FORMAT_ALERT: &str = "Invalid CSV format. Please check the file and try again.";
pub const PARSE_ERROR_ALERT: &str = "Error parsing CSV. Please check the file and try again.";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Could not read export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse export as CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export does not match the earnings report format: {0}")]
    Format(#[from] ValidationError),
    #[error("Could not reconcile reservations: {0}")]
    Reconcile(#[from] ReconcileError),
    #[error("Could not build calendar: {0}")]
    Calendar(#[from] CalendarError)
}

impl PipelineError {
    /// The message shown to the user for this failure.
    ///
    /// Schema mismatches get their own message. Everything else, including
    /// read failures, reports a generic parsing error.
    pub fn alert(&self) -> &'static str {
        match self {
            PipelineError::Format(_) => INVALID_FORMAT_ALERT,
            PipelineError::Io(_)
            | PipelineError::Csv(_)
            | PipelineError::Reconcile(_)
            | PipelineError::Calendar(_) => PARSE_ERROR_ALERT
        }
    }
}
