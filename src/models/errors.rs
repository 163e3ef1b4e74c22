use crate::models::TransactionRow;
use crate::types::{ConfirmationCode, LineNumber};
use thiserror::Error;

/// The export does not have the shape of an earnings report. Any one of these rejects the whole file.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Line [{line}]: [{column}] is required")]
    MissingValue {
        line: LineNumber,
        column: &'static str
    },
    #[error("Line [{line}]: [{value}] is not a known transaction type")]
    InvalidType {
        line: LineNumber,
        value: String
    },
    #[error("Line [{line}]: [{value}] is not a supported currency")]
    UnsupportedCurrency {
        line: LineNumber,
        value: String
    },
    #[error("Line [{line}]: [{column}] value [{value}] is not a date in format [{format}]")]
    InvalidDate {
        line: LineNumber,
        column: &'static str,
        value: String,
        format: String
    },
    #[error("Line [{line}]: [{column}] value [{value}] is not an integer")]
    InvalidInteger {
        line: LineNumber,
        column: &'static str,
        value: String
    },
    #[error("Line [{line}]: [{column}] value [{value}] is not a decimal amount")]
    InvalidAmount {
        line: LineNumber,
        column: &'static str,
        value: String
    },
    #[error("Line [{line}]: [{column}] must be empty but was [{value}]")]
    UnexpectedValue {
        line: LineNumber,
        column: &'static str,
        value: String
    }
}

/// Reservation rows that cannot be merged into a trustworthy reservation.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Line [{line}]: reservation row is missing [{field}]")]
    MissingField {
        line: LineNumber,
        field: &'static str
    },
    #[error("Line [{line}]: reservation [{confirmation_code}] has zero nights, so it has no nightly price")]
    ZeroNights {
        line: LineNumber,
        confirmation_code: ConfirmationCode
    },
    #[error("Line [{line}]: reservation [{confirmation_code}] disagrees on [{field}]: [{first}] vs [{second}]")]
    Inconsistent {
        line: LineNumber,
        confirmation_code: ConfirmationCode,
        field: &'static str,
        first: String,
        second: String
    },
    #[error("Line [{line}]: numeric overflow while totalling reservation [{confirmation_code}]")]
    Overflow {
        line: LineNumber,
        confirmation_code: ConfirmationCode
    }
}

impl ValidationError {
    pub fn missing_value(line: LineNumber, column: &'static str) -> Self {
        Self::MissingValue { line, column }
    }

    pub fn invalid_date(line: LineNumber, column: &'static str, value: &str, format: &str) -> Self {
        Self::InvalidDate {
            line,
            column,
            value: value.to_string(),
            format: format.to_string()
        }
    }

    pub fn invalid_integer(line: LineNumber, column: &'static str, value: &str) -> Self {
        Self::InvalidInteger { line, column, value: value.to_string() }
    }

    pub fn invalid_amount(line: LineNumber, column: &'static str, value: &str) -> Self {
        Self::InvalidAmount { line, column, value: value.to_string() }
    }

    pub fn unexpected_value(line: LineNumber, column: &'static str, value: &str) -> Self {
        Self::UnexpectedValue { line, column, value: value.to_string() }
    }
}

impl ReconcileError {
    pub fn missing_field(row: &TransactionRow, field: &'static str) -> Self {
        Self::MissingField { line: row.line, field }
    }

    pub fn inconsistent(line: LineNumber, confirmation_code: &str, field: &'static str, first: String, second: String) -> Self {
        Self::Inconsistent {
            line,
            confirmation_code: confirmation_code.to_string(),
            field,
            first,
            second
        }
    }

    pub fn overflow(line: LineNumber, confirmation_code: &str) -> Self {
        Self::Overflow { line, confirmation_code: confirmation_code.to_string() }
    }
}
