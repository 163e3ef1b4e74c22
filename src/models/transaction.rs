use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::errors::ValidationError;
use crate::models::{Currency, RawRow, TransactionType};
use crate::types::{ConfirmationCode, LineNumber};

/// Date representation used by the earnings export (`MM/DD/YYYY`).
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// A single export line after every column has been checked and converted.
///
/// Reservation-only columns (`confirmation_code`, the stay dates, `nights`) are
/// still optional here; they are only required once a row is known to be a
/// reservation, see [`crate::models::ReservationRow`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// Line in the source file, header being line 1.
    pub line: LineNumber,
    #[allow(dead_code)]
    pub date: NaiveDate,
    #[allow(dead_code)]
    pub arriving_by: Option<NaiveDate>,
    pub transaction_type: TransactionType,
    pub confirmation_code: Option<ConfirmationCode>,
    pub booking_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub nights: Option<u32>,
    pub guest: Option<String>,
    pub listing: Option<String>,
    #[allow(dead_code)]
    pub details: Option<String>,
    #[allow(dead_code)]
    pub currency: Currency,
    #[allow(dead_code)]
    pub amount: Option<Decimal>,
    #[allow(dead_code)]
    pub paid_out: Option<Decimal>,
    #[allow(dead_code)]
    pub service_fee: Option<Decimal>,
    pub cleaning_fee: Option<Decimal>,
    pub pet_fee: Option<Decimal>,
    pub gross_earnings: Option<Decimal>,
    #[allow(dead_code)]
    pub occupancy_taxes: Option<Decimal>,
    pub earnings_year: Option<i32>
}

impl TransactionRow {
    /// Checks and converts one raw row.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - `Date`, `Type` or `Currency` is missing.
    /// - `Type` is not `Payout`, `Reservation` or `Resolution Payout`.
    /// - `Currency` is not `USD`.
    /// - A date, integer or amount column does not parse.
    /// - `Reference code` or `Fast pay fee` holds a value.
    pub fn from_raw(raw: &RawRow, line: LineNumber, date_format: &str) -> Result<Self, ValidationError> {
        let parser = ColumnParser { line, date_format };

        expect_empty(line, "Reference code", &raw.reference_code)?;
        expect_empty(line, "Fast pay fee", &raw.fast_pay_fee)?;

        let type_value = required(line, "Type", &raw.transaction_type)?;
        let transaction_type = TransactionType::from_str(type_value)
            .map_err(|_| ValidationError::InvalidType { line, value: type_value.to_string() })?;

        let currency_value = required(line, "Currency", &raw.currency)?;
        let currency = Currency::from_str(currency_value)
            .map_err(|_| ValidationError::UnsupportedCurrency { line, value: currency_value.to_string() })?;

        Ok(Self {
            line,
            date: parser.date("Date", required(line, "Date", &raw.date)?)?,
            arriving_by: parser.optional_date("Arriving by date", &raw.arriving_by)?,
            transaction_type,
            confirmation_code: present(&raw.confirmation_code).map(str::to_string),
            booking_date: parser.optional_date("Booking date", &raw.booking_date)?,
            start_date: parser.optional_date("Start date", &raw.start_date)?,
            end_date: parser.optional_date("End date", &raw.end_date)?,
            nights: parser.optional_integer("Nights", &raw.nights)?,
            guest: present(&raw.guest).map(str::to_string),
            listing: present(&raw.listing).map(str::to_string),
            details: present(&raw.details).map(str::to_string),
            currency,
            amount: parser.optional_amount("Amount", &raw.amount)?,
            paid_out: parser.optional_amount("Paid out", &raw.paid_out)?,
            service_fee: parser.optional_amount("Service fee", &raw.service_fee)?,
            cleaning_fee: parser.optional_amount("Cleaning fee", &raw.cleaning_fee)?,
            pet_fee: parser.optional_amount("Pet fee", &raw.pet_fee)?,
            gross_earnings: parser.optional_amount("Gross earnings", &raw.gross_earnings)?,
            occupancy_taxes: parser.optional_amount("Occupancy taxes", &raw.occupancy_taxes)?,
            earnings_year: parser.optional_integer("Earnings year", &raw.earnings_year)?
        })
    }

    pub fn is_reservation(&self) -> bool {
        self.transaction_type == TransactionType::Reservation
    }
}

struct ColumnParser<'a> {
    line: LineNumber,
    date_format: &'a str
}

impl ColumnParser<'_> {
    fn date(&self, column: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(value, self.date_format)
            .map_err(|_| ValidationError::invalid_date(self.line, column, value, self.date_format))
    }

    fn optional_date(&self, column: &'static str, value: &Option<String>) -> Result<Option<NaiveDate>, ValidationError> {
        present(value).map(|value| self.date(column, value)).transpose()
    }

    fn optional_integer<T: FromStr>(&self, column: &'static str, value: &Option<String>) -> Result<Option<T>, ValidationError> {
        present(value)
            .map(|value| value.parse::<T>().map_err(|_| ValidationError::invalid_integer(self.line, column, value)))
            .transpose()
    }

    fn optional_amount(&self, column: &'static str, value: &Option<String>) -> Result<Option<Decimal>, ValidationError> {
        present(value)
            .map(|value| Decimal::from_str(value).map_err(|_| ValidationError::invalid_amount(self.line, column, value)))
            .transpose()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn required<'a>(line: LineNumber, column: &'static str, value: &'a Option<String>) -> Result<&'a str, ValidationError> {
    present(value).ok_or_else(|| ValidationError::missing_value(line, column))
}

fn expect_empty(line: LineNumber, column: &'static str, value: &Option<String>) -> Result<(), ValidationError> {
    match present(value) {
        Some(value) => Err(ValidationError::unexpected_value(line, column, value)),
        None => Ok(())
    }
}
