use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::errors::ReconcileError;
use crate::models::TransactionRow;
use crate::types::{ConfirmationCode, LineNumber};

/// A reservation transaction row with every field a reservation needs present.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRow {
    pub line: LineNumber,
    pub confirmation_code: ConfirmationCode,
    pub booking_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nights: u32,
    pub guest: Option<String>,
    pub listing: Option<String>,
    pub earnings_year: Option<i32>,
    pub gross_earnings: Decimal,
    pub cleaning_fee: Option<Decimal>,
    pub pet_fee: Option<Decimal>
}

impl TryFrom<&TransactionRow> for ReservationRow {
    type Error = ReconcileError;

    fn try_from(row: &TransactionRow) -> Result<Self, Self::Error> {
        let confirmation_code = row.confirmation_code.clone()
            .ok_or_else(|| ReconcileError::missing_field(row, "Confirmation code"))?;
        let nights = row.nights
            .ok_or_else(|| ReconcileError::missing_field(row, "Nights"))?;

        if nights == 0 {
            return Err(ReconcileError::ZeroNights { line: row.line, confirmation_code })
        }

        Ok(Self {
            line: row.line,
            booking_date: row.booking_date.ok_or_else(|| ReconcileError::missing_field(row, "Booking date"))?,
            start_date: row.start_date.ok_or_else(|| ReconcileError::missing_field(row, "Start date"))?,
            end_date: row.end_date.ok_or_else(|| ReconcileError::missing_field(row, "End date"))?,
            gross_earnings: row.gross_earnings.ok_or_else(|| ReconcileError::missing_field(row, "Gross earnings"))?,
            confirmation_code,
            nights,
            guest: row.guest.clone(),
            listing: row.listing.clone(),
            earnings_year: row.earnings_year,
            cleaning_fee: row.cleaning_fee,
            pet_fee: row.pet_fee
        })
    }
}

/// One guest stay, merged from every export row sharing its confirmation code.
///
/// The stay details are fixed by the first row seen. Earnings and fees are
/// running totals across all rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub confirmation_code: ConfirmationCode,
    pub booking_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nights: u32,
    pub guest: Option<String>,
    pub listing: Option<String>,
    pub earnings_year: Option<i32>,
    pub gross_earnings: Decimal,
    pub cleaning_fee: Decimal,
    pub pet_fee: Decimal
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Self {
            confirmation_code: row.confirmation_code,
            booking_date: row.booking_date,
            start_date: row.start_date,
            end_date: row.end_date,
            nights: row.nights,
            guest: row.guest,
            listing: row.listing,
            earnings_year: row.earnings_year,
            gross_earnings: row.gross_earnings,
            cleaning_fee: row.cleaning_fee.unwrap_or(Decimal::ZERO),
            pet_fee: row.pet_fee.unwrap_or(Decimal::ZERO)
        }
    }
}

impl Reservation {
    /// Folds another row for the same stay into this reservation.
    ///
    /// # Errors
    /// Returns `ReconcileError` if:
    /// - The row disagrees with this reservation on any stay detail.
    /// - A running total overflows.
    ///
    /// The reservation is left untouched when an error is returned.
    pub fn merge(&mut self, row: &ReservationRow) -> Result<(), ReconcileError> {
        self.check_consistent(row)?;

        let overflow = || ReconcileError::overflow(row.line, &self.confirmation_code);

        let gross_earnings = self.gross_earnings.checked_add(row.gross_earnings)
            .ok_or_else(overflow)?;
        let cleaning_fee = self.cleaning_fee.checked_add(row.cleaning_fee.unwrap_or(Decimal::ZERO))
            .ok_or_else(overflow)?;
        let pet_fee = self.pet_fee.checked_add(row.pet_fee.unwrap_or(Decimal::ZERO))
            .ok_or_else(overflow)?;

        self.gross_earnings = gross_earnings;
        self.cleaning_fee = cleaning_fee;
        self.pet_fee = pet_fee;

        Ok(())
    }

    /// Earnings per night once cleaning and pet fees are taken out.
    ///
    /// `None` only on decimal overflow.
    pub fn nightly_price(&self) -> Option<Decimal> {
        self.gross_earnings
            .checked_sub(self.cleaning_fee)?
            .checked_sub(self.pet_fee)?
            .checked_div(Decimal::from(self.nights))
    }

    /// Days between booking and arrival. Negative when the booking is dated after the stay starts.
    pub fn lead_time_days(&self) -> i64 {
        (self.start_date - self.booking_date).num_days()
    }

    fn check_consistent(&self, row: &ReservationRow) -> Result<(), ReconcileError> {
        let mismatch = |field: &'static str, first: String, second: String| -> Result<(), ReconcileError> {
            Err(ReconcileError::inconsistent(row.line, &self.confirmation_code, field, first, second))
        };

        if self.confirmation_code != row.confirmation_code {
            return mismatch("Confirmation code", self.confirmation_code.clone(), row.confirmation_code.clone());
        }
        if self.booking_date != row.booking_date {
            return mismatch("Booking date", self.booking_date.to_string(), row.booking_date.to_string());
        }
        if self.start_date != row.start_date {
            return mismatch("Start date", self.start_date.to_string(), row.start_date.to_string());
        }
        if self.end_date != row.end_date {
            return mismatch("End date", self.end_date.to_string(), row.end_date.to_string());
        }
        if self.nights != row.nights {
            return mismatch("Nights", self.nights.to_string(), row.nights.to_string());
        }
        if self.guest != row.guest {
            return mismatch("Guest", describe(&self.guest), describe(&row.guest));
        }
        if self.listing != row.listing {
            return mismatch("Listing", describe(&self.listing), describe(&row.listing));
        }
        if self.earnings_year != row.earnings_year {
            return mismatch("Earnings year", describe(&self.earnings_year), describe(&row.earnings_year));
        }

        Ok(())
    }
}

fn describe<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| "<empty>".to_string(), T::to_string)
}
