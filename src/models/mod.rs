mod errors;
mod raw_row;
mod reservation;
#[cfg(test)]
mod tests;
mod transaction;

use std::str::FromStr;

pub use errors::{ReconcileError, ValidationError};
pub use raw_row::RawRow;
pub use reservation::{Reservation, ReservationRow};
pub use transaction::{TransactionRow, DEFAULT_DATE_FORMAT};

/// Kind of a transaction line in the earnings export.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransactionType {
    Payout,
    Reservation,
    ResolutionPayout
}

impl FromStr for TransactionType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Payout" => Ok(TransactionType::Payout),
            "Reservation" => Ok(TransactionType::Reservation),
            "Resolution Payout" => Ok(TransactionType::ResolutionPayout),
            _ => Err(())
        }
    }
}

/// The only currency the export may carry.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Currency {
    Usd
}

impl FromStr for Currency {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "USD" => Ok(Currency::Usd),
            _ => Err(())
        }
    }
}
