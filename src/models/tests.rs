use super::{Currency, RawRow, Reservation, ReservationRow, TransactionRow, TransactionType, DEFAULT_DATE_FORMAT};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::errors::{ReconcileError, ValidationError};

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid date {year}-{month}-{day}"))
}

fn reservation_raw_row() -> RawRow {
    RawRow {
        date: Some("01/20/2024".to_string()),
        transaction_type: Some("Reservation".to_string()),
        confirmation_code: Some("HMABC123".to_string()),
        booking_date: Some("01/01/2024".to_string()),
        start_date: Some("01/15/2024".to_string()),
        end_date: Some("01/20/2024".to_string()),
        nights: Some("5".to_string()),
        guest: Some("Jane Doe".to_string()),
        listing: Some("Lake House".to_string()),
        currency: Some("USD".to_string()),
        amount: Some("250.00".to_string()),
        cleaning_fee: Some("50.00".to_string()),
        gross_earnings: Some("300.00".to_string()),
        earnings_year: Some("2024".to_string()),
        ..RawRow::default()
    }
}

fn payout_raw_row() -> RawRow {
    RawRow {
        date: Some("01/21/2024".to_string()),
        arriving_by: Some("01/23/2024".to_string()),
        transaction_type: Some("Payout".to_string()),
        details: Some("Transfer to checking".to_string()),
        currency: Some("USD".to_string()),
        paid_out: Some("250.00".to_string()),
        ..RawRow::default()
    }
}

fn reservation_row(confirmation_code: &str, gross_earnings: &str, cleaning_fee: Option<&str>, pet_fee: Option<&str>) -> Result<ReservationRow> {
    Ok(ReservationRow {
        line: 2,
        confirmation_code: confirmation_code.to_string(),
        booking_date: date(2024, 1, 1)?,
        start_date: date(2024, 1, 15)?,
        end_date: date(2024, 1, 20)?,
        nights: 5,
        guest: Some("Jane Doe".to_string()),
        listing: Some("Lake House".to_string()),
        earnings_year: Some(2024),
        gross_earnings: Decimal::from_str(gross_earnings)?,
        cleaning_fee: cleaning_fee.map(Decimal::from_str).transpose()?,
        pet_fee: pet_fee.map(Decimal::from_str).transpose()?
    })
}

#[test]
fn test_reservation_row_converts_to_typed_values() -> Result<()> {
    let row = TransactionRow::from_raw(&reservation_raw_row(), 2, DEFAULT_DATE_FORMAT)?;

    assert_eq!(row.line, 2);
    assert_eq!(row.transaction_type, TransactionType::Reservation);
    assert_eq!(row.currency, Currency::Usd);
    assert_eq!(row.confirmation_code.as_deref(), Some("HMABC123"));
    assert_eq!(row.booking_date, Some(date(2024, 1, 1)?));
    assert_eq!(row.start_date, Some(date(2024, 1, 15)?));
    assert_eq!(row.nights, Some(5));
    assert_eq!(row.gross_earnings, Some(Decimal::from_str("300.00")?));
    assert_eq!(row.pet_fee, None);
    assert_eq!(row.earnings_year, Some(2024));
    assert!(row.is_reservation());

    Ok(())
}

#[test]
fn test_payout_row_converts_without_reservation_fields() -> Result<()> {
    let row = TransactionRow::from_raw(&payout_raw_row(), 3, DEFAULT_DATE_FORMAT)?;

    assert_eq!(row.transaction_type, TransactionType::Payout);
    assert_eq!(row.arriving_by, Some(date(2024, 1, 23)?));
    assert_eq!(row.confirmation_code, None);
    assert_eq!(row.paid_out, Some(Decimal::from_str("250.00")?));
    assert!(!row.is_reservation());

    Ok(())
}

#[test]
fn test_resolution_payout_type_literal_is_accepted() -> Result<()> {
    let raw = RawRow {
        transaction_type: Some("Resolution Payout".to_string()),
        ..payout_raw_row()
    };

    let row = TransactionRow::from_raw(&raw, 4, DEFAULT_DATE_FORMAT)?;

    assert_eq!(row.transaction_type, TransactionType::ResolutionPayout);

    Ok(())
}

#[test]
fn test_blank_values_are_treated_as_absent() -> Result<()> {
    let raw = RawRow {
        pet_fee: Some("   ".to_string()),
        guest: Some(String::new()),
        ..reservation_raw_row()
    };

    let row = TransactionRow::from_raw(&raw, 2, DEFAULT_DATE_FORMAT)?;

    assert_eq!(row.pet_fee, None);
    assert_eq!(row.guest, None);

    Ok(())
}

#[test]
fn test_unknown_type_literal_is_rejected() {
    let raw = RawRow {
        transaction_type: Some("Adjustment".to_string()),
        ..reservation_raw_row()
    };

    let result = TransactionRow::from_raw(&raw, 7, DEFAULT_DATE_FORMAT);

    assert!(matches!(result, Err(ValidationError::InvalidType { line: 7, .. })));
}

#[test]
fn test_non_usd_currency_is_rejected() {
    let raw = RawRow {
        currency: Some("EUR".to_string()),
        ..reservation_raw_row()
    };

    let result = TransactionRow::from_raw(&raw, 2, DEFAULT_DATE_FORMAT);

    assert!(matches!(result, Err(ValidationError::UnsupportedCurrency { .. })));
}

#[test]
fn test_missing_required_columns_are_rejected() {
    let without_date = RawRow { date: None, ..payout_raw_row() };
    let without_type = RawRow { transaction_type: None, ..payout_raw_row() };
    let without_currency = RawRow { currency: None, ..payout_raw_row() };

    assert!(matches!(TransactionRow::from_raw(&without_date, 2, DEFAULT_DATE_FORMAT), Err(ValidationError::MissingValue { column: "Date", .. })));
    assert!(matches!(TransactionRow::from_raw(&without_type, 2, DEFAULT_DATE_FORMAT), Err(ValidationError::MissingValue { column: "Type", .. })));
    assert!(matches!(TransactionRow::from_raw(&without_currency, 2, DEFAULT_DATE_FORMAT), Err(ValidationError::MissingValue { column: "Currency", .. })));
}

#[test]
fn test_unparsable_values_are_rejected() {
    let bad_date = RawRow { start_date: Some("2024-01-15".to_string()), ..reservation_raw_row() };
    let bad_nights = RawRow { nights: Some("five".to_string()), ..reservation_raw_row() };
    let negative_nights = RawRow { nights: Some("-1".to_string()), ..reservation_raw_row() };
    let bad_amount = RawRow { gross_earnings: Some("300.00.1".to_string()), ..reservation_raw_row() };

    assert!(matches!(TransactionRow::from_raw(&bad_date, 2, DEFAULT_DATE_FORMAT), Err(ValidationError::InvalidDate { column: "Start date", .. })));
    assert!(matches!(TransactionRow::from_raw(&bad_nights, 2, DEFAULT_DATE_FORMAT), Err(ValidationError::InvalidInteger { column: "Nights", .. })));
    assert!(matches!(TransactionRow::from_raw(&negative_nights, 2, DEFAULT_DATE_FORMAT), Err(ValidationError::InvalidInteger { column: "Nights", .. })));
    assert!(matches!(TransactionRow::from_raw(&bad_amount, 2, DEFAULT_DATE_FORMAT), Err(ValidationError::InvalidAmount { column: "Gross earnings", .. })));
}

#[test]
fn test_custom_date_format_is_honoured() -> Result<()> {
    let raw = RawRow {
        date: Some("2024-01-20".to_string()),
        booking_date: Some("2024-01-01".to_string()),
        start_date: Some("2024-01-15".to_string()),
        end_date: Some("2024-01-20".to_string()),
        ..reservation_raw_row()
    };

    let row = TransactionRow::from_raw(&raw, 2, "%Y-%m-%d")?;

    assert_eq!(row.end_date, Some(date(2024, 1, 20)?));

    Ok(())
}

#[test]
fn test_must_be_empty_columns_reject_values() {
    let with_reference = RawRow { reference_code: Some("REF1".to_string()), ..payout_raw_row() };
    let with_fast_pay = RawRow { fast_pay_fee: Some("1.50".to_string()), ..payout_raw_row() };

    assert!(matches!(TransactionRow::from_raw(&with_reference, 2, DEFAULT_DATE_FORMAT), Err(ValidationError::UnexpectedValue { column: "Reference code", .. })));
    assert!(matches!(TransactionRow::from_raw(&with_fast_pay, 2, DEFAULT_DATE_FORMAT), Err(ValidationError::UnexpectedValue { column: "Fast pay fee", .. })));
}

#[test]
fn test_reservation_row_requires_reservation_fields() -> Result<()> {
    let complete = TransactionRow::from_raw(&reservation_raw_row(), 2, DEFAULT_DATE_FORMAT)?;

    let cases: Vec<(&str, TransactionRow)> = vec![
        ("Confirmation code", TransactionRow { confirmation_code: None, ..complete.clone() }),
        ("Booking date", TransactionRow { booking_date: None, ..complete.clone() }),
        ("Start date", TransactionRow { start_date: None, ..complete.clone() }),
        ("End date", TransactionRow { end_date: None, ..complete.clone() }),
        ("Nights", TransactionRow { nights: None, ..complete.clone() }),
        ("Gross earnings", TransactionRow { gross_earnings: None, ..complete.clone() }),
    ];

    for (missing, row) in cases {
        let result = ReservationRow::try_from(&row);

        assert!(matches!(result, Err(ReconcileError::MissingField { field, .. }) if field == missing));
    }

    assert!(ReservationRow::try_from(&complete).is_ok());

    Ok(())
}

#[test]
fn test_reservation_row_rejects_zero_nights() -> Result<()> {
    let row = TransactionRow {
        nights: Some(0),
        ..TransactionRow::from_raw(&reservation_raw_row(), 2, DEFAULT_DATE_FORMAT)?
    };

    let result = ReservationRow::try_from(&row);

    assert!(matches!(result, Err(ReconcileError::ZeroNights { line: 2, .. })));
    assert!(result.err().map(|error| error.to_string()).unwrap_or_default().contains("no nightly price"));

    Ok(())
}

#[test]
fn test_merge_sums_earnings_and_fees_exactly() -> Result<()> {
    let mut reservation = Reservation::from(reservation_row("HMABC123", "33.33", Some("10.10"), None)?);

    reservation.merge(&reservation_row("HMABC123", "33.33", None, Some("5.05"))?)?;
    reservation.merge(&reservation_row("HMABC123", "33.34", Some("0.20"), None)?)?;

    assert_eq!(reservation.gross_earnings, Decimal::from_str("100.00")?);
    assert_eq!(reservation.cleaning_fee, Decimal::from_str("10.30")?);
    assert_eq!(reservation.pet_fee, Decimal::from_str("5.05")?);

    Ok(())
}

#[test]
fn test_merge_rejects_conflicting_stay_details() -> Result<()> {
    let first = reservation_row("HMABC123", "100.00", None, None)?;
    let mut reservation = Reservation::from(first.clone());

    let conflicting = vec![
        ("Nights", ReservationRow { nights: 6, ..first.clone() }),
        ("Booking date", ReservationRow { booking_date: date(2023, 12, 31)?, ..first.clone() }),
        ("Start date", ReservationRow { start_date: date(2024, 1, 16)?, ..first.clone() }),
        ("End date", ReservationRow { end_date: date(2024, 1, 21)?, ..first.clone() }),
        ("Guest", ReservationRow { guest: None, ..first.clone() }),
        ("Listing", ReservationRow { listing: Some("Cabin".to_string()), ..first.clone() }),
        ("Earnings year", ReservationRow { earnings_year: Some(2025), ..first.clone() }),
    ];

    for (field_name, row) in conflicting {
        let result = reservation.merge(&row);

        assert!(matches!(result, Err(ReconcileError::Inconsistent { field, .. }) if field == field_name));
    }

    assert_eq!(reservation.gross_earnings, Decimal::from_str("100.00")?);

    Ok(())
}

#[test]
fn test_merge_leaves_reservation_untouched_on_overflow() -> Result<()> {
    let mut reservation = Reservation::from(reservation_row("HMABC123", "1", None, None)?);
    reservation.gross_earnings = Decimal::MAX;

    let result = reservation.merge(&reservation_row("HMABC123", "1", None, None)?);

    assert!(matches!(result, Err(ReconcileError::Overflow { .. })));
    assert_eq!(reservation.gross_earnings, Decimal::MAX);

    Ok(())
}

#[test]
fn test_nightly_price_subtracts_fees_before_dividing() -> Result<()> {
    let reservation = Reservation::from(reservation_row("HMABC123", "300", Some("50"), Some("0"))?);

    assert_eq!(reservation.nightly_price(), Some(Decimal::from_str("50")?));

    Ok(())
}

#[test]
fn test_lead_time_can_be_negative() -> Result<()> {
    let mut reservation = Reservation::from(reservation_row("HMABC123", "300", None, None)?);

    assert_eq!(reservation.lead_time_days(), 14);

    reservation.booking_date = date(2024, 1, 18)?;

    assert_eq!(reservation.lead_time_days(), -3);

    Ok(())
}
