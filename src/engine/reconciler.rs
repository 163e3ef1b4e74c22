use tracing::{debug, error};

use crate::models::{ReconcileError, Reservation, ReservationRow, TransactionRow};
use crate::storage::ReservationStorage;

/// Groups reservation rows by confirmation code and totals their earnings and fees.
///
/// Payout and resolution payout rows are skipped. Reservations come back in
/// the order their confirmation codes first appear.
///
/// # Errors
/// Returns `ReconcileError` on the first row that:
/// - Lacks a field every reservation needs, or has zero nights.
/// - Disagrees with an earlier row for the same confirmation code.
/// - Overflows a running total.
pub fn reconcile(rows: &[TransactionRow]) -> Result<ReservationStorage, ReconcileError> {
    let mut storage = ReservationStorage::new();

    for row in rows.iter().filter(|row| row.is_reservation()) {
        let reservation_row = ReservationRow::try_from(row)?;

        let Some(reservation) = storage.get_mut(&reservation_row.confirmation_code) else {
            debug!("Reservation [{}] first seen on line [{}]", reservation_row.confirmation_code, reservation_row.line);
            storage.insert(Reservation::from(reservation_row));
            continue;
        };

        if let Err(error) = reservation.merge(&reservation_row) {
            if matches!(error, ReconcileError::Inconsistent { .. }) {
                error!("Conflicting rows for reservation [{}]: first seen {:?}, conflicting {:?}", reservation.confirmation_code, reservation, reservation_row);
            }
            return Err(error);
        }

        debug!("Reservation [{}] merged line [{}]", reservation_row.confirmation_code, reservation_row.line);
    }

    Ok(storage)
}
