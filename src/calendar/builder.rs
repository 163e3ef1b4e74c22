use chrono::NaiveDate;

use crate::calendar::errors::CalendarError;
use crate::calendar::{Calendar, CalendarRecord};
use crate::models::Reservation;
use crate::types::format_usd;

/// Projects reconciled reservations onto calendar entries, keeping their order.
///
/// The calendar opens on the first reservation's start date, or on `today`
/// when there are none. Input is trusted to be reconciled already.
pub fn build_calendar<'a, I>(reservations: I, today: NaiveDate) -> Result<Calendar, CalendarError>
where
    I: IntoIterator<Item = &'a Reservation>
{
    let events = reservations.into_iter()
        .map(CalendarRecord::from_reservation)
        .collect::<Result<Vec<_>, _>>()?;

    let default_date = events.first().map_or(today, |event| event.start);

    Ok(Calendar { default_date, events })
}

impl CalendarRecord {
    pub fn from_reservation(reservation: &Reservation) -> Result<Self, CalendarError> {
        let nightly_price = reservation.nightly_price()
            .ok_or_else(|| CalendarError::Overflow { confirmation_code: reservation.confirmation_code.clone() })?;

        Ok(Self {
            label: format!("{} - {} days prior", format_usd(nightly_price), reservation.lead_time_days()),
            start: reservation.start_date,
            end: reservation.end_date,
            all_day: true
        })
    }
}
