use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::Reservation;
use crate::types::ConfirmationCode;

/// Reservations keyed by confirmation code, kept in order of first appearance.
#[derive(Debug, Default)]
pub struct ReservationStorage {
    reservations: Vec<Reservation>,
    index: HashMap<ConfirmationCode, usize>
}

impl ReservationStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_mut(&mut self, confirmation_code: &str) -> Option<&mut Reservation> {
        let position = *self.index.get(confirmation_code)?;
        self.reservations.get_mut(position)
    }

    /// Adds a reservation under its confirmation code.
    ///
    /// Returns `None` and leaves storage untouched if the code is already taken;
    /// existing reservations change only through [`Reservation::merge`].
    pub fn insert(&mut self, reservation: Reservation) -> Option<&mut Reservation> {
        let position = self.reservations.len();

        match self.index.entry(reservation.confirmation_code.clone()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(position);
                self.reservations.push(reservation);
                self.reservations.last_mut()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter()
    }
}
