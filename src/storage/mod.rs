mod reservation_storage;

pub use reservation_storage::ReservationStorage;
