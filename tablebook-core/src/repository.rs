use chrono::{Duration, NaiveDate, NaiveTime};
use tablebook_shared::{Booking, BookingId, Table, TableId};

use crate::CoreResult;

/// Durable home of every booking across all dates plus the table layout.
///
/// Day queries lend out borrowed bookings; the `make_*` calls return owned
/// values. The coordinator never holds references into the store between
/// calls.
pub trait ReservationStore: Send + Sync {
    /// Bookings for one day in the order they were taken.
    fn bookings_on<'a>(&'a self, date: NaiveDate) -> Box<dyn Iterator<Item = &'a Booking> + 'a>;

    fn make_reservation(
        &mut self,
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        table: TableId,
        name: &str,
        phone: &str,
    ) -> CoreResult<Booking>;

    fn make_walk_in(
        &mut self,
        covers: u32,
        date: NaiveDate,
        time: NaiveTime,
        table: TableId,
    ) -> CoreResult<Booking>;

    fn remove_booking(&mut self, id: BookingId) -> CoreResult<()>;

    /// Replace the stored copy with `booking`, matched by id.
    fn update_booking(&mut self, booking: &Booking) -> CoreResult<()>;

    /// Fails with `TableNotFound` for 0 and for numbers outside the layout.
    fn table(&self, number: TableId) -> CoreResult<Table>;

    /// Table numbers in ascending order.
    fn table_numbers(&self) -> Vec<TableId>;

    /// How long every booking made through this store holds its table.
    fn booking_duration(&self) -> Duration;
}
