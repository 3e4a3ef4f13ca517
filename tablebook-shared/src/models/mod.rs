pub mod booking;
pub mod table;
pub mod time_slot;

pub use booking::{Booking, BookingId, BookingKind, Customer};
pub use table::{Table, TableId};
pub use time_slot::{TimeSlot, DEFAULT_BOOKING_DURATION_MINUTES};
