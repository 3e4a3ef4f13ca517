pub mod models;
pub mod pii;

pub use models::{Booking, BookingId, BookingKind, Customer, Table, TableId, TimeSlot};
pub use pii::Masked;
