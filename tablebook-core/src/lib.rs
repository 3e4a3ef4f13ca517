pub mod observer;
pub mod outcome;
pub mod repository;

use tablebook_shared::{BookingId, TableId};

pub use observer::{BookingObserver, ConfirmationPrompt, Notifier};
pub use outcome::{NoOpReason, Outcome, Rejection};
pub use repository::ReservationStore;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Table not found: {0}")]
    TableNotFound(TableId),
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
